pub mod client;
pub mod error;
pub mod types;

pub use client::SalesTaxClient;
pub use error::SalesTaxError;
pub use types::TaxRecord;
