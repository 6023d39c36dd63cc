mod output;

use clap::{Parser, Subcommand};
use taxmap_core::{AppConfig, Coordinate};
use taxmap_resolver::LocationResolver;
use taxmap_salestax::SalesTaxClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "taxmap")]
#[command(about = "Sales-tax rates for coordinates, place names, and ZIP codes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the sales-tax rate at a coordinate
    Coords {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },
    /// Forward-geocode a place name, then resolve its sales-tax rate
    Place {
        /// Free-text place name, e.g. "Portland, OR"
        query: String,
    },
    /// Look up the sales-tax rate for a ZIP code directly
    Zip {
        /// Postal code to query
        zip: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = taxmap_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Coords { lat, lng } => {
            let resolver = LocationResolver::from_config(&config)?;
            run_coords(&resolver, Coordinate { lat, lng }).await
        }
        Commands::Place { query } => {
            let resolver = LocationResolver::from_config(&config)?;
            run_place(&resolver, &query).await
        }
        Commands::Zip { zip } => run_zip(&config, &zip).await,
    }
}

async fn run_coords(resolver: &LocationResolver, coord: Coordinate) -> anyhow::Result<()> {
    let resolution = resolver.resolve(coord).await?;
    output::print_resolution(&resolution);
    Ok(())
}

async fn run_place(resolver: &LocationResolver, query: &str) -> anyhow::Result<()> {
    match resolver.resolve_place(query).await? {
        Some((coord, resolution)) => {
            println!("Matched coordinates: {coord}");
            output::print_resolution(&resolution);
        }
        None => println!("no match found for '{query}'"),
    }
    Ok(())
}

async fn run_zip(config: &AppConfig, zip: &str) -> anyhow::Result<()> {
    let client = SalesTaxClient::new(
        &config.salestax_api_key,
        &config.salestax_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    match client.by_zip(zip).await? {
        Some(record) => output::print_record(zip, &record),
        None => println!("no sales-tax data for ZIP {zip}"),
    }
    Ok(())
}
