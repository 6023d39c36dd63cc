//! Plain-text rendering of resolution results.

use rust_decimal::Decimal;
use taxmap_resolver::{describe_area, Resolution, TaxReport};
use taxmap_salestax::TaxRecord;

/// Renders a rate fraction as a percentage with four decimal places,
/// matching the precision the upstream API publishes.
fn fmt_percent(rate: Decimal) -> String {
    format!("{:.4}%", rate * Decimal::ONE_HUNDRED)
}

fn fmt_percent_opt(rate: Option<Decimal>) -> String {
    rate.map_or_else(|| "\u{2014}".to_string(), fmt_percent)
}

pub(crate) fn print_resolution(resolution: &Resolution) {
    match resolution {
        Resolution::Resolved(report) => print_report(report),
        Resolution::Unresolved { place } => {
            println!("No sales tax data found. This location is in {place}.");
        }
    }
}

fn print_report(report: &TaxReport) {
    match &report.zip_code {
        Some(zip) => println!("Results for ZIP code {zip}"),
        None => println!("Results (no ZIP code available)"),
    }
    println!("  Location:    {}", describe_area(&report.address));
    println!("  Total rate:  {}", fmt_percent(report.total_rate));
    println!("  State rate:  {}", fmt_percent(report.state_rate));
    println!("  City rate:   {}", fmt_percent_opt(report.city_rate));
    println!("  County rate: {}", fmt_percent_opt(report.county_rate));
}

pub(crate) fn print_record(zip: &str, record: &TaxRecord) {
    println!("Results for ZIP code {zip}");
    let total = record.total_rate.unwrap_or(record.state_rate);
    println!("  Total rate:  {}", fmt_percent(total));
    println!("  State rate:  {}", fmt_percent(record.state_rate));
    println!("  City rate:   {}", fmt_percent_opt(record.city_rate));
    println!("  County rate: {}", fmt_percent_opt(record.county_rate));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_percent_prints_four_decimal_places() {
        let rate: Decimal = "0.0825".parse().unwrap();
        assert_eq!(fmt_percent(rate), "8.2500%");
    }

    #[test]
    fn fmt_percent_handles_zero() {
        assert_eq!(fmt_percent(Decimal::ZERO), "0.0000%");
    }

    #[test]
    fn fmt_percent_opt_renders_absent_rates_as_a_dash() {
        assert_eq!(fmt_percent_opt(None), "\u{2014}");
        assert_eq!(
            fmt_percent_opt(Some("0.01".parse().unwrap())),
            "1.0000%"
        );
    }
}
