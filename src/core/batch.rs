use crate::core::service::calculate_service_price;
use crate::domain::rates::RateConfiguration;
use crate::utils::error::{PricingError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct QuoteInputRow {
    #[serde(with = "rust_decimal::serde::str")]
    area: Decimal,
    complexity_level: u8,
    referral_applies: Option<bool>,
    apply_discount: Option<bool>,
}

#[derive(Debug, Serialize)]
struct QuoteOutputRow {
    area: String,
    complexity_level: u8,
    complexity_multiplier: String,
    base_price: String,
    discount_amount: String,
    total_price: String,
    platform_fee: String,
    referral_fee: String,
    professional_amount: String,
    professional_percent: String,
}

fn cents(value: Decimal) -> String {
    format!("{:.2}", value)
}

/// Quotes every row of a CSV stream
/// (`area,complexity_level,referral_applies,apply_discount`) and writes one
/// flattened quote per row. Stops at the first row that fails; the error
/// names its 1-based position. Returns the number of rows written.
pub fn quote_csv<R: Read, W: Write>(
    rates: &RateConfiguration,
    input: R,
    output: W,
) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    let mut written = 0;

    for (index, row) in reader.deserialize::<QuoteInputRow>().enumerate() {
        let row_number = index + 1;
        let row = row.map_err(|e| PricingError::ProcessingError {
            message: format!("row {}: {}", row_number, e),
        })?;

        let quote = calculate_service_price(
            rates,
            row.area,
            row.complexity_level,
            row.referral_applies.unwrap_or(false),
            row.apply_discount.unwrap_or(false),
        )
        .map_err(|e| PricingError::ProcessingError {
            message: format!("row {}: {}", row_number, e),
        })?;

        writer.serialize(QuoteOutputRow {
            area: row.area.normalize().to_string(),
            complexity_level: quote.pricing.complexity_level,
            complexity_multiplier: quote.pricing.complexity_multiplier.to_string(),
            base_price: cents(quote.pricing.base_price),
            discount_amount: cents(quote.pricing.discount_amount),
            total_price: cents(quote.pricing.total_price),
            platform_fee: cents(quote.distribution.platform_fee),
            referral_fee: cents(quote.distribution.referral_fee),
            professional_amount: cents(quote.distribution.professional_amount),
            professional_percent: quote.distribution.professional_percent.normalize().to_string(),
        })?;
        written += 1;
    }

    writer.flush()?;
    tracing::info!("Quoted {} rows", written);
    Ok(written)
}

/// File variant of [`quote_csv`]; creates the output's parent directory.
pub fn quote_csv_file(rates: &RateConfiguration, input: &Path, output: &Path) -> Result<usize> {
    tracing::debug!("Reading quote requests from {}", input.display());
    let reader = File::open(input)?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    let writer = File::create(output)?;

    quote_csv(rates, reader, writer)
}
