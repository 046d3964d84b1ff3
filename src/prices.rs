//! Price table totals
//!
//! Reads a CSV of per-product ticket prices with `adult`, `pensioner`,
//! and `child` columns and sums each column, rounded to kopecks.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Price table errors
#[derive(Error, Debug)]
pub enum PriceError {
    #[error("failed to read price table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse price table: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the price table
#[derive(Debug, Deserialize)]
struct PriceRecord {
    adult: f64,
    pensioner: f64,
    child: f64,
}

/// Column totals, rounded to two decimal places
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PriceTotals {
    pub adult: f64,
    pub pensioner: f64,
    pub child: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum the price columns of a CSV stream with a header row.
pub fn sum_prices<R: Read>(input: R) -> Result<PriceTotals, PriceError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut totals = PriceTotals::default();

    for record in reader.deserialize() {
        let record: PriceRecord = record?;
        totals.adult += record.adult;
        totals.pensioner += record.pensioner;
        totals.child += record.child;
    }

    totals.adult = round2(totals.adult);
    totals.pensioner = round2(totals.pensioner);
    totals.child = round2(totals.child);
    Ok(totals)
}

/// Sum the price columns of a CSV file.
pub fn sum_prices_file(path: &Path) -> Result<PriceTotals, PriceError> {
    let file = std::fs::File::open(path)?;
    sum_prices(file)
}
