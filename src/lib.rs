//! Labkit - coursework routines as a library
//!
//! This library collects the self-contained routines from the
//! web-programming labs:
//! - Phone number validation and normalization
//! - Form-field rules (email, password, username)
//! - Sequence and Monte Carlo exercises
//! - Complex-number and 3D point algebra
//! - People records and employee display strings
//! - Score averaging, list transforms, and price-table totals

pub mod cli;
pub mod complex;
pub mod geometry;
pub mod numeric;
pub mod people;
pub mod phone;
pub mod prices;
pub mod stats;
pub mod validate;

use thiserror::Error;

/// Error type for CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Prices(#[from] prices::PriceError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
