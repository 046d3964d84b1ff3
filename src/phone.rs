//! Phone number validation and normalization
//!
//! Validates a raw, user-typed phone number and renders the canonical
//! `8-XXX-XXX-XX-XX` display form. Rejections are tagged either
//! `invalid_chars` or `invalid_length` and always keep the original
//! input so it can be shown back to the user.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    /// ASCII digits, whitespace, parentheses, hyphens, periods, and `+`.
    /// Unicode digits stay out so the charset check and the later digit
    /// extraction agree on what counts as a digit.
    static ref ALLOWED_CHARS: Regex = Regex::new(r"^[0-9\s().+-]*$").unwrap();
}

/// Rejection classification for a phone number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum PhoneErrorKind {
    /// The input contains a character outside the allowed set
    #[error("the phone number contains characters that are not allowed")]
    InvalidChars,

    /// The digit count does not match the expected count for the prefix
    #[error("the phone number has the wrong number of digits")]
    InvalidLength,
}

impl PhoneErrorKind {
    /// Stable machine-readable tag
    pub fn tag(&self) -> &'static str {
        match self {
            Self::InvalidChars => "invalid_chars",
            Self::InvalidLength => "invalid_length",
        }
    }
}

/// A rejected phone number, with the original input preserved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct PhoneError {
    pub kind: PhoneErrorKind,
    pub input: String,
}

/// Outcome of validating one phone number, for display or JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneOutcome {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PhoneErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PhoneOutcome {
    /// Validate a single input and capture the result
    pub fn from_input(input: &str) -> Self {
        match normalize(input) {
            Ok(formatted) => Self {
                input: input.to_string(),
                formatted: Some(formatted),
                error: None,
                message: None,
            },
            Err(e) => Self {
                input: e.input,
                formatted: None,
                error: Some(e.kind),
                message: Some(e.kind.to_string()),
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        self.formatted.is_some()
    }
}

/// Validate and normalize a phone number to `8-XXX-XXX-XX-XX`.
///
/// Inputs whose trimmed form starts with `+7` or `8` must carry 11 digits;
/// all other inputs must carry exactly 10. The last 10 digits make up the
/// canonical rendering, so the result is stable under re-validation.
pub fn normalize(input: &str) -> Result<String, PhoneError> {
    if !ALLOWED_CHARS.is_match(input) {
        return Err(PhoneError {
            kind: PhoneErrorKind::InvalidChars,
            input: input.to_string(),
        });
    }

    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    let trimmed = input.trim();
    let expected = if trimmed.starts_with("+7") || trimmed.starts_with('8') {
        11
    } else {
        10
    };

    if digits.len() != expected {
        return Err(PhoneError {
            kind: PhoneErrorKind::InvalidLength,
            input: input.to_string(),
        });
    }

    let last10 = &digits[digits.len() - 10..];
    Ok(format!(
        "8-{}-{}-{}-{}",
        &last10[..3],
        &last10[3..6],
        &last10[6..8],
        &last10[8..10]
    ))
}

/// Validate a batch of phone numbers, sorted by raw input.
pub fn normalize_all<S: AsRef<str>>(inputs: &[S]) -> Vec<PhoneOutcome> {
    let mut sorted: Vec<&str> = inputs.iter().map(|s| s.as_ref()).collect();
    sorted.sort_unstable();
    sorted.iter().map(|s| PhoneOutcome::from_input(s)).collect()
}
