//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised when a scalar input fails boundary validation.
///
/// These are surfaced before any computation proceeds; the pure formulas in
/// `domain::block` never raise them for in-range numeric input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("Field '{field}' must be a finite number, got {actual}")]
    NotFinite { field: String, actual: f64 },

    #[error("Field '{field}' must not be negative, got {actual}")]
    Negative { field: String, actual: f64 },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be positive, got {actual}")]
    NotPositive { field: String, actual: f64 },
}

impl InvalidInputError {
    /// Creates a not-finite (NaN or infinite) input error.
    pub fn not_finite(field: impl Into<String>, actual: f64) -> Self {
        InvalidInputError::NotFinite {
            field: field.into(),
            actual,
        }
    }

    /// Creates a negative input error.
    pub fn negative(field: impl Into<String>, actual: f64) -> Self {
        InvalidInputError::Negative {
            field: field.into(),
            actual,
        }
    }

    /// Creates an out of range input error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        InvalidInputError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a not-positive input error.
    pub fn not_positive(field: impl Into<String>, actual: f64) -> Self {
        InvalidInputError::NotPositive {
            field: field.into(),
            actual,
        }
    }
}

/// Validates that a value is a finite, non-negative number.
pub fn require_non_negative(field: &str, value: f64) -> Result<f64, InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::not_finite(field, value));
    }
    if value < 0.0 {
        return Err(InvalidInputError::negative(field, value));
    }
    Ok(value)
}

/// Validates that a value is a finite, strictly positive number.
pub fn require_positive(field: &str, value: f64) -> Result<f64, InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::not_finite(field, value));
    }
    if value <= 0.0 {
        return Err(InvalidInputError::not_positive(field, value));
    }
    Ok(value)
}

/// Errors raised while ingesting a batch table row.
///
/// The first malformed row aborts the whole batch; there is no partial
/// result table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedRowError {
    #[error("Row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("Row {row}: field '{field}' is not numeric: '{value}'")]
    NonNumeric {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Row {row}: field '{field}' must not be negative, got {value}")]
    NegativeValue {
        row: usize,
        field: &'static str,
        value: f64,
    },

    #[error("Row {row} is not a table record")]
    NotARecord { row: usize },
}

impl MalformedRowError {
    /// Returns the zero-based index of the offending row.
    pub fn row(&self) -> usize {
        match self {
            MalformedRowError::MissingField { row, .. }
            | MalformedRowError::NonNumeric { row, .. }
            | MalformedRowError::NegativeValue { row, .. }
            | MalformedRowError::NotARecord { row } => *row,
        }
    }
}
