//! Error types for NestEgg.
//!
//! Every error here is a validation failure: something about the plan the
//! caller described cannot be projected. The projection engine itself has no
//! failure modes once a request has validated.

use thiserror::Error;

/// A specialized Result type for NestEgg operations.
pub type NestEggResult<T> = Result<T, NestEggError>;

/// The main error type for NestEgg operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NestEggError {
    /// A numeric field could not be parsed.
    #[error("Invalid {field} value: {input:?}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// The raw text that failed to parse.
        input: String,
    },

    /// A numeric field parsed but is outside its allowed domain.
    #[error("Invalid {field} value: {reason}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },

    /// The compounding frequency is neither a known token nor a supported period count.
    #[error("Unsupported compounding frequency: {value:?}")]
    UnsupportedFrequency {
        /// The rejected token or integer, as given.
        value: String,
    },
}

impl NestEggError {
    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(field: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            input: input.into(),
        }
    }

    /// Creates an out of range error.
    #[must_use]
    pub fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    /// Creates an unsupported frequency error.
    #[must_use]
    pub fn unsupported_frequency(value: impl Into<String>) -> Self {
        Self::UnsupportedFrequency {
            value: value.into(),
        }
    }

    /// Name of the request field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidNumber { field, .. } | Self::OutOfRange { field, .. } => field,
            Self::UnsupportedFrequency { .. } => "compound_frequency",
        }
    }
}
