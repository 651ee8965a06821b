//! Custom error types for fincalc
//!
//! This module defines the error hierarchy for the calculator using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fincalc operations
#[derive(Error, Debug)]
pub enum CalcError {
    /// Console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Standard input was closed before a value could be read
    #[error("Input closed before a value was entered")]
    InputClosed,

    /// Input did not parse as a finite decimal number
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// Input parsed but falls outside `[0, max)`
    #[error("{field}: {value:.2} is out of range (must be at least 0 and below {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        max: f64,
    },

    /// The session reached a state that validated input should never produce
    #[error("Unexpected internal state: {0}")]
    UnexpectedState(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl CalcError {
    /// Create an out-of-range error for a named field
    pub fn out_of_range(field: &'static str, value: f64, max: f64) -> Self {
        Self::OutOfRange { field, value, max }
    }

    /// Check if this error is a programmer defect rather than bad input
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::UnexpectedState(_))
    }
}

impl From<std::io::Error> for CalcError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fincalc operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalcError::NotANumber("abc".into());
        assert_eq!(err.to_string(), "'abc' is not a number");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = CalcError::out_of_range("term", 150.0, 120.0);
        assert_eq!(
            err.to_string(),
            "term: 150.00 is out of range (must be at least 0 and below 120)"
        );
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_unexpected_state_is_fatal() {
        let err = CalcError::UnexpectedState("collecting inputs for exit".into());
        assert!(err.is_fatal());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let calc_err: CalcError = io_err.into();
        assert!(matches!(calc_err, CalcError::Io(_)));
    }
}
