//! Error type shared by all timecard operations.

use std::convert::Infallible;

use thiserror::Error;

/// Errors produced by timecard construction, mutation, and parsing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimecardError {
    /// The resolved end instant precedes the start instant.
    #[error("end time {end} is before start time {start}")]
    InvalidInterval { start: i64, end: i64 },

    /// Text could not be resolved to an instant.
    #[error("could not parse instant from {input:?}")]
    ParseFailure { input: String },

    /// An offset was not a whole number of seconds.
    #[error("offset must be a whole number of seconds, got {value}")]
    TypeMismatch { value: String },

    /// Applying an offset would overflow an instant.
    #[error("offset {offset} overflows instant {instant}")]
    Overflow { instant: i64, offset: i64 },

    /// Rounding resolution was zero, negative, or not finite.
    #[error("rounding resolution must be a positive number, got {to}")]
    InvalidResolution { to: f64 },
}

/// Integer offsets convert infallibly, so `shift(30)` shares the fallible path.
impl From<Infallible> for TimecardError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_values() {
        let err = TimecardError::InvalidInterval { start: 10, end: 5 };
        assert_eq!(err.to_string(), "end time 5 is before start time 10");

        let err = TimecardError::ParseFailure {
            input: "next blue moon".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not parse instant from \"next blue moon\""
        );

        let err = TimecardError::TypeMismatch {
            value: "1.5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "offset must be a whole number of seconds, got 1.5"
        );
    }
}
