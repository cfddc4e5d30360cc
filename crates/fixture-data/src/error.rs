//! Error types for the fixture-data crate.
//!
//! This module defines semantic error enums for fixture generation and Luhn
//! checksum computation, following the project's error handling conventions
//! with `thiserror`.

use thiserror::Error;

/// Errors raised when a generator is called with arguments that violate its
/// documented preconditions.
///
/// Every variant is raised before any output is produced; generators never
/// return partial values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The upper bound of an inclusive range is below the lower bound.
    #[error("invalid range: max ({max}) is less than min ({min})")]
    InvalidRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// A length or count that must be positive was zero.
    #[error("invalid length {length}: length must be positive")]
    InvalidLength {
        /// The rejected length.
        length: usize,
    },

    /// A collection that must contain at least one element was empty.
    #[error("expected a non-empty {what}")]
    EmptyInput {
        /// Description of the empty input.
        what: &'static str,
    },

    /// A parameter failed a precondition check.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of the violated precondition.
        reason: String,
    },

    /// The Luhn engine rejected a candidate number.
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
}

impl GenerationError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors raised by the Luhn checksum engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// The payload was empty or contained a non-digit character.
    #[error("invalid checksum input '{input}': {reason}")]
    InvalidInput {
        /// The rejected payload.
        input: String,
        /// Why the payload was rejected.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_formats_correctly() {
        let err = GenerationError::InvalidRange { min: 10, max: 2 };
        assert_eq!(
            err.to_string(),
            "invalid range: max (2) is less than min (10)"
        );
    }

    #[test]
    fn invalid_length_formats_correctly() {
        let err = GenerationError::InvalidLength { length: 0 };
        assert_eq!(err.to_string(), "invalid length 0: length must be positive");
    }

    #[test]
    fn empty_input_formats_correctly() {
        let err = GenerationError::EmptyInput { what: "alphabet" };
        assert_eq!(err.to_string(), "expected a non-empty alphabet");
    }

    #[test]
    fn invalid_argument_formats_correctly() {
        let err = GenerationError::invalid_argument("size", "chunk size must be positive");
        assert_eq!(
            err.to_string(),
            "invalid argument `size`: chunk size must be positive"
        );
    }

    #[test]
    fn checksum_error_formats_correctly() {
        let err = ChecksumError::InvalidInput {
            input: "12a4".to_owned(),
            reason: "contains a non-digit character",
        };
        assert_eq!(
            err.to_string(),
            "invalid checksum input '12a4': contains a non-digit character"
        );
    }

    #[test]
    fn checksum_error_is_transparent_inside_generation_error() {
        let inner = ChecksumError::InvalidInput {
            input: String::new(),
            reason: "must not be empty",
        };
        let err = GenerationError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }
}
