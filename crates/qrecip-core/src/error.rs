//! Error types for the reciprocal engine and series accumulator

use thiserror::Error;

/// Result type for qrecip operations
pub type Result<T> = std::result::Result<T, RecipError>;

/// Errors that can occur while computing fixed-point reciprocals and series
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipError {
    /// Divisor outside the engine's contract
    #[error("Invalid divisor {value}: {reason}")]
    InvalidDivisor {
        /// Offending divisor
        value: u64,
        /// Reason the divisor was rejected
        reason: String,
    },

    /// Requested term count would produce out-of-range divisors
    #[error("Term count {count} out of range (maximum {max})")]
    TermCountOutOfRange {
        /// Requested term count
        count: u64,
        /// Largest supported term count
        max: u64,
    },

    /// Integer overflow in a fixed-width computation
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// Operation that overflowed
        operation: String,
    },

    /// Invalid parameter value
    #[error("Invalid parameter {parameter}: {value} (expected {constraint})")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl RecipError {
    /// Create an invalid divisor error
    pub fn invalid_divisor(value: u64, reason: impl Into<String>) -> Self {
        Self::InvalidDivisor {
            value,
            reason: reason.into(),
        }
    }

    /// Create a term count error
    pub fn term_count(count: u64, max: u64) -> Self {
        Self::TermCountOutOfRange { count, max }
    }

    /// Create an overflow error
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(
        parameter: impl Into<String>,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = RecipError::invalid_divisor(4, "must be odd");
        assert!(matches!(err, RecipError::InvalidDivisor { value: 4, .. }));

        let err = RecipError::invalid_parameter("rounds", "0", "> 0");
        assert!(matches!(err, RecipError::InvalidParameter { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = RecipError::term_count(1 << 40, 1 << 27);
        let msg = format!("{}", err);
        assert!(msg.contains("out of range"));
        assert!(msg.contains("134217728"));

        let err = RecipError::overflow("answer = W * sum");
        assert_eq!(format!("{}", err), "Arithmetic overflow in answer = W * sum");
    }
}
