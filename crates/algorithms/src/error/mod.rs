//! Error handling for lattice and XOF primitives

use std::borrow::Cow;

use frodokem_api::Error as CoreError;
use thiserror::Error;

/// The error type for primitives
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Matrix operands of incompatible shape
    #[error("Dimension mismatch in {operation}: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        /// Operation that rejected its operands
        operation: &'static str,
        /// Shape the operation required, as (rows, cols)
        expected: (usize, usize),
        /// Shape it was given, as (rows, cols)
        actual: (usize, usize),
    },

    /// Processing error during an operation
    #[error("Processing error in {operation}: {details}")]
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    #[error("{0}")]
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for matrix operations
pub type MatrixResult<T> = Result<T>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "primitive parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::DimensionMismatch {
                operation,
                expected,
                actual,
            } => CoreError::DimensionMismatch {
                context: operation,
                expected,
                actual,
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "primitives",
                message: msg.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let err = Error::Length {
            context: "packed matrix",
            expected: 120,
            actual: 119,
        };
        match CoreError::from(err) {
            CoreError::InvalidLength {
                context,
                expected,
                actual,
            } => {
                assert_eq!(context, "packed matrix");
                assert_eq!(expected, 120);
                assert_eq!(actual, 119);
            }
            other => panic!("Expected InvalidLength error, got {:?}", other),
        }

        let err = Error::DimensionMismatch {
            operation: "matrix add",
            expected: (8, 8),
            actual: (8, 640),
        };
        assert!(matches!(
            CoreError::from(err),
            CoreError::DimensionMismatch {
                context: "matrix add",
                expected: (8, 8),
                actual: (8, 640)
            }
        ));
    }

    #[test]
    fn test_validation_functions() {
        assert!(validate::parameter(true, "log_q", "should pass").is_ok());
        match validate::parameter(false, "log_q", "should fail").unwrap_err() {
            Error::Parameter { name, reason } => {
                assert_eq!(name, "log_q");
                assert_eq!(reason, "should fail");
            }
            other => panic!("Expected Parameter error, got {:?}", other),
        }

        assert!(validate::length("buffer", 32, 32).is_ok());
        assert!(validate::length("buffer", 16, 32).is_err());
        assert!(validate::min_length("buffer", 33, 32).is_ok());
        assert!(validate::min_length("buffer", 31, 32).is_err());

        assert!(validate::dimensions("mul", (8, 640), (8, 640)).is_ok());
        assert!(matches!(
            validate::dimensions("mul", (8, 640), (640, 8)),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
