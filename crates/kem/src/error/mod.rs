//! Error handling for KEM operations

use frodokem_algorithms::error::Error as PrimitiveError;
use frodokem_api::error::Error as CoreError;
use thiserror::Error;

/// Error type for KEM operations
///
/// A ciphertext that fails the decapsulation re-encryption check is not an
/// error; only inputs of the wrong shape are reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Primitive error
    #[error("Primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// Key of the wrong length for the parameter set
    #[error("Invalid {key_type} key: expected {expected} bytes, got {actual}")]
    InvalidKey {
        key_type: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Plaintext of the wrong length for the parameter set
    #[error("Invalid {algorithm} message: expected {expected} bytes, got {actual}")]
    InvalidMessage {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Sampler input shorter than two bytes per entry
    #[error("Insufficient randomness for {context}: needed {needed} bytes, got {available}")]
    InsufficientRandomness {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// Ciphertext whose length does not match the packed matrices
    #[error("Malformed {algorithm} ciphertext: expected {expected} bytes, got {actual}")]
    MalformedCiphertext {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey {
                key_type,
                expected,
                actual,
            } => CoreError::InvalidKey {
                context: key_type,
                message: format!("expected {} bytes, got {}", expected, actual),
            },
            Error::InvalidMessage {
                algorithm,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context: algorithm,
                expected,
                actual,
            },
            Error::InsufficientRandomness {
                context,
                needed,
                available,
            } => CoreError::InsufficientRandomness {
                context,
                needed,
                available,
            },
            Error::MalformedCiphertext {
                algorithm,
                expected,
                actual,
            } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: format!("expected {} bytes, got {}", expected, actual),
            },
            Error::Serialization { context, details } => CoreError::SerializationError {
                context,
                message: details.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_conversion() {
        let err = Error::MalformedCiphertext {
            algorithm: "FrodoKEM-640",
            expected: 9720,
            actual: 9719,
        };
        assert_eq!(
            CoreError::from(err),
            CoreError::InvalidCiphertext {
                context: "FrodoKEM-640",
                message: "expected 9720 bytes, got 9719".to_string(),
            }
        );

        let err = Error::InsufficientRandomness {
            context: "sample_matrix",
            needed: 128,
            available: 127,
        };
        assert!(matches!(
            CoreError::from(err),
            CoreError::InsufficientRandomness {
                needed: 128,
                available: 127,
                ..
            }
        ));

        let err: Error = PrimitiveError::DimensionMismatch {
            operation: "matrix add",
            expected: (8, 8),
            actual: (8, 1),
        }
        .into();
        assert!(matches!(
            CoreError::from(err),
            CoreError::DimensionMismatch { .. }
        ));
    }
}
