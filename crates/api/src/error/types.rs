//! Error type definitions for frodokem operations

use thiserror::Error;

/// Primary error type for frodokem operations
///
/// Decapsulation never reports a failed re-encryption check through this
/// type; only structurally invalid inputs surface as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid ciphertext error
    #[error("Invalid ciphertext: {context}: {message}")]
    InvalidCiphertext {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Matrix operands of incompatible shape
    #[error("{context}: dimension mismatch (expected {expected:?}, got {actual:?})")]
    DimensionMismatch {
        context: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A sampler was handed fewer random bytes than it consumes
    #[error("{context}: insufficient randomness (needed {needed} bytes, got {available})")]
    InsufficientRandomness {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// Serialization error
    #[error("Serialization error: {context}: {message}")]
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for frodokem operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidCiphertext { message, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::DimensionMismatch {
                expected, actual, ..
            } => Self::DimensionMismatch {
                context,
                expected,
                actual,
            },
            Self::InsufficientRandomness {
                needed, available, ..
            } => Self::InsufficientRandomness {
                context,
                needed,
                available,
            },
            Self::SerializationError { message, .. } => {
                Self::SerializationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}
