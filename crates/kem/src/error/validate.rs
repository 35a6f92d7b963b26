//! Validation utilities for KEM operations

use super::{Error, Result};

/// Validate key length
pub fn key(key_type: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKey {
            key_type,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate plaintext length
pub fn message(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidMessage {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate ciphertext length before any unpacking
pub fn ciphertext(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::MalformedCiphertext {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a sampler has enough input bytes
pub fn randomness(context: &'static str, available: usize, needed: usize) -> Result<()> {
    if available < needed {
        return Err(Error::InsufficientRandomness {
            context,
            needed,
            available,
        });
    }
    Ok(())
}

/// Validate serialization format
pub fn serialization(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Serialization { context, details });
    }
    Ok(())
}
