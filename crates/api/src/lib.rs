//! Public API traits and types for the frodokem library
//!
//! This crate provides the public API surface for the frodokem workspace:
//! the error type every operation reports through, the `Kem` and `Pke`
//! trait contracts, byte serialization traits and the shared-secret type.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::Key;

// Re-export all traits from the traits module
pub use traits::{Kem, Pke, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, pke, serialize};
