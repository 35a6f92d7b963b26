//! # frodokem
//!
//! FrodoKEM, a post-quantum key encapsulation mechanism built on plain LWE.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! frodokem = "0.3"
//! ```
//!
//! ```no_run
//! use frodokem::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (pk, sk) = Frodo640::keypair(&mut OsRng)?;
//! let (ct, ss_sender) = Frodo640::encapsulate(&mut OsRng, &pk)?;
//! let ss_receiver = Frodo640::decapsulate(&sk, &ct)?;
//! assert_eq!(ss_sender, ss_receiver);
//! # Ok::<(), frodokem::api::Error>(())
//! ```
//!
//! Secret bytes come back wrapped in [`zeroize::Zeroizing`], re-exported
//! here so callers need no direct dependency:
//!
//! ```no_run
//! use frodokem::prelude::*;
//! use frodokem::rand::rngs::OsRng;
//! use frodokem::zeroize::Zeroizing;
//!
//! let (_, sk) = Frodo976::keypair(&mut OsRng)?;
//! let stored: Zeroizing<Vec<u8>> = sk.to_bytes_zeroizing();
//! assert_eq!(stored.len(), 31296);
//! # Ok::<(), frodokem::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: serde impls for public keys and ciphertexts
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`frodokem-api`]: `Kem` / `Pke` traits, error type, `Key`
//! - [`frodokem-internal`]: constant-time and byte-order helpers
//! - [`frodokem-params`]: parameter tables for the three security levels
//! - [`frodokem-algorithms`]: SHAKE XOFs and the lattice engine
//! - [`frodokem-kem`]: FrodoPKE and FrodoKEM

// Core re-exports
pub use frodokem_algorithms as algorithms;
pub use frodokem_api as api;
pub use frodokem_internal as internal;
pub use frodokem_kem as kem;
pub use frodokem_params as params;

// Dependencies that appear in the public API
pub use rand;
pub use zeroize;

/// Common imports for frodokem users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Kem, Pke, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::api::Key;

    // Parameter sets
    pub use crate::kem::{
        Frodo1344, Frodo1344Pke, Frodo640, Frodo640Pke, Frodo976, Frodo976Pke,
    };
}
