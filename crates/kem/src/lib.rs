//! FrodoKEM key encapsulation
//!
//! This crate implements FrodoKEM: an IND-CPA public-key encryption scheme
//! built on plain (unstructured) LWE over Z_q with q a power of two, and an
//! IND-CCA key encapsulation mechanism obtained from it by a
//! Fujisaki-Okamoto transform with implicit rejection.
//!
//! Three parameter sets are provided: [`Frodo640`], [`Frodo976`] and
//! [`Frodo1344`]. All of them implement [`frodokem_api::Kem`].

#![forbid(unsafe_code)]

pub mod error;
pub mod frodo;

// Re-exports
pub use error::{Error, Result};
pub use frodo::{
    Frodo1344, Frodo1344Pke, Frodo640, Frodo640Pke, Frodo976, Frodo976Pke, FrodoCiphertext,
    FrodoKem, FrodoParams, FrodoPke, FrodoPkeSecretKey, FrodoPublicKey, FrodoSecretKey,
};
