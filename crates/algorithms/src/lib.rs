//! Primitives for the frodokem library
//!
//! This crate provides the two building blocks the FrodoKEM scheme is
//! assembled from:
//!
//! - [`xof`]: SHAKE-128/256 behind the `ExtendableOutputFunction` trait
//! - [`lattice`]: matrices over Z_q for power-of-two q, a bit-addressable
//!   buffer and dense matrix packing
//!
//! Arithmetic is data independent: no branch or memory access depends on
//! a matrix entry.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// XOF implementations
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};

// Lattice engine
pub mod lattice;
pub use lattice::{BitBuffer, Matrix, Modulus, Modulus2Pow15, Modulus2Pow16};
