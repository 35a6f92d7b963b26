//! Constant parameter tables for the frodokem library
//!
//! This crate holds plain data only. The scheme crates turn these tables
//! into type-level parameter sets.

pub mod pqc;
