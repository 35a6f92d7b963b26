//! Internal helpers shared by the frodokem crates
//!
//! Nothing here is part of the stable public surface.

pub mod constant_time;
pub mod endian;
