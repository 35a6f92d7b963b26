//! Test support for the frodokem workspace
//!
//! The integration tests live under `tests/`. This library provides an
//! instrumented XOF that lets them compare how much hashing two code paths
//! perform, independent of wall-clock timing.
pub mod constant_time;
