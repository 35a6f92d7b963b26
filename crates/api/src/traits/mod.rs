//! Trait contracts implemented by the frodokem schemes

pub mod kem;
pub mod pke;
pub mod serialize;

pub use kem::Kem;
pub use pke::Pke;
pub use serialize::{Serialize, SerializeSecret};
