//! Lattice Cryptography Primitives
//!
//! Plain-LWE arithmetic over Z_q with q a power of two: dense matrices,
//! a bit-addressable buffer and the dense bit packing used on the wire.
//! Every reduction here is a mask with `q - 1`.

pub mod bits;
pub mod matrix;
pub mod params;
pub mod serialize;


pub use bits::BitBuffer;
pub use matrix::Matrix;
pub use params::{Modulus, Modulus2Pow15, Modulus2Pow16};
pub use serialize::{pack, packed_len, unpack};
