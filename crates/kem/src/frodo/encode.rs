//! Message codec: B-bit groups to and from the high bits of Z_q.
//!
//! A message of `B * mbar * nbar` bits is cut into B-bit groups in row-major
//! entry order. Within a group the first message bit has weight 2^0.

use frodokem_algorithms::lattice::{BitBuffer, Matrix, Modulus};
use frodokem_algorithms::validate;

use super::params::FrodoParams;
use crate::error::Result;

/// Integer encoding: `k * 2^(D-B) mod q`
#[inline]
pub fn ec<M: Modulus>(k: u16, b: usize) -> u16 {
    (((k as u32) << (M::LOG_Q - b)) as u16) & M::MASK
}

/// Integer decoding: `round(c / 2^(D-B)) mod 2^B`, ties rounded up
#[inline]
pub fn dc<M: Modulus>(c: u16, b: usize) -> u16 {
    let shift = M::LOG_Q - b;
    let half = 1u32 << (shift - 1);
    (((c as u32 + half) >> shift) & ((1u32 << b) - 1)) as u16
}

/// Encode a `LEN_MU`-byte message as an mbar x nbar matrix.
pub fn encode<P: FrodoParams>(message: &BitBuffer) -> Result<Matrix<P::Modulus>> {
    validate::length("encode message", message.as_bytes().len(), P::LEN_MU)?;

    let groups = P::MBAR * P::NBAR;
    let mut entries = Vec::with_capacity(groups);
    for idx in 0..groups {
        let mut k = 0u16;
        for l in 0..P::B {
            k |= (message.get_bit(idx * P::B + l) as u16) << l;
        }
        entries.push(ec::<P::Modulus>(k, P::B));
    }
    Ok(Matrix::from_entries(P::MBAR, P::NBAR, entries)?)
}

/// Decode an mbar x nbar matrix back into a `LEN_MU`-byte message.
pub fn decode<P: FrodoParams>(matrix: &Matrix<P::Modulus>) -> Result<BitBuffer> {
    validate::dimensions("decode", matrix.dims(), (P::MBAR, P::NBAR))?;

    let mut message = BitBuffer::new(P::LEN_MU * 8);
    for (idx, &c) in matrix.entries().iter().enumerate() {
        let k = dc::<P::Modulus>(c, P::B);
        for l in 0..P::B {
            message.set_bit(idx * P::B + l, ((k >> l) & 1) as u8);
        }
    }
    Ok(message)
}
