//! bits.rs - Bit-addressable byte buffer
//!
//! Bit `p` lives in byte `p / 8` at position `7 - p % 8`, i.e. bits are
//! numbered most-significant first within each byte.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

/// A fixed-capacity buffer addressed bit by bit, MSB first
///
/// Used for messages, seeds and packed matrices. Contents are wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct BitBuffer {
    bytes: Vec<u8>,
}

impl BitBuffer {
    /// A zeroed buffer large enough for `bit_len` bits
    pub fn new(bit_len: usize) -> Self {
        Self {
            bytes: vec![0u8; bit_len.div_ceil(8)],
        }
    }

    /// Wrap existing bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Wrap existing bytes, checking that they hold exactly `bit_len` bits
    pub fn from_bytes_checked(bytes: &[u8], bit_len: usize) -> Result<Self> {
        validate::length("bit buffer", bytes.len(), bit_len.div_ceil(8))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Capacity in bits
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// The underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Move the bytes out, leaving an empty buffer behind
    pub fn into_bytes(mut self) -> Vec<u8> {
        core::mem::take(&mut self.bytes)
    }

    /// Read bit `pos` as 0 or 1
    #[inline]
    pub fn get_bit(&self, pos: usize) -> u8 {
        (self.bytes[pos / 8] >> (7 - pos % 8)) & 1
    }

    /// Write the low bit of `bit` at position `pos`
    #[inline]
    pub fn set_bit(&mut self, pos: usize, bit: u8) {
        let shift = 7 - pos % 8;
        let byte = &mut self.bytes[pos / 8];
        *byte = (*byte & !(1 << shift)) | ((bit & 1) << shift);
    }

    /// Read `width` bits starting at `pos`; the first bit read is the most
    /// significant bit of the result
    pub fn read_bits(&self, pos: usize, width: usize) -> u32 {
        debug_assert!(width <= 32);
        let mut value = 0u32;
        for i in 0..width {
            value = (value << 1) | self.get_bit(pos + i) as u32;
        }
        value
    }

    /// Write the low `width` bits of `value` starting at `pos`, most
    /// significant first
    pub fn write_bits(&mut self, pos: usize, width: usize, value: u32) {
        debug_assert!(width <= 32);
        for i in 0..width {
            let bit = (value >> (width - 1 - i)) & 1;
            self.set_bit(pos + i, bit as u8);
        }
    }
}

impl AsRef<[u8]> for BitBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BitBuffer({} bits)", self.bit_len())
    }
}
