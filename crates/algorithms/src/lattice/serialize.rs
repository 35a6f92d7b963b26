//! serialize.rs - Dense packing of matrices
//!
//! Each entry occupies exactly `LOG_Q` bits, written most significant
//! first, entries in row-major order, no padding between entries.

use super::bits::BitBuffer;
use super::matrix::Matrix;
use super::params::Modulus;
use crate::error::{validate, Result};

/// Byte length of a packed rows x cols matrix over `M`
pub fn packed_len<M: Modulus>(rows: usize, cols: usize) -> usize {
    (M::LOG_Q * rows * cols).div_ceil(8)
}

/// Pack a matrix into `packed_len::<M>(rows, cols)` bytes
pub fn pack<M: Modulus>(matrix: &Matrix<M>) -> Vec<u8> {
    let width = M::LOG_Q;
    let mut buf = BitBuffer::new(width * matrix.entries().len());
    for (idx, &entry) in matrix.entries().iter().enumerate() {
        buf.write_bits(idx * width, width, entry as u32);
    }
    buf.into_bytes()
}

/// Unpack a rows x cols matrix; the input must be exactly
/// `packed_len::<M>(rows, cols)` bytes
pub fn unpack<M: Modulus>(bytes: &[u8], rows: usize, cols: usize) -> Result<Matrix<M>> {
    validate::length("packed matrix", bytes.len(), packed_len::<M>(rows, cols))?;

    let width = M::LOG_Q;
    let buf = BitBuffer::from_bytes(bytes);
    let entries = (0..rows * cols)
        .map(|idx| buf.read_bits(idx * width, width) as u16)
        .collect();
    Matrix::from_entries(rows, cols, entries)
}
