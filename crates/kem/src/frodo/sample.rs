//! Error sampling from the cumulative distribution table.

use frodokem_algorithms::lattice::{Matrix, Modulus};
use frodokem_internal::endian::u16_from_be_bytes;
use log::trace;

use super::params::{FrodoParams, FRODO_LEN_X};
use crate::error::{validate, Result};

/// Map one uniform 16-bit value to a centered error term mod q.
///
/// Bit 0 is the sign, bits 1..16 are compared against every CDF entry.
/// The loop has no data-dependent branch or early exit.
pub fn sample<P: FrodoParams>(r: u16) -> u16 {
    let t = (r >> 1) as u32;
    let sign = r & 1;

    let mut e = 0u16;
    for &x in P::CDF {
        // x < t exactly when x - t wraps, both being below 2^15
        e += ((x as u32).wrapping_sub(t) >> 31) as u16;
    }

    let neg = 0u16.wrapping_sub(sign);
    (e ^ neg).wrapping_add(sign) & <P::Modulus as Modulus>::MASK
}

/// Sample a rows x cols matrix, two big-endian bytes per entry.
pub fn sample_matrix<P: FrodoParams>(
    random: &[u8],
    rows: usize,
    cols: usize,
) -> Result<Matrix<P::Modulus>> {
    let needed = FRODO_LEN_X * rows * cols;
    validate::randomness("sample_matrix", random.len(), needed)?;
    trace!("{}: sampling {} x {} error matrix", P::NAME, rows, cols);

    let entries = random[..needed]
        .chunks_exact(FRODO_LEN_X)
        .map(|chunk| sample::<P>(u16_from_be_bytes(chunk)))
        .collect();
    Ok(Matrix::from_entries(rows, cols, entries)?)
}
