//! Generation of the public matrix A from seedA.

use frodokem_algorithms::lattice::Matrix;
use frodokem_algorithms::{validate, ExtendableOutputFunction};
use frodokem_internal::endian::u16_from_be_bytes;
use log::trace;

use super::params::FrodoParams;
use crate::error::Result;

/// Expand seedA into the n x n matrix A.
///
/// Row `i` is the first `2n` bytes of `XOF(be16(i) || seedA)`, read as
/// big-endian words and reduced mod q.
pub fn gen_matrix_a<P: FrodoParams>(seed_a: &[u8]) -> Result<Matrix<P::Modulus>> {
    validate::length("seedA", seed_a.len(), P::LEN_SEED_A)?;
    trace!("{}: expanding A ({} x {})", P::NAME, P::N, P::N);

    let n = P::N;
    let mut entries = Vec::with_capacity(n * n);
    let mut row = vec![0u8; 2 * n];
    for i in 0..n {
        let mut xof = P::Xof::new();
        xof.update(&(i as u16).to_be_bytes())?;
        xof.update(seed_a)?;
        xof.squeeze(&mut row)?;
        entries.extend(row.chunks_exact(2).map(u16_from_be_bytes));
    }
    Ok(Matrix::from_entries(n, n, entries)?)
}
