//! matrix.rs - Dense row-major matrices over Z_q

use core::marker::PhantomData;

use frodokem_internal::constant_time::ct_eq_words;
use subtle::Choice;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::params::Modulus;
use crate::error::{validate, Error, Result};

/// A rows x cols matrix over Z_q, stored row-major
///
/// Operations never mutate their inputs; each returns a fresh matrix.
/// Entries are wiped on drop, so secret and error matrices need no
/// manual cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<M: Modulus> {
    rows: usize,
    cols: usize,
    entries: Vec<u16>,
    _marker: PhantomData<M>,
}

impl<M: Modulus> Matrix<M> {
    /// Creates a matrix with every entry set to zero
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: vec![0; rows * cols],
            _marker: PhantomData,
        }
    }

    /// Creates a matrix from row-major entries, reducing each modulo q
    pub fn from_entries(rows: usize, cols: usize, mut entries: Vec<u16>) -> Result<Self> {
        validate::length("matrix entries", entries.len(), rows * cols)?;
        for e in entries.iter_mut() {
            *e &= M::MASK;
        }
        Ok(Self {
            rows,
            cols,
            entries,
            _marker: PhantomData,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as (rows, cols)
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entry at row `i`, column `j`
    ///
    /// # Panics
    /// Panics if the index is out of range.
    pub fn get(&self, i: usize, j: usize) -> u16 {
        assert!(i < self.rows && j < self.cols, "matrix index out of range");
        self.entries[i * self.cols + j]
    }

    /// Set the entry at row `i`, column `j`, reducing modulo q
    ///
    /// # Panics
    /// Panics if the index is out of range.
    pub fn set(&mut self, i: usize, j: usize, value: u16) {
        assert!(i < self.rows && j < self.cols, "matrix index out of range");
        self.entries[i * self.cols + j] = value & M::MASK;
    }

    /// Row-major view of the entries
    pub fn entries(&self) -> &[u16] {
        &self.entries
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[u16] {
        &self.entries[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns `(self * b + e) mod q`
    pub fn mul_add(&self, b: &Self, e: &Self) -> Result<Self> {
        validate::dimensions("matrix mul_add", e.dims(), (self.rows, b.cols))?;
        self.product(b, Some(e))
    }

    /// Returns `(self * b) mod q`
    pub fn mul(&self, b: &Self) -> Result<Self> {
        self.product(b, None)
    }

    /// Returns `(self + b) mod q`
    pub fn add(&self, b: &Self) -> Result<Self> {
        validate::dimensions("matrix add", b.dims(), self.dims())?;
        let entries = self
            .entries
            .iter()
            .zip(b.entries.iter())
            .map(|(x, y)| x.wrapping_add(*y) & M::MASK)
            .collect();
        Ok(self.with_entries(entries))
    }

    /// Returns `(self - b) mod q`
    pub fn sub(&self, b: &Self) -> Result<Self> {
        validate::dimensions("matrix sub", b.dims(), self.dims())?;
        let entries = self
            .entries
            .iter()
            .zip(b.entries.iter())
            .map(|(x, y)| x.wrapping_sub(*y) & M::MASK)
            .collect();
        Ok(self.with_entries(entries))
    }

    /// Constant-time equality over every entry. Shapes are public.
    pub fn ct_eq(&self, other: &Self) -> Choice {
        if self.dims() != other.dims() {
            return Choice::from(0);
        }
        ct_eq_words(&self.entries, &other.entries)
    }

    fn with_entries(&self, entries: Vec<u16>) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            entries,
            _marker: PhantomData,
        }
    }

    // i-k-j order: the inner loop walks one row of `b`.
    fn product(&self, b: &Self, e: Option<&Self>) -> Result<Self> {
        if self.cols != b.rows {
            return Err(Error::DimensionMismatch {
                operation: "matrix mul",
                expected: (self.cols, b.cols),
                actual: b.dims(),
            });
        }

        let mut out = Vec::with_capacity(self.rows * b.cols);
        let mut acc = vec![0u64; b.cols];
        for i in 0..self.rows {
            match e {
                Some(e) => {
                    for (a, x) in acc.iter_mut().zip(e.row(i)) {
                        *a = *x as u64;
                    }
                }
                None => acc.iter_mut().for_each(|a| *a = 0),
            }
            for (k, &lhs) in self.row(i).iter().enumerate() {
                let lhs = lhs as u64;
                for (a, &rhs) in acc.iter_mut().zip(b.row(k)) {
                    *a += lhs * rhs as u64;
                }
            }
            out.extend(acc.iter().map(|a| M::reduce(*a)));
        }
        acc.zeroize();

        Ok(Self {
            rows: self.rows,
            cols: b.cols,
            entries: out,
            _marker: PhantomData,
        })
    }
}

// Zeroes every entry in place; the shape stays valid.
impl<M: Modulus> Zeroize for Matrix<M> {
    fn zeroize(&mut self) {
        self.entries.as_mut_slice().zeroize();
    }
}

impl<M: Modulus> Drop for Matrix<M> {
    fn drop(&mut self) {
        self.entries.zeroize();
    }
}

impl<M: Modulus> ZeroizeOnDrop for Matrix<M> {}
