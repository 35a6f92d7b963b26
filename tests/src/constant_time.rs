//! XOF invocation counting.
//!
//! `CountingXof<X>` forwards to `X` and records, per thread, how many
//! instances were created and how many bytes went in and out. Plugging it
//! into a parameter set makes every hash the KEM computes observable.

use std::cell::Cell;

use frodokem_algorithms::lattice::Modulus2Pow15;
use frodokem_algorithms::{ExtendableOutputFunction, Result, ShakeXof128};
use frodokem_kem::frodo::{FrodoKem, FrodoParams};
use frodokem_params::pqc::frodo::{FrodoParamSet, FRODO640};

/// Aggregate XOF activity on the current thread
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XofCounts {
    /// `new()` calls
    pub instances: usize,
    /// `update()` calls
    pub updates: usize,
    /// Bytes absorbed
    pub absorbed: usize,
    /// Bytes squeezed
    pub squeezed: usize,
}

thread_local! {
    static COUNTS: Cell<XofCounts> = Cell::new(XofCounts::default());
}

fn record(f: impl FnOnce(&mut XofCounts)) {
    COUNTS.with(|cell| {
        let mut counts = cell.get();
        f(&mut counts);
        cell.set(counts);
    });
}

/// Zero this thread's counters.
pub fn reset_counts() {
    COUNTS.with(|cell| cell.set(XofCounts::default()));
}

/// Snapshot of this thread's counters.
pub fn counts() -> XofCounts {
    COUNTS.with(Cell::get)
}

/// Run `f` and return its result with the XOF activity it caused.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, XofCounts) {
    reset_counts();
    let out = f();
    (out, counts())
}

/// An XOF wrapper that counts what passes through it
pub struct CountingXof<X> {
    inner: X,
}

impl<X: ExtendableOutputFunction> ExtendableOutputFunction for CountingXof<X> {
    fn new() -> Self {
        record(|c| c.instances += 1);
        Self { inner: X::new() }
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        record(|c| {
            c.updates += 1;
            c.absorbed += data.len();
        });
        self.inner.update(data)
    }

    fn finalize(&mut self) -> Result<()> {
        self.inner.finalize()
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        record(|c| c.squeezed += output.len());
        self.inner.squeeze(output)
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.reset()
    }

    fn security_level() -> usize {
        X::security_level()
    }
}

/// FrodoKEM-640 with an instrumented SHAKE-128
pub struct Counting640Params;

impl FrodoParams for Counting640Params {
    type Modulus = Modulus2Pow15;
    type Xof = CountingXof<ShakeXof128>;
    const SET: FrodoParamSet = FRODO640;
}

/// KEM over `Counting640Params`
pub type CountingFrodo640 = FrodoKem<Counting640Params>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_track_usage() {
        let (out, c) = measure(|| CountingXof::<ShakeXof128>::generate(b"abc", 40).unwrap());
        assert_eq!(out, ShakeXof128::generate(b"abc", 40).unwrap());
        assert_eq!(
            c,
            XofCounts {
                instances: 1,
                updates: 1,
                absorbed: 3,
                squeezed: 40,
            }
        );
    }
}
