//! params.rs - Power-of-two moduli for plain-LWE arithmetic

/// A power-of-two modulus q = 2^LOG_Q with LOG_Q <= 16
///
/// Entries of a `Matrix<M>` always lie in `[0, q)`. Because q divides
/// 2^16, wrapping arithmetic followed by `reduce` is exact.
pub trait Modulus: Clone + core::fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    /// log2(q), also the packed width D of one entry in bits
    const LOG_Q: usize;

    /// The modulus q
    const Q: u32 = 1 << Self::LOG_Q;

    /// q - 1, the reduction mask
    const MASK: u16 = ((1u32 << Self::LOG_Q) - 1) as u16;

    /// Reduce a wide value modulo q
    #[inline(always)]
    fn reduce(value: u64) -> u16 {
        (value as u16) & Self::MASK
    }
}

/// q = 2^15 (Frodo-640)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modulus2Pow15;

impl Modulus for Modulus2Pow15 {
    const LOG_Q: usize = 15;
}

/// q = 2^16 (Frodo-976, Frodo-1344)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modulus2Pow16;

impl Modulus for Modulus2Pow16 {
    const LOG_Q: usize = 16;
}
