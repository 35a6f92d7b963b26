//! FrodoKEM parameter definitions.

use frodokem_algorithms::lattice::{packed_len, Modulus, Modulus2Pow15, Modulus2Pow16};
use frodokem_algorithms::xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};
use frodokem_params::pqc::frodo::{self as global_params, FrodoParamSet};

pub use global_params::{FRODO_ENCRYPT_TAG, FRODO_KEYGEN_TAG, FRODO_LEN_X};

/// Trait defining a FrodoKEM parameter set.
///
/// Implementors pick the constant table, the modulus type and the XOF; every
/// other constant is derived from the table. `Modulus::LOG_Q` must equal
/// `SET.d`, which `check_params` enforces at run time.
pub trait FrodoParams: Send + Sync + 'static {
    /// Arithmetic modulus q = 2^D
    type Modulus: Modulus;
    /// SHAKE-128 for Frodo-640, SHAKE-256 otherwise
    type Xof: ExtendableOutputFunction;

    /// Constant table for this set.
    const SET: FrodoParamSet;

    /// Algorithm name string.
    const NAME: &'static str = Self::SET.name;
    /// Dimension n of the public matrix.
    const N: usize = Self::SET.n;
    /// Bits per packed entry, log2(q).
    const D: usize = Self::SET.d;
    /// Message bits per matrix entry.
    const B: usize = Self::SET.b;
    /// Rows of the ephemeral matrices.
    const MBAR: usize = Self::SET.mbar;
    /// Columns of the secret matrix.
    const NBAR: usize = Self::SET.nbar;

    /// Length of seedA.
    const LEN_SEED_A: usize = Self::SET.len_seed_a;
    /// Length of seedSE, without the domain-separation byte.
    const LEN_SEED_SE: usize = Self::SET.len_seed_se;
    /// Length of the encrypted message.
    const LEN_MU: usize = Self::SET.len_mu;
    /// Length of the implicit-rejection secret.
    const LEN_S: usize = Self::SET.len_s;
    /// Length of the seed seedA is derived from.
    const LEN_Z: usize = Self::SET.len_z;
    /// Length of the key material k.
    const LEN_K: usize = Self::SET.len_k;
    /// Length of the public key hash.
    const LEN_PKH: usize = Self::SET.len_pkh;
    /// Length of the shared secret.
    const LEN_SS: usize = Self::SET.len_ss;
    /// Cumulative distribution table of the error sampler.
    const CDF: &'static [u16] = Self::SET.cdf;

    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize = Self::SET.public_key_size;
    /// Size of the KEM secret key in bytes.
    const SECRET_KEY_BYTES: usize = Self::SET.secret_key_size;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize = Self::SET.ciphertext_size;
    /// Size of the PKE secret key (S as 16-bit words) in bytes.
    const PKE_SECRET_KEY_BYTES: usize = 2 * Self::SET.n * Self::SET.nbar;
}

/// Reject a parameter type whose table is internally inconsistent.
///
/// Custom implementations of `FrodoParams` get an error here instead of
/// an out-of-bounds panic deep inside the codec or sampler.
pub(crate) fn check_params<P: FrodoParams>() -> frodokem_algorithms::Result<()> {
    use frodokem_algorithms::validate;

    validate::parameter(
        <P::Modulus as Modulus>::LOG_Q == P::D,
        "modulus",
        "Modulus::LOG_Q does not match the parameter table",
    )?;
    validate::parameter(
        P::B >= 1 && P::B < P::D,
        "B",
        "bits per entry must lie in 1..D",
    )?;
    validate::parameter(
        8 * P::LEN_MU == P::B * P::MBAR * P::NBAR,
        "len_mu",
        "message length must equal B * mbar * nbar bits",
    )?;
    validate::parameter(
        !P::CDF.is_empty() && P::CDF.iter().all(|&x| x <= 0x7fff),
        "cdf",
        "CDF entries must fit in 15 bits",
    )?;
    validate::length(
        "public key size",
        P::PUBLIC_KEY_BYTES,
        P::LEN_SEED_A + packed_b_len::<P>(),
    )
}

/// Packed size of the n x nbar public matrix B.
pub(crate) fn packed_b_len<P: FrodoParams>() -> usize {
    packed_len::<P::Modulus>(P::N, P::NBAR)
}

/// Packed size of the mbar x n ciphertext matrix C1.
pub(crate) fn packed_c1_len<P: FrodoParams>() -> usize {
    packed_len::<P::Modulus>(P::MBAR, P::N)
}

// Concrete parameter implementations for FrodoKEM variants.

/// Frodo-640 parameters.
pub struct Frodo640Params;
impl FrodoParams for Frodo640Params {
    type Modulus = Modulus2Pow15;
    type Xof = ShakeXof128;
    const SET: FrodoParamSet = global_params::FRODO640;
}

/// Frodo-976 parameters.
pub struct Frodo976Params;
impl FrodoParams for Frodo976Params {
    type Modulus = Modulus2Pow16;
    type Xof = ShakeXof256;
    const SET: FrodoParamSet = global_params::FRODO976;
}

/// Frodo-1344 parameters.
pub struct Frodo1344Params;
impl FrodoParams for Frodo1344Params {
    type Modulus = Modulus2Pow16;
    type Xof = ShakeXof256;
    const SET: FrodoParamSet = global_params::FRODO1344;
}
