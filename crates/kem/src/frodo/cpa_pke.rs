//! FrodoPKE: the IND-CPA public-key encryption scheme.
//!
//! Public key: `seedA || Pack(B)` with `B = A*S + E`.
//! Secret key: `S` (n x nbar).
//! Ciphertext: `Pack(C1) || Pack(C2)` with `C1 = S'*A + E'` and
//! `C2 = S'*B + E'' + Encode(mu)`.
//!
//! Each operation has a deterministic core taking its seeds explicitly, so
//! that decapsulation can re-run encryption bit for bit.

use frodokem_algorithms::lattice::{pack, unpack, BitBuffer, Matrix};
use frodokem_algorithms::ExtendableOutputFunction;
use frodokem_internal::endian::{u16_words_from_be_bytes, u16_words_to_be_bytes};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::encode::{decode, encode};
use super::gen::gen_matrix_a;
use super::params::{
    check_params, packed_c1_len, FrodoParams, FRODO_ENCRYPT_TAG, FRODO_KEYGEN_TAG, FRODO_LEN_X,
};
use super::sample::sample_matrix;
use crate::error::{validate, Result};

/// The two ciphertext matrices (C1, C2).
pub(crate) type CpaCiphertextInner<P> = (
    Matrix<<P as FrodoParams>::Modulus>,
    Matrix<<P as FrodoParams>::Modulus>,
);

// XOF(tag || seedSE), squeezed to `len` bytes.
fn expand_seed_se<P: FrodoParams>(tag: u8, seed_se: &[u8], len: usize) -> Result<Zeroizing<Vec<u8>>> {
    let mut xof = P::Xof::new();
    xof.update(&[tag])?;
    xof.update(seed_se)?;
    Ok(Zeroizing::new(xof.squeeze_into_vec(len)?))
}

/// Key generation from explicit seeds. Returns `(pk_bytes, S)`.
pub(crate) fn keypair_cpa_from_seeds<P: FrodoParams>(
    seed_a: &[u8],
    seed_se: &[u8],
) -> Result<(Vec<u8>, Matrix<P::Modulus>)> {
    check_params::<P>()?;
    validate::key("seedSE", seed_se.len(), P::LEN_SEED_SE)?;

    let half = FRODO_LEN_X * P::N * P::NBAR;
    let r = expand_seed_se::<P>(FRODO_KEYGEN_TAG, seed_se, 2 * half)?;
    let s = sample_matrix::<P>(&r[..half], P::N, P::NBAR)?;
    let e = sample_matrix::<P>(&r[half..], P::N, P::NBAR)?;

    let a = gen_matrix_a::<P>(seed_a)?;
    let b = a.mul_add(&s, &e)?;

    let mut pk = Vec::with_capacity(P::PUBLIC_KEY_BYTES);
    pk.extend_from_slice(seed_a);
    pk.extend_from_slice(&pack(&b));
    Ok((pk, s))
}

/// Key generation drawing seedA and seedSE from `rng`.
pub(crate) fn keypair_cpa<P: FrodoParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(Vec<u8>, Matrix<P::Modulus>)> {
    let mut seed_a = vec![0u8; P::LEN_SEED_A];
    let mut seed_se = Zeroizing::new(vec![0u8; P::LEN_SEED_SE]);
    rng.fill_bytes(&mut seed_a);
    rng.fill_bytes(&mut seed_se);
    keypair_cpa_from_seeds::<P>(&seed_a, &seed_se)
}

/// Encryption of `mu` under `pk` with an explicit seedSE.
pub(crate) fn encrypt_cpa_with_seed<P: FrodoParams>(
    pk: &[u8],
    mu: &BitBuffer,
    seed_se: &[u8],
) -> Result<CpaCiphertextInner<P>> {
    check_params::<P>()?;
    validate::key("public", pk.len(), P::PUBLIC_KEY_BYTES)?;
    validate::message(P::NAME, mu.as_bytes().len(), P::LEN_MU)?;

    let wide = FRODO_LEN_X * P::MBAR * P::N;
    let narrow = FRODO_LEN_X * P::MBAR * P::NBAR;
    let r = expand_seed_se::<P>(FRODO_ENCRYPT_TAG, seed_se, 2 * wide + narrow)?;
    let s1 = sample_matrix::<P>(&r[..wide], P::MBAR, P::N)?;
    let e1 = sample_matrix::<P>(&r[wide..2 * wide], P::MBAR, P::N)?;
    let e2 = sample_matrix::<P>(&r[2 * wide..], P::MBAR, P::NBAR)?;

    let (seed_a, packed_b) = pk.split_at(P::LEN_SEED_A);
    let a = gen_matrix_a::<P>(seed_a)?;
    let c1 = s1.mul_add(&a, &e1)?;

    let b = unpack::<P::Modulus>(packed_b, P::N, P::NBAR)?;
    let v = s1.mul_add(&b, &e2)?;
    let c2 = v.add(&encode::<P>(mu)?)?;

    Ok((c1, c2))
}

/// Encryption drawing seedSE from `rng`. Returns the packed ciphertext.
pub(crate) fn encrypt_cpa<P: FrodoParams, R: RngCore + CryptoRng>(
    pk: &[u8],
    mu: &BitBuffer,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let mut seed_se = Zeroizing::new(vec![0u8; P::LEN_SEED_SE]);
    rng.fill_bytes(&mut seed_se);
    let (c1, c2) = encrypt_cpa_with_seed::<P>(pk, mu, &seed_se)?;
    Ok(pack_ciphertext::<P>(&c1, &c2))
}

/// Decryption: `Decode(C2 - C1*S)`.
pub(crate) fn decrypt_cpa<P: FrodoParams>(
    s: &Matrix<P::Modulus>,
    c1: &Matrix<P::Modulus>,
    c2: &Matrix<P::Modulus>,
) -> Result<BitBuffer> {
    check_params::<P>()?;
    let c1s = c1.mul(s)?;
    let m = c2.sub(&c1s)?;
    decode::<P>(&m)
}

/// `Pack(C1) || Pack(C2)`
pub(crate) fn pack_ciphertext<P: FrodoParams>(
    c1: &Matrix<P::Modulus>,
    c2: &Matrix<P::Modulus>,
) -> Vec<u8> {
    let mut ct = pack(c1);
    ct.extend_from_slice(&pack(c2));
    ct
}

/// Split and unpack a ciphertext, rejecting the wrong length up front.
pub(crate) fn unpack_ciphertext<P: FrodoParams>(ct: &[u8]) -> Result<CpaCiphertextInner<P>> {
    validate::ciphertext(P::NAME, ct.len(), P::CIPHERTEXT_BYTES)?;
    let (c1, c2) = ct.split_at(packed_c1_len::<P>());
    Ok((
        unpack::<P::Modulus>(c1, P::MBAR, P::N)?,
        unpack::<P::Modulus>(c2, P::MBAR, P::NBAR)?,
    ))
}

/// S as big-endian 16-bit words, row-major.
pub(crate) fn pack_secret_matrix<P: FrodoParams>(s: &Matrix<P::Modulus>) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(u16_words_to_be_bytes(s.entries()))
}

/// Inverse of `pack_secret_matrix`.
pub(crate) fn unpack_secret_matrix<P: FrodoParams>(bytes: &[u8]) -> Result<Matrix<P::Modulus>> {
    validate::key("PKE secret", bytes.len(), P::PKE_SECRET_KEY_BYTES)?;
    Ok(Matrix::from_entries(
        P::N,
        P::NBAR,
        u16_words_from_be_bytes(bytes),
    )?)
}
