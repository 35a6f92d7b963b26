//! FrodoKEM IND-CCA construction: Fujisaki-Okamoto transform with
//! implicit rejection.
//!
//! Secret key layout: `s || pk || S (be16 words) || pkh`.

use frodokem_algorithms::lattice::BitBuffer;
use frodokem_algorithms::ExtendableOutputFunction;
use frodokem_internal::constant_time::ct_select_bytes;
use log::debug;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::cpa_pke::{
    decrypt_cpa, encrypt_cpa_with_seed, keypair_cpa_from_seeds, pack_ciphertext,
    pack_secret_matrix, unpack_ciphertext, unpack_secret_matrix,
};
use super::params::{check_params, FrodoParams};
use crate::error::{validate, Result};

pub(crate) type SharedSecretBytes = Zeroizing<Vec<u8>>;

/// Bytes of randomness consumed by key generation: `s || seedSE || z`.
pub(crate) fn keygen_seed_len<P: FrodoParams>() -> usize {
    P::LEN_S + P::LEN_SEED_SE + P::LEN_Z
}

fn xof<P: FrodoParams>(parts: &[&[u8]], len: usize) -> Result<Vec<u8>> {
    Ok(P::Xof::generate_parts(parts, len)?)
}

/// Key generation from `s || seedSE || z`. Returns `(pk, sk)`.
pub(crate) fn kem_keygen_from_seed<P: FrodoParams>(
    randomness: &[u8],
) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    check_params::<P>()?;
    validate::randomness("kem keygen", randomness.len(), keygen_seed_len::<P>())?;
    debug!("{}: key generation", P::NAME);

    let (s, rest) = randomness.split_at(P::LEN_S);
    let (seed_se, rest) = rest.split_at(P::LEN_SEED_SE);
    let z = &rest[..P::LEN_Z];

    // seedA = XOF(z)
    let seed_a = xof::<P>(&[z], P::LEN_SEED_A)?;
    let (pk, s_matrix) = keypair_cpa_from_seeds::<P>(&seed_a, seed_se)?;
    let pkh = xof::<P>(&[&pk[..]], P::LEN_PKH)?;

    let mut sk = Zeroizing::new(Vec::with_capacity(P::SECRET_KEY_BYTES));
    sk.extend_from_slice(s);
    sk.extend_from_slice(&pk);
    sk.extend_from_slice(&pack_secret_matrix::<P>(&s_matrix));
    sk.extend_from_slice(&pkh);
    debug_assert_eq!(sk.len(), P::SECRET_KEY_BYTES);

    Ok((pk, sk))
}

/// Key generation drawing `s || seedSE || z` from `rng`.
pub(crate) fn kem_keygen<P: FrodoParams, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    let mut randomness = Zeroizing::new(vec![0u8; keygen_seed_len::<P>()]);
    rng.fill_bytes(&mut randomness);
    kem_keygen_from_seed::<P>(&randomness)
}

/// Encapsulation of a caller-chosen message `mu`.
pub(crate) fn kem_encaps_with_message<P: FrodoParams>(
    pk: &[u8],
    mu: &[u8],
) -> Result<(Vec<u8>, SharedSecretBytes)> {
    check_params::<P>()?;
    validate::key("public", pk.len(), P::PUBLIC_KEY_BYTES)?;
    validate::message(P::NAME, mu.len(), P::LEN_MU)?;
    debug!("{}: encapsulation", P::NAME);

    let pkh = xof::<P>(&[pk], P::LEN_PKH)?;
    let seed = Zeroizing::new(xof::<P>(&[&pkh[..], mu], P::LEN_SEED_SE + P::LEN_K)?);
    let (seed_se, k) = seed.split_at(P::LEN_SEED_SE);

    let (c1, c2) = encrypt_cpa_with_seed::<P>(pk, &BitBuffer::from_bytes(mu), seed_se)?;
    let ct = pack_ciphertext::<P>(&c1, &c2);
    let ss = Zeroizing::new(xof::<P>(&[&ct[..], k], P::LEN_SS)?);

    Ok((ct, ss))
}

/// Encapsulation drawing `mu` from `rng`.
pub(crate) fn kem_encaps<P: FrodoParams, R: RngCore + CryptoRng>(
    pk: &[u8],
    rng: &mut R,
) -> Result<(Vec<u8>, SharedSecretBytes)> {
    let mut mu = Zeroizing::new(vec![0u8; P::LEN_MU]);
    rng.fill_bytes(&mut mu);
    kem_encaps_with_message::<P>(pk, &mu)
}

/// Decapsulation with implicit rejection.
///
/// Both candidate secrets, `XOF(ct || k')` and `XOF(ct || s)`, are always
/// computed; the re-encryption verdict only feeds a constant-time select.
pub(crate) fn kem_decaps<P: FrodoParams>(sk: &[u8], ct: &[u8]) -> Result<SharedSecretBytes> {
    check_params::<P>()?;
    validate::key("secret", sk.len(), P::SECRET_KEY_BYTES)?;
    debug!("{}: decapsulation", P::NAME);

    let (c1, c2) = unpack_ciphertext::<P>(ct)?;

    let (s, rest) = sk.split_at(P::LEN_S);
    let (pk, rest) = rest.split_at(P::PUBLIC_KEY_BYTES);
    let (s_bytes, pkh) = rest.split_at(P::PKE_SECRET_KEY_BYTES);
    let s_matrix = unpack_secret_matrix::<P>(s_bytes)?;

    let mu_prime = decrypt_cpa::<P>(&s_matrix, &c1, &c2)?;
    let seed = Zeroizing::new(xof::<P>(
        &[pkh, mu_prime.as_bytes()],
        P::LEN_SEED_SE + P::LEN_K,
    )?);
    let (seed_se, k_prime) = seed.split_at(P::LEN_SEED_SE);

    let (c1_prime, c2_prime) = encrypt_cpa_with_seed::<P>(pk, &mu_prime, seed_se)?;
    let matches = c1.ct_eq(&c1_prime) & c2.ct_eq(&c2_prime);

    let genuine = Zeroizing::new(xof::<P>(&[ct, k_prime], P::LEN_SS)?);
    let rejected = Zeroizing::new(xof::<P>(&[ct, s], P::LEN_SS)?);

    Ok(Zeroizing::new(ct_select_bytes(&rejected, &genuine, matches)))
}
