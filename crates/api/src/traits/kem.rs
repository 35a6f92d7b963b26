//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! A KEM lets a sender derive a fresh shared secret together with a
//! ciphertext that only the holder of the matching secret key can turn
//! back into the same secret.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
pub trait Kem {
    /// Public key type. Serializes to a fixed-length byte string.
    type PublicKey: Clone + Serialize;

    /// Secret key type. Wiped on drop and only exported as `Zeroizing` bytes.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type. Should be fed into a KDF or cipher right away.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type bundling both halves. Split it with `public_key` and
    /// `secret_key` before serializing.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair, drawing every random byte from `rng`.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    ///
    /// Fresh randomness is drawn from `rng` on every call.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the private key.
    ///
    /// # Security Requirements
    /// - Must run the same work whether or not the ciphertext is genuine.
    /// - Must use implicit rejection: a ciphertext that fails the
    ///   re-encryption check yields a pseudorandom secret, never an error.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
