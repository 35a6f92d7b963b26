//! Trait definition for Public Key Encryption (PKE) schemes.

use super::serialize::{Serialize, SerializeSecret};
use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

/// Trait for Public Key Encryption schemes.
///
/// Plaintexts have a fixed length chosen by the scheme; implementations
/// reject anything else with `Error::InvalidLength`.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone + Serialize;

    /// Secret key type for the PKE scheme.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type produced by the PKE scheme.
    type Ciphertext: Clone + Serialize;

    /// Returns the PKE algorithm name.
    fn name() -> &'static str;

    /// Generates a new key pair for the PKE scheme.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext message using the recipient's public key.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `plaintext` - The message to encrypt.
    /// * `rng` - A cryptographically secure random number generator.
    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext using the recipient's secret key.
    ///
    /// An IND-CPA scheme has no integrity check: a tampered ciphertext
    /// decrypts to some other message rather than failing.
    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Zeroizing<Vec<u8>>>;
}
