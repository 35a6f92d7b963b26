//! Typed FrodoKEM keys and the `api::Kem` / `api::Pke` implementations.

use core::fmt;
use core::marker::PhantomData;

use frodokem_algorithms::lattice::{BitBuffer, Modulus};
use frodokem_api::error::Result as ApiResult;
use frodokem_api::{Key, Kem, Pke, Serialize, SerializeSecret};
use frodokem_internal::endian::u16_words_from_be_bytes;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use super::cpa_pke::{
    decrypt_cpa, encrypt_cpa, keypair_cpa, pack_secret_matrix, unpack_ciphertext,
    unpack_secret_matrix,
};
use super::ind_cca::{
    keygen_seed_len, kem_decaps, kem_encaps, kem_encaps_with_message, kem_keygen,
    kem_keygen_from_seed,
};
use super::params::FrodoParams;
use crate::error::{validate, Result};

// Fixed-length byte newtype bound to a parameter set.
macro_rules! frodo_bytes {
    ($(#[$meta:meta])* $name:ident, $len:ident, $kind:expr) => {
        $(#[$meta])*
        pub struct $name<P: FrodoParams> {
            bytes: Vec<u8>,
            _params: PhantomData<P>,
        }

        impl<P: FrodoParams> $name<P> {
            /// Wrap bytes after checking their length.
            pub fn from_vec(bytes: Vec<u8>) -> Result<Self> {
                Self::check_len(bytes.len())?;
                Ok(Self::wrap(bytes))
            }

            /// Length in bytes, fixed by the parameter set.
            pub fn len(&self) -> usize {
                self.bytes.len()
            }

            /// Always false; present for API symmetry.
            pub fn is_empty(&self) -> bool {
                self.bytes.is_empty()
            }

            fn wrap(bytes: Vec<u8>) -> Self {
                Self {
                    bytes,
                    _params: PhantomData,
                }
            }

            fn check_len(actual: usize) -> Result<()> {
                validate::key($kind, actual, P::$len)
            }
        }

        impl<P: FrodoParams> Clone for $name<P> {
            fn clone(&self) -> Self {
                Self::wrap(self.bytes.clone())
            }
        }

        impl<P: FrodoParams> AsRef<[u8]> for $name<P> {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }
    };
}

frodo_bytes!(
    /// FrodoKEM public key: `seedA || Pack(B)`.
    FrodoPublicKey,
    PUBLIC_KEY_BYTES,
    "public"
);

frodo_bytes!(
    /// FrodoKEM secret key: `s || pk || S || pkh`. Wiped on drop.
    FrodoSecretKey,
    SECRET_KEY_BYTES,
    "secret"
);

frodo_bytes!(
    /// FrodoPKE secret key: the matrix S as big-endian words. Wiped on drop.
    FrodoPkeSecretKey,
    PKE_SECRET_KEY_BYTES,
    "PKE secret"
);

/// FrodoKEM ciphertext: `Pack(C1) || Pack(C2)`.
pub struct FrodoCiphertext<P: FrodoParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

impl<P: FrodoParams> FrodoCiphertext<P> {
    /// Wrap bytes after checking their length.
    pub fn from_vec(bytes: Vec<u8>) -> Result<Self> {
        validate::ciphertext(P::NAME, bytes.len(), P::CIPHERTEXT_BYTES)?;
        Ok(Self::wrap(bytes))
    }

    /// Length in bytes, fixed by the parameter set.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn wrap(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            _params: PhantomData,
        }
    }
}

impl<P: FrodoParams> Clone for FrodoCiphertext<P> {
    fn clone(&self) -> Self {
        Self::wrap(self.bytes.clone())
    }
}

impl<P: FrodoParams> AsRef<[u8]> for FrodoCiphertext<P> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<P: FrodoParams> AsMut<[u8]> for FrodoCiphertext<P> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

// Public halves

impl<P: FrodoParams> Serialize for FrodoPublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::from_vec(bytes.to_vec())?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: FrodoParams> Serialize for FrodoCiphertext<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self::from_vec(bytes.to_vec())?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: FrodoParams> fmt::Debug for FrodoPublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}PublicKey({} bytes)", P::NAME, self.bytes.len())
    }
}

impl<P: FrodoParams> fmt::Debug for FrodoCiphertext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Ciphertext({} bytes)", P::NAME, self.bytes.len())
    }
}

impl<P: FrodoParams> PartialEq for FrodoPublicKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<P: FrodoParams> PartialEq for FrodoCiphertext<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

// Secret halves

// Entries of S must fit in D bits. Checked without early exit.
fn check_secret_words<P: FrodoParams>(s_bytes: &[u8]) -> Result<()> {
    let mask = <P::Modulus as Modulus>::MASK;
    let mut words = u16_words_from_be_bytes(s_bytes);
    let overflow = words.iter().fold(0u16, |acc, w| acc | (w & !mask));
    words.zeroize();
    validate::serialization(overflow == 0, "secret matrix", "entry exceeds modulus")
}

impl<P: FrodoParams> FrodoSecretKey<P> {
    fn pke_part(&self) -> &[u8] {
        let start = P::LEN_S + P::PUBLIC_KEY_BYTES;
        &self.bytes[start..start + P::PKE_SECRET_KEY_BYTES]
    }

    /// The public key embedded in this secret key.
    pub fn public_key(&self) -> FrodoPublicKey<P> {
        let start = P::LEN_S;
        FrodoPublicKey::wrap(self.bytes[start..start + P::PUBLIC_KEY_BYTES].to_vec())
    }
}

impl<P: FrodoParams> SerializeSecret for FrodoSecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::check_len(bytes.len())?;
        let sk = Self::wrap(bytes.to_vec());
        check_secret_words::<P>(sk.pke_part())?;
        Ok(sk)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.clone())
    }
}

impl<P: FrodoParams> SerializeSecret for FrodoPkeSecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::check_len(bytes.len())?;
        check_secret_words::<P>(bytes)?;
        Ok(Self::wrap(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.clone())
    }
}

impl<P: FrodoParams> Zeroize for FrodoSecretKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: FrodoParams> Zeroize for FrodoPkeSecretKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: FrodoParams> Drop for FrodoSecretKey<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: FrodoParams> Drop for FrodoPkeSecretKey<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: FrodoParams> fmt::Debug for FrodoSecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}SecretKey[REDACTED]", P::NAME)
    }
}

impl<P: FrodoParams> fmt::Debug for FrodoPkeSecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}PkeSecretKey[REDACTED]", P::NAME)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    macro_rules! serde_bytes {
        ($name:ident) => {
            impl<P: FrodoParams> serde::Serialize for $name<P> {
                fn serialize<S: Serializer>(
                    &self,
                    serializer: S,
                ) -> core::result::Result<S::Ok, S::Error> {
                    serializer.serialize_bytes(&self.bytes)
                }
            }

            impl<'de, P: FrodoParams> Deserialize<'de> for $name<P> {
                fn deserialize<D: Deserializer<'de>>(
                    deserializer: D,
                ) -> core::result::Result<Self, D::Error> {
                    let bytes = Vec::<u8>::deserialize(deserializer)?;
                    Self::from_vec(bytes).map_err(de::Error::custom)
                }
            }
        };
    }

    serde_bytes!(FrodoPublicKey);
    serde_bytes!(FrodoCiphertext);
}

/// FrodoKEM, generic over its parameter set.
pub struct FrodoKem<P: FrodoParams> {
    _params: PhantomData<P>,
}

impl<P: FrodoParams> FrodoKem<P> {
    /// Number of random bytes `keypair_from_seed` expects.
    pub fn keypair_seed_len() -> usize {
        keygen_seed_len::<P>()
    }

    /// Deterministic key generation from `s || seedSE || z`.
    pub fn keypair_from_seed(
        randomness: &[u8],
    ) -> ApiResult<(FrodoPublicKey<P>, FrodoSecretKey<P>)> {
        let (pk, sk) = kem_keygen_from_seed::<P>(randomness)?;
        Ok((FrodoPublicKey::wrap(pk), FrodoSecretKey::wrap(sk.to_vec())))
    }

    /// Deterministic encapsulation of a caller-chosen `LEN_MU`-byte message.
    pub fn encapsulate_with_message(
        public_key: &FrodoPublicKey<P>,
        mu: &[u8],
    ) -> ApiResult<(FrodoCiphertext<P>, Key)> {
        let (ct, ss) = kem_encaps_with_message::<P>(&public_key.bytes, mu)?;
        Ok((FrodoCiphertext::wrap(ct), Key::new(&ss)))
    }
}

impl<P: FrodoParams> Kem for FrodoKem<P> {
    type PublicKey = FrodoPublicKey<P>;
    type SecretKey = FrodoSecretKey<P>;
    type SharedSecret = Key;
    type Ciphertext = FrodoCiphertext<P>;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (pk, sk) = kem_keygen::<P, R>(rng)?;
        Ok((FrodoPublicKey::wrap(pk), FrodoSecretKey::wrap(sk.to_vec())))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let (ct, ss) = kem_encaps::<P, R>(&public_key.bytes, rng)?;
        Ok((FrodoCiphertext::wrap(ct), Key::new(&ss)))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let ss = kem_decaps::<P>(&secret_key.bytes, &ciphertext.bytes)?;
        Ok(Key::new(&ss))
    }
}

/// FrodoPKE, the IND-CPA scheme underneath FrodoKEM.
///
/// Plaintexts are exactly `LEN_MU` bytes.
pub struct FrodoPke<P: FrodoParams> {
    _params: PhantomData<P>,
}

impl<P: FrodoParams> Pke for FrodoPke<P> {
    type PublicKey = FrodoPublicKey<P>;
    type SecretKey = FrodoPkeSecretKey<P>;
    type Ciphertext = FrodoCiphertext<P>;

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let (pk, s) = keypair_cpa::<P, R>(rng)?;
        let sk = FrodoPkeSecretKey::wrap(pack_secret_matrix::<P>(&s).to_vec());
        Ok((FrodoPublicKey::wrap(pk), sk))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        validate::message(P::NAME, plaintext.len(), P::LEN_MU)?;
        let mu = BitBuffer::from_bytes(plaintext);
        let ct = encrypt_cpa::<P, R>(&pk_recipient.bytes, &mu, rng)?;
        Ok(FrodoCiphertext::wrap(ct))
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Zeroizing<Vec<u8>>> {
        let s = unpack_secret_matrix::<P>(&sk_recipient.bytes)?;
        let (c1, c2) = unpack_ciphertext::<P>(&ciphertext.bytes)?;
        let mu = decrypt_cpa::<P>(&s, &c1, &c2)?;
        Ok(Zeroizing::new(mu.into_bytes()))
    }
}
