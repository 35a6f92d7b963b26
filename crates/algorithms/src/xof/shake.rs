//! SHAKE extendable output functions (FIPS 202)
//!
//! Thin adapters from the `sha3` crate onto `ExtendableOutputFunction`.
//! Absorbing is rejected once squeezing has started.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake128Reader, Shake256, Shake256Reader};

use super::ExtendableOutputFunction;
use crate::error::{Error, Result};

macro_rules! shake_xof {
    ($name:ident, $hasher:ty, $reader:ty, $bits:expr, $doc:expr) => {
        #[doc = $doc]
        pub struct $name {
            hasher: $hasher,
            reader: Option<$reader>,
        }

        impl $name {
            fn reader(&mut self) -> &mut $reader {
                let hasher = &mut self.hasher;
                self.reader
                    .get_or_insert_with(|| core::mem::take(hasher).finalize_xof())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as ExtendableOutputFunction>::new()
            }
        }

        impl ExtendableOutputFunction for $name {
            fn new() -> Self {
                Self {
                    hasher: <$hasher>::default(),
                    reader: None,
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                if self.reader.is_some() {
                    return Err(Error::xof_squeezing());
                }
                self.hasher.update(data);
                Ok(())
            }

            fn finalize(&mut self) -> Result<()> {
                self.reader();
                Ok(())
            }

            fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                self.reader().read(output);
                Ok(())
            }

            fn reset(&mut self) -> Result<()> {
                self.hasher = <$hasher>::default();
                self.reader = None;
                Ok(())
            }

            fn security_level() -> usize {
                $bits
            }
        }
    };
}

shake_xof!(
    ShakeXof128,
    Shake128,
    Shake128Reader,
    128,
    "SHAKE-128 extendable output function"
);
shake_xof!(
    ShakeXof256,
    Shake256,
    Shake256Reader,
    256,
    "SHAKE-256 extendable output function"
);

#[cfg(test)]
mod tests {
    use super::*;

    // FIPS 202 empty-message vectors
    #[test]
    fn test_shake128_empty() {
        let out = ShakeXof128::generate(b"", 32).unwrap();
        assert_eq!(
            hex::encode(out),
            "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"
        );
    }

    #[test]
    fn test_shake256_empty() {
        let out = ShakeXof256::generate(b"", 32).unwrap();
        assert_eq!(
            hex::encode(out),
            "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
        );
    }

    #[test]
    fn test_incremental_matches_oneshot() {
        let data = b"frodo seed material";
        let expected = ShakeXof256::generate(data, 100).unwrap();

        let mut xof = ShakeXof256::new();
        xof.update(&data[..5]).unwrap();
        xof.update(&data[5..]).unwrap();
        let mut first = [0u8; 37];
        let mut second = [0u8; 63];
        xof.squeeze(&mut first).unwrap();
        xof.squeeze(&mut second).unwrap();

        assert_eq!(&expected[..37], &first[..]);
        assert_eq!(&expected[37..], &second[..]);

        let parts = ShakeXof256::generate_parts(&[&data[..3], &data[3..]], 100).unwrap();
        assert_eq!(parts, expected);
    }

    #[test]
    fn test_update_after_squeeze_rejected() {
        let mut xof = ShakeXof128::new();
        xof.update(b"abc").unwrap();
        xof.finalize().unwrap();
        assert!(xof.update(b"def").is_err());

        xof.reset().unwrap();
        xof.update(b"abc").unwrap();
        let out = xof.squeeze_into_vec(16).unwrap();
        assert_eq!(out, ShakeXof128::generate(b"abc", 16).unwrap());
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(ShakeXof128::generate(b"abc", 0).is_err());
        assert_eq!(ShakeXof128::security_level(), 128);
        assert_eq!(ShakeXof256::security_level(), 256);
    }
}
