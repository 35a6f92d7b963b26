//! FrodoKEM-976 (NIST PQC Security Level 3, SHAKE-256).

use super::kem::{FrodoKem, FrodoPke};
use super::params::Frodo976Params;

/// FrodoKEM-976 KEM, implementing `api::Kem`.
pub type Frodo976 = FrodoKem<Frodo976Params>;

/// FrodoPKE-976, implementing `api::Pke`.
pub type Frodo976Pke = FrodoPke<Frodo976Params>;
