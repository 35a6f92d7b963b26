//! FrodoKEM-1344 (NIST PQC Security Level 5, SHAKE-256).

use super::kem::{FrodoKem, FrodoPke};
use super::params::Frodo1344Params;

/// FrodoKEM-1344 KEM, implementing `api::Kem`.
pub type Frodo1344 = FrodoKem<Frodo1344Params>;

/// FrodoPKE-1344, implementing `api::Pke`.
pub type Frodo1344Pke = FrodoPke<Frodo1344Params>;
