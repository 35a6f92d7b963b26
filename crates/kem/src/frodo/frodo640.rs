//! FrodoKEM-640 (NIST PQC Security Level 1, SHAKE-128).

use super::kem::{FrodoKem, FrodoPke};
use super::params::Frodo640Params;

/// FrodoKEM-640 KEM, implementing `api::Kem`.
pub type Frodo640 = FrodoKem<Frodo640Params>;

/// FrodoPKE-640, implementing `api::Pke`.
pub type Frodo640Pke = FrodoPke<Frodo640Params>;
