//! FrodoKEM Key Encapsulation Mechanism (KEM).
//!
//! FrodoKEM is a conservative lattice-based KEM whose security rests on
//! plain LWE, with no ring or module structure. It provides IND-CCA2
//! security through a Fujisaki-Okamoto transform with implicit rejection.

// Modules defining the FrodoKEM logic and parameters.
mod params;
pub mod encode; // ec/dc and message Encode/Decode
pub mod gen; // Public matrix generation from seedA
pub mod sample; // CDF error sampler
mod cpa_pke; // IND-CPA FrodoPKE
mod ind_cca; // Fujisaki-Okamoto transform with implicit rejection
mod kem; // Typed keys, api::Kem and api::Pke

// Concrete FrodoKEM variants
mod frodo1344;
mod frodo640;
mod frodo976;

pub use self::frodo1344::{Frodo1344, Frodo1344Pke};
pub use self::frodo640::{Frodo640, Frodo640Pke};
pub use self::frodo976::{Frodo976, Frodo976Pke};

pub use self::kem::{
    FrodoCiphertext, FrodoKem, FrodoPke, FrodoPkeSecretKey, FrodoPublicKey, FrodoSecretKey,
};
pub use self::params::{
    FrodoParams, Frodo1344Params, Frodo640Params, Frodo976Params, FRODO_ENCRYPT_TAG,
    FRODO_KEYGEN_TAG, FRODO_LEN_X,
};
