//! Constants for the FrodoKEM key encapsulation mechanism
//!
//! All lengths are byte counts. Matrix dimensions count entries.

/// Row count of the message and ciphertext matrices
pub const FRODO_MBAR: usize = 8;

/// Column count of the secret and ciphertext matrices
pub const FRODO_NBAR: usize = 8;

/// Length of the public matrix seed in bytes
pub const FRODO_SEED_A_BYTES: usize = 16;

/// Bytes of randomness consumed per sampled matrix entry
pub const FRODO_LEN_X: usize = 2;

/// Domain-separation prefix for the key-generation noise seed
pub const FRODO_KEYGEN_TAG: u8 = 0x5F;

/// Domain-separation prefix for the encryption noise seed
pub const FRODO_ENCRYPT_TAG: u8 = 0x96;

/// Cumulative distribution table for Frodo-640 (sigma = 2.8)
pub const FRODO640_CDF: [u16; 13] = [
    4643, 13363, 20579, 25843, 29227, 31145, 32103, 32525, 32689, 32745, 32762, 32766, 32767,
];

/// Cumulative distribution table for Frodo-976 (sigma = 2.3)
pub const FRODO976_CDF: [u16; 11] = [
    5638, 15915, 23689, 28571, 31116, 32217, 32613, 32731, 32760, 32766, 32767,
];

/// Cumulative distribution table for Frodo-1344 (sigma = 1.4)
pub const FRODO1344_CDF: [u16; 7] = [9142, 23462, 30338, 32361, 32725, 32765, 32767];

/// Structure containing a FrodoKEM parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrodoParamSet {
    /// Human readable name
    pub name: &'static str,

    /// Dimension of the public matrix A (n x n)
    pub n: usize,

    /// log2 of the modulus q
    pub d: usize,

    /// Message bits carried per matrix entry
    pub b: usize,

    /// Message/ciphertext matrix rows
    pub mbar: usize,

    /// Secret/ciphertext matrix columns
    pub nbar: usize,

    /// Length of seedA
    pub len_seed_a: usize,

    /// Length of seedSE, excluding the domain-separation byte
    pub len_seed_se: usize,

    /// Length of the encrypted message mu
    pub len_mu: usize,

    /// Length of the implicit-rejection secret s
    pub len_s: usize,

    /// Length of the key-generation seed z
    pub len_z: usize,

    /// Length of the encapsulation key material k
    pub len_k: usize,

    /// Length of the public key hash
    pub len_pkh: usize,

    /// Length of the shared secret
    pub len_ss: usize,

    /// Error distribution table
    pub cdf: &'static [u16],

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of KEM secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,
}

impl FrodoParamSet {
    /// The modulus q = 2^D
    pub const fn q(&self) -> u32 {
        1u32 << self.d
    }

    /// Message length l = B * mbar * nbar in bits
    pub const fn message_bits(&self) -> usize {
        self.b * self.mbar * self.nbar
    }

    /// Byte length of a packed rows x cols matrix
    pub const fn packed_len(&self, rows: usize, cols: usize) -> usize {
        (self.d * rows * cols + 7) / 8
    }
}

/// Frodo-640 parameters (NIST level 1, SHAKE-128)
pub const FRODO640: FrodoParamSet = FrodoParamSet {
    name: "FrodoKEM-640",
    n: 640,
    d: 15,
    b: 2,
    mbar: FRODO_MBAR,
    nbar: FRODO_NBAR,
    len_seed_a: FRODO_SEED_A_BYTES,
    len_seed_se: 16,
    len_mu: 16,
    len_s: 16,
    len_z: 16,
    len_k: 16,
    len_pkh: 16,
    len_ss: 16,
    cdf: &FRODO640_CDF,
    public_key_size: 9616,
    secret_key_size: 19888,
    ciphertext_size: 9720,
};

/// Frodo-976 parameters (NIST level 3, SHAKE-256)
pub const FRODO976: FrodoParamSet = FrodoParamSet {
    name: "FrodoKEM-976",
    n: 976,
    d: 16,
    b: 3,
    mbar: FRODO_MBAR,
    nbar: FRODO_NBAR,
    len_seed_a: FRODO_SEED_A_BYTES,
    len_seed_se: 24,
    len_mu: 24,
    len_s: 24,
    len_z: 24,
    len_k: 24,
    len_pkh: 24,
    len_ss: 24,
    cdf: &FRODO976_CDF,
    public_key_size: 15632,
    secret_key_size: 31296,
    ciphertext_size: 15744,
};

/// Frodo-1344 parameters (NIST level 5, SHAKE-256)
pub const FRODO1344: FrodoParamSet = FrodoParamSet {
    name: "FrodoKEM-1344",
    n: 1344,
    d: 16,
    b: 4,
    mbar: FRODO_MBAR,
    nbar: FRODO_NBAR,
    len_seed_a: FRODO_SEED_A_BYTES,
    len_seed_se: 32,
    len_mu: 32,
    len_s: 32,
    len_z: 32,
    len_k: 32,
    len_pkh: 32,
    len_ss: 32,
    cdf: &FRODO1344_CDF,
    public_key_size: 21520,
    secret_key_size: 43088,
    ciphertext_size: 21632,
};
