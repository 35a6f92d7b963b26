//! Big-endian word helpers
//!
//! Every 16-bit quantity on the FrodoKEM wire (matrix generator output,
//! sampler input, serialized secret matrices) is big-endian.

/// Read a u16 from the first two bytes of `bytes`.
///
/// # Panics
/// Panics if fewer than two bytes are supplied.
#[inline]
pub fn u16_from_be_bytes(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Convert a u16 to big-endian bytes
#[inline]
pub fn u16_to_be_bytes(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Decode a run of big-endian words. A trailing odd byte is ignored.
pub fn u16_words_from_be_bytes(bytes: &[u8]) -> Vec<u16> {
    bytes.chunks_exact(2).map(u16_from_be_bytes).collect()
}

/// Encode a run of words as big-endian bytes
pub fn u16_words_to_be_bytes(words: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * 2);
    for w in words {
        out.extend_from_slice(&u16_to_be_bytes(*w));
    }
    out
}
