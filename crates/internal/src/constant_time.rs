//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slice lengths are
/// public, so a length mismatch returns early.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Compare two word slices by XOR-accumulating every entry.
///
/// The loop always visits every element; the verdict is only formed
/// after the last word.
pub fn ct_eq_words(a: &[u16], b: &[u16]) -> Choice {
    if a.len() != b.len() {
        return Choice::from(0);
    }

    let mut acc = 0u16;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }
    acc.ct_eq(&0)
}

/// Constant-time conditional assignment
///
/// Sets `dst` to `src` if `choice` is set, otherwise leaves `dst` unchanged.
///
/// # Panics
/// Panics if the slices differ in length.
pub fn ct_assign(dst: &mut [u8], src: &[u8], choice: Choice) {
    assert_eq!(dst.len(), src.len());

    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.conditional_assign(s, choice);
    }
}

/// Select between two equal-length byte strings into a fresh buffer.
///
/// Returns a copy of `a` when `choice` is 0 and of `b` when it is 1.
pub fn ct_select_bytes(a: &[u8], b: &[u8], choice: Choice) -> Vec<u8> {
    let mut out = a.to_vec();
    ct_assign(&mut out, b, choice);
    out
}
