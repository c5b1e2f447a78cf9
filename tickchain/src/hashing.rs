//! SHA-2 primitives: wide hashing, step hashing, and hash-to-scalar.

use curve::Scalar;
use sha2::{Digest, Sha256, Sha512};

/// SHA-512 over the concatenation of `parts`, untruncated.
pub fn hash512(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut digest = [0u8; 64];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// SHA-256 over the concatenation of `parts`.
pub fn hash256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// SHA-512 over the concatenation of `parts`, reduced to a canonical scalar.
///
/// The reduction is the group's wide reduction mod the order, so the result
/// is always in `[0, L)` and statistically uniform.
pub fn hash_to_scalar(parts: &[&[u8]]) -> Scalar {
    Scalar::from_wide_bytes(&hash512(parts))
}
