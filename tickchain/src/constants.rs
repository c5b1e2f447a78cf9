//! Sizes of the byte encodings used throughout the crate.

/// Length of an encoded scalar in bytes (32 little-endian bytes).
pub const SCALAR_LENGTH: usize = 32;

/// Length of a compressed curve point in bytes.
pub const POINT_LENGTH: usize = 32;

/// Length of a serialized signature: a commitment point followed by a
/// response scalar.
pub const SIGNATURE_LENGTH: usize = POINT_LENGTH + SCALAR_LENGTH;

/// Length of a single chain-step digest (SHA-256).
pub(crate) const DIGEST_LENGTH: usize = 32;
