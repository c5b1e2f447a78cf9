//! Scalar clamping and seed-based key derivation.

use curve::{Point, Scalar};

use crate::constants::SCALAR_LENGTH;
use crate::errors::TickError;
use crate::hashing::hash512;

/// Origin of the bytes being normalized into a scalar encoding.
///
/// The origin decides which bits are forced. An ephemeral multiplier only has
/// its top bit cleared, keeping it below 2^255; a private exponent
/// additionally gets the RFC 8032 bit-forcing (low three bits cleared, bit
/// 254 set). Mixing up the two modes changes every downstream chain value,
/// which is why the distinction is carried in the type.
pub enum ScalarSource<'a> {
    /// At least 32 raw bytes used as a short-lived multiplier; only the first
    /// 32 are read.
    Ephemeral(&'a [u8]),
    /// At least 32 raw bytes used directly as a private exponent; only the
    /// first 32 are read.
    Exponent(&'a [u8]),
    /// Secret key material of any length, hashed with SHA-512 and then
    /// clamped as an exponent.
    SecretKey(&'a [u8]),
}

/// Normalizes `source` into a 32-byte scalar encoding.
///
/// Raw inputs shorter than 32 bytes are rejected with
/// [`TickError::InvalidLength`].
pub fn clamp(source: ScalarSource<'_>) -> Result<[u8; SCALAR_LENGTH], TickError> {
    match source {
        ScalarSource::Ephemeral(raw) => Ok(clamp_bytes(first_scalar_bytes(raw)?, false)),
        ScalarSource::Exponent(raw) => Ok(clamp_bytes(first_scalar_bytes(raw)?, true)),
        ScalarSource::SecretKey(key) => {
            let digest = hash512(&[key]);
            let mut bytes = [0u8; SCALAR_LENGTH];
            bytes.copy_from_slice(&digest[..SCALAR_LENGTH]);
            Ok(clamp_bytes(bytes, true))
        }
    }
}

fn first_scalar_bytes(raw: &[u8]) -> Result<[u8; SCALAR_LENGTH], TickError> {
    if raw.len() < SCALAR_LENGTH {
        return Err(TickError::InvalidLength {
            expected: SCALAR_LENGTH,
            got: raw.len(),
        });
    }
    let mut bytes = [0u8; SCALAR_LENGTH];
    bytes.copy_from_slice(&raw[..SCALAR_LENGTH]);
    Ok(bytes)
}

/// Bit-forcing shared by every clamp mode.
///
/// Clears the top bit unconditionally; `exponent` additionally selects the
/// RFC 8032 private-exponent bits.
pub(crate) fn clamp_bytes(
    mut bytes: [u8; SCALAR_LENGTH],
    exponent: bool,
) -> [u8; SCALAR_LENGTH] {
    if exponent {
        bytes[0] &= 0xf8;
        bytes[31] |= 0x40;
    }
    bytes[31] &= 0x7f;
    bytes
}

/// Derives a private exponent from arbitrary seed bytes.
///
/// The result is the exponent-clamped first half of SHA-512(seed), kept in
/// its clamped (unreduced) byte form. For any seed the derived scalar maps to
/// a valid group element under [`derive_point_from_scalar`].
pub fn derive_key_from_seed(seed: &[u8]) -> [u8; SCALAR_LENGTH] {
    let digest = hash512(&[seed]);
    let mut bytes = [0u8; SCALAR_LENGTH];
    bytes.copy_from_slice(&digest[..SCALAR_LENGTH]);
    clamp_bytes(bytes, true)
}

/// Multiplies the base point by `scalar`.
///
/// The encoding is reduced mod the group order on entry; no clamping is
/// applied. Callers are responsible for having clamped or reduced `scalar`
/// according to its origin.
pub fn derive_point_from_scalar(scalar: &[u8; SCALAR_LENGTH]) -> Point {
    Point::mul_base(&Scalar::from_bytes_mod_order(*scalar))
}
