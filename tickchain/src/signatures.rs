//! Deterministic Schnorr-style attestation signatures.

use curve::{Point, Scalar};
use serde::{Deserialize, Serialize};

use crate::constants::{POINT_LENGTH, SCALAR_LENGTH, SIGNATURE_LENGTH};
use crate::errors::TickError;
use crate::hashing::{hash512, hash_to_scalar};
use crate::keys::derive_point_from_scalar;

/// A two-part signature binding a message to a public point.
///
/// The pair `(R, s)` satisfies `s * G == R + c * X`, where `X` is the
/// signer's public point and `c` is the challenge scalar recomputed by
/// [`challenge`] from `(R, X, message)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The commitment point `R = r * G` for the derived nonce scalar `r`.
    pub r: Point,
    /// The response scalar `s = r + c * x mod L`.
    pub s: Scalar,
}

/// Signs `message` with an arbitrary 32-byte scalar.
///
/// The scalar does not have to come from seed derivation: any value along a
/// scalar or hybrid chain can act as a one-time signing key attesting to its
/// chain position. When `seed` is `None` the nonce seed is derived from the
/// scalar and message, so signing is deterministic either way: the same
/// `(scalar, message, seed)` triple always yields the same signature.
pub fn sign(scalar: &[u8; SCALAR_LENGTH], message: &[u8], seed: Option<&[u8]>) -> Signature {
    let public = derive_point_from_scalar(scalar);
    let seed = match seed {
        Some(seed) => seed.to_vec(),
        None => hash_to_scalar(&[scalar.as_slice(), message]).to_bytes().to_vec(),
    };
    let wide = hash512(&[seed.as_slice()]);
    let nonce = &wide[32..];

    // A reduced scalar is below 2^253, so its top bit is already clear and
    // the ephemeral clamp is the identity on it.
    let r = hash_to_scalar(&[&hash512(&[nonce, message])]);
    let commitment = Point::mul_base(&r);
    let c = challenge(&commitment, &public, message);
    let s = r + c * Scalar::from_bytes_mod_order(*scalar);

    Signature { r: commitment, s }
}

/// The challenge scalar: `H(R || X || message)` reduced mod the group order.
pub(crate) fn challenge(commitment: &Point, public: &Point, message: &[u8]) -> Scalar {
    hash_to_scalar(&[&commitment.to_bytes(), &public.to_bytes(), message])
}

impl Signature {
    /// Checks the signature equation `s * G == R + c * X` against `public`.
    pub fn verify(&self, public: &Point, message: &[u8]) -> bool {
        let c = challenge(&self.r, public, message);
        Point::double_scalar_mul_basepoint(&-c, public, &self.s) == self.r
    }

    /// Serializes as `R || s`, 64 bytes.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..POINT_LENGTH].copy_from_slice(&self.r.to_bytes());
        bytes[POINT_LENGTH..].copy_from_slice(&self.s.to_bytes());
        bytes
    }

    /// Parses `R || s`, rejecting wrong lengths, non-canonical response
    /// scalars, and commitment points outside the prime subgroup.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TickError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(TickError::InvalidLength {
                expected: SIGNATURE_LENGTH,
                got: bytes.len(),
            });
        }
        let mut point_bytes = [0u8; POINT_LENGTH];
        point_bytes.copy_from_slice(&bytes[..POINT_LENGTH]);
        let mut scalar_bytes = [0u8; SCALAR_LENGTH];
        scalar_bytes.copy_from_slice(&bytes[POINT_LENGTH..]);

        let r = Point::from_bytes(&point_bytes)?;
        let s =
            Scalar::from_canonical_bytes(scalar_bytes).ok_or(TickError::NonCanonicalScalar)?;
        Ok(Signature { r, s })
    }
}
