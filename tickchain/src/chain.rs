//! The four verifiably-sequential chain families.
//!
//! Each family advances a small owned state by hashing the current value:
//!
//! - hash chain: SHA-256 iteration over bytes, no curve arithmetic;
//! - point chain: `P := P + clamp(SHA-256(P)) * G`;
//! - scalar chain: `s := s + clamp(SHA-256(s * G)) mod L`, the discrete-log
//!   mirror of the point chain;
//! - hybrid chain: `(h, P) := (SHA-256(h || P), clamp(SHA-256(h || P)) * P)`,
//!   which multiplies the current point rather than the base point and is
//!   deliberately not homomorphic to the other two.
//!
//! Advancing by `n` is `n` sequential single steps; the work cannot be
//! parallelized, which is what makes a chain position a meaningful claim.
//! Point and scalar hashing always use the adapter's canonical compressed
//! 32-byte point encoding.

use curve::{Point, Scalar};

use crate::constants::{DIGEST_LENGTH, SCALAR_LENGTH};
use crate::hashing::hash256;
use crate::keys::{clamp_bytes, derive_point_from_scalar};

/// One hash-chain tick: SHA-256 of the previous preimage.
pub fn step_hash(preimage: &[u8]) -> [u8; DIGEST_LENGTH] {
    hash256(&[preimage])
}

/// Applies `count` hash-chain ticks; `count = 0` returns the preimage
/// unchanged.
pub fn advance_hash(preimage: &[u8], count: u64) -> Vec<u8> {
    let mut state = preimage.to_vec();
    for _ in 0..count {
        state = step_hash(&state).to_vec();
    }
    state
}

/// Derives the ephemeral tick multiplier from the compressed encoding of the
/// current point.
fn tick_multiplier(point_bytes: &[u8; 32]) -> Scalar {
    Scalar::from_bytes_mod_order(clamp_bytes(hash256(&[point_bytes]), false))
}

/// One point-chain tick: adds `clamp(SHA-256(P)) * G` to the current point.
pub fn step_point(point: &Point) -> Point {
    *point + Point::mul_base(&tick_multiplier(&point.to_bytes()))
}

/// Applies `count` point-chain ticks; `count = 0` returns the point
/// unchanged.
pub fn advance_point(point: &Point, count: u64) -> Point {
    let mut state = *point;
    for _ in 0..count {
        state = step_point(&state);
    }
    state
}

/// One scalar-chain tick.
///
/// The multiplier comes from the compressed encoding of `s * G`, the same
/// bytes a point-chain holder hashes, so the two chains stay in lockstep:
/// `derive_point_from_scalar(step_scalar(s)) == step_point(s * G)`. The
/// output is always reduced mod the group order.
pub fn step_scalar(scalar: &[u8; SCALAR_LENGTH]) -> [u8; SCALAR_LENGTH] {
    let point = derive_point_from_scalar(scalar);
    let sum = Scalar::from_bytes_mod_order(*scalar) + tick_multiplier(&point.to_bytes());
    sum.to_bytes()
}

/// Applies `count` scalar-chain ticks; `count = 0` returns the encoding
/// unchanged.
pub fn advance_scalar(scalar: &[u8; SCALAR_LENGTH], count: u64) -> [u8; SCALAR_LENGTH] {
    let mut state = *scalar;
    for _ in 0..count {
        state = step_scalar(&state);
    }
    state
}

/// One hybrid tick.
///
/// Hashes the carried preimage together with the current point, then
/// multiplies the current point (not the base point) by the clamped digest.
/// The digest is returned as the next preimage; the point sequence cannot be
/// replayed without every intermediate multiplier.
pub fn step_hybrid(preimage: &[u8], point: &Point) -> ([u8; DIGEST_LENGTH], Point) {
    let digest = hash256(&[preimage, &point.to_bytes()]);
    let multiplier = Scalar::from_bytes_mod_order(clamp_bytes(digest, false));
    (digest, *point * multiplier)
}

/// Applies `count` hybrid ticks, threading each digest forward as the next
/// preimage; `count = 0` returns both inputs unchanged.
pub fn advance_hybrid(preimage: &[u8], point: &Point, count: u64) -> (Vec<u8>, Point) {
    let mut hash_state = preimage.to_vec();
    let mut point_state = *point;
    for _ in 0..count {
        let (digest, next) = step_hybrid(&hash_state, &point_state);
        hash_state = digest.to_vec();
        point_state = next;
    }
    (hash_state, point_state)
}
