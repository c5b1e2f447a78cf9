//! Edwards25519 group operations for the chain primitives.
//!
//! This crate is a thin, typed binding over `curve25519-dalek`, exposing
//! exactly the operations the chain core consumes: scalar arithmetic mod the
//! prime subgroup order, base-point and arbitrary-point multiplication, point
//! addition, and the canonical 32-byte compressed point encoding. Decoding a
//! point enforces prime-subgroup membership, so every [`Point`] in circulation
//! is a valid group element.

mod errors;
mod point;
mod random;
mod scalar;

pub use errors::DecodeError;
pub use point::Point;
pub use random::Random;
pub use scalar::Scalar;
