//! Error types for point decoding.

use core::fmt;

/// Failures when decoding a compressed point encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The 32 bytes do not encode a point on the curve.
    InvalidEncoding,
    /// The point is on the curve but carries a small-order component.
    NotInPrimeSubgroup,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidEncoding => write!(f, "bytes do not encode a curve point"),
            DecodeError::NotInPrimeSubgroup => {
                write!(f, "point is not in the prime-order subgroup")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
