//! Error types for the chain primitives.

use core::fmt;

use curve::DecodeError;

/// Errors raised by clamping and signature parsing.
///
/// All operations here are deterministic: a failure for given inputs will
/// always fail identically, so there are no retry semantics. No operation
/// produces partial output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickError {
    /// An input had the wrong length for the operation; nothing is ever
    /// padded or truncated to compensate.
    InvalidLength { expected: usize, got: usize },
    /// A scalar encoding was not a canonical value below the group order.
    NonCanonicalScalar,
    /// A point encoding did not decode to a prime-subgroup element.
    InvalidPoint,
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickError::InvalidLength { expected, got } => {
                write!(f, "invalid input length: expected {expected} bytes, got {got}")
            }
            TickError::NonCanonicalScalar => write!(f, "scalar encoding is not canonical"),
            TickError::InvalidPoint => {
                write!(f, "point encoding is not a prime-subgroup element")
            }
        }
    }
}

impl std::error::Error for TickError {}

impl From<DecodeError> for TickError {
    fn from(_: DecodeError) -> Self {
        TickError::InvalidPoint
    }
}
