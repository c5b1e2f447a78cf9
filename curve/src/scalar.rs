//! Scalars modulo the edwards25519 prime subgroup order.
//! L = 2^252 + 27742317777372353535851937790883648493.
//!
//! A [`Scalar`] always holds a canonical value in `[0, L)`. Unreduced byte
//! encodings (such as RFC 8032 clamped exponents) are reduced on entry; the
//! reduction is invisible at the group level because every point handled by
//! this crate lives in the prime-order subgroup.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use curve25519_dalek::scalar::Scalar as RawScalar;
use serde::{Deserialize, Serialize};

/// A canonical scalar mod the group order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scalar(pub(crate) RawScalar);

impl Scalar {
    /// The additive identity.
    pub const ZERO: Self = Scalar(RawScalar::ZERO);

    /// The multiplicative identity.
    pub const ONE: Self = Scalar(RawScalar::ONE);

    /// Reduces 32 little-endian bytes mod the group order.
    #[inline]
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Self {
        Scalar(RawScalar::from_bytes_mod_order(bytes))
    }

    /// Reduces 64 little-endian bytes mod the group order.
    ///
    /// This is the reduction used to turn a 512-bit hash into a scalar; the
    /// wide input keeps the result statistically uniform.
    #[inline]
    pub fn from_wide_bytes(bytes: &[u8; 64]) -> Self {
        Scalar(RawScalar::from_bytes_mod_order_wide(bytes))
    }

    /// Accepts only an already-canonical encoding, returning `None` for any
    /// value at or above the group order.
    #[inline]
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> Option<Self> {
        Option::<RawScalar>::from(RawScalar::from_canonical_bytes(bytes)).map(Scalar)
    }

    /// The canonical 32-byte little-endian encoding.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }
}

impl From<u64> for Scalar {
    #[inline]
    fn from(value: u64) -> Self {
        Scalar(RawScalar::from(value))
    }
}

impl Add for Scalar {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Scalar(self.0 + rhs.0)
    }
}

impl AddAssign for Scalar {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Scalar {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Scalar(self.0 - rhs.0)
    }
}

impl SubAssign for Scalar {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Scalar {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Scalar(-self.0)
    }
}

impl Mul for Scalar {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Scalar(self.0 * rhs.0)
    }
}

impl MulAssign for Scalar {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The group order L, little-endian.
    const ORDER: [u8; 32] = [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
        0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x10,
    ];

    #[test]
    fn test_order_reduces_to_zero() {
        assert_eq!(Scalar::from_bytes_mod_order(ORDER), Scalar::ZERO);
    }

    #[test]
    fn test_canonical_rejects_order() {
        assert!(Scalar::from_canonical_bytes(ORDER).is_none());

        let mut below = ORDER;
        below[0] -= 1;
        assert!(Scalar::from_canonical_bytes(below).is_some());
    }

    #[test]
    fn test_wide_reduction_is_canonical() {
        let wide = [0xffu8; 64];
        let reduced = Scalar::from_wide_bytes(&wide);
        assert!(Scalar::from_canonical_bytes(reduced.to_bytes()).is_some());
    }

    #[test]
    fn test_arithmetic() {
        let a = Scalar::from(6u64);
        let b = Scalar::from(7u64);
        assert_eq!(a * b, Scalar::from(42u64));
        assert_eq!(a + b, Scalar::from(13u64));
        assert_eq!(b - a, Scalar::ONE);
        assert_eq!(a + (-a), Scalar::ZERO);
    }
}
