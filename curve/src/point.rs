//! Points of the edwards25519 prime-order subgroup.

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::traits::Identity;
use serde::{Deserialize, Serialize};

use crate::errors::DecodeError;
use crate::scalar::Scalar;

/// A point of the prime-order subgroup.
///
/// Points are produced by scalar multiplication (of the base point or of
/// another point), by point addition, or by decoding a compressed encoding
/// with [`Point::from_bytes`], which rejects anything outside the subgroup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point(pub(crate) EdwardsPoint);

impl Point {
    /// The identity element.
    #[inline]
    pub fn identity() -> Self {
        Point(EdwardsPoint::identity())
    }

    /// Whether this point is the identity element.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.0 == EdwardsPoint::identity()
    }

    /// Multiplies the fixed base point by `scalar`.
    #[inline]
    pub fn mul_base(scalar: &Scalar) -> Self {
        Point(EdwardsPoint::mul_base(&scalar.0))
    }

    /// Computes `a * point + b * G` in variable time.
    ///
    /// Only safe for public inputs; used on the verification side where every
    /// operand is already public.
    #[inline]
    pub fn double_scalar_mul_basepoint(a: &Scalar, point: &Point, b: &Scalar) -> Self {
        Point(EdwardsPoint::vartime_double_scalar_mul_basepoint(
            &a.0, &point.0, &b.0,
        ))
    }

    /// Decodes a compressed 32-byte encoding.
    ///
    /// Fails if the bytes are not a curve point, or if the point carries a
    /// small-order component and therefore lies outside the prime subgroup.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, DecodeError> {
        let point = CompressedEdwardsY(*bytes)
            .decompress()
            .ok_or(DecodeError::InvalidEncoding)?;
        if !point.is_torsion_free() {
            return Err(DecodeError::NotInPrimeSubgroup);
        }
        Ok(Point(point))
    }

    /// The canonical compressed 32-byte encoding.
    #[inline]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.compress().to_bytes()
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Point(self.0 + rhs.0)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Point(self.0 - rhs.0)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point(-self.0)
    }
}

impl Mul<Scalar> for Point {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Scalar) -> Self {
        Point(self.0 * rhs.0)
    }
}
