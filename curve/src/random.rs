use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::{Point, Scalar};

/// Helper trait for sampling uniformly random group elements.
pub trait Random: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl Distribution<Scalar> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Scalar {
        // Sampling 64 bytes and reducing keeps the result uniform mod the
        // group order.
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        Scalar::from_wide_bytes(&wide)
    }
}

impl Random for Scalar {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

impl Random for Point {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Point::mul_base(&Scalar::random(rng))
    }
}
