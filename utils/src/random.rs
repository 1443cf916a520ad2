//! Draw uniformly distributed values from a seedable generator.
//!
//! Ranges are inclusive on both ends. Every value in a range is equally likely (no modulo bias).
//! Float ranges must be finite and no wider than half the type's largest value.

use rand::{
    distributions::{uniform::SampleUniform, Distribution, Standard},
    rngs::StdRng,
    Rng, RngCore, SeedableRng,
};
use thiserror::Error;

/// Errors that can occur when drawing a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid range: min is greater than max or not comparable")]
    InvalidRange,
}

/// A type that can be drawn from an inclusive range.
pub trait Sample: SampleUniform + PartialOrd + Copy {
    /// Returns true if `[min, max]` (with `min <= max`) can be sampled.
    fn is_sampleable(min: Self, max: Self) -> bool;
}

macro_rules! impl_sample_int {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn is_sampleable(_: Self, _: Self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_sample_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_sample_float {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                // The sampler scales the span up slightly, so it needs headroom below MAX
                #[inline]
                fn is_sampleable(min: Self, max: Self) -> bool {
                    ((max - min) * 2.0).is_finite()
                }
            }
        )*
    };
}

impl_sample_float!(f32, f64);

/// A random number generator.
pub struct Random<R: RngCore = StdRng> {
    rng: R,
}

impl Random<StdRng> {
    /// Create a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator that produces the same sequence for the same `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> Random<R> {
    /// Wrap an existing generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a `u32` over its full range.
    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Draw a value of `T` over its full range (`[0, 1)` for floats).
    pub fn gen<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.rng.gen()
    }

    /// Draw `true` or `false` with equal probability.
    pub fn gen_bool(&mut self) -> bool {
        self.rng.gen()
    }

    /// Draw a value in `[min, max]`.
    ///
    /// Fails if `min > max`, a bound is NaN, or a float span is infinite or too wide.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn range<T: Sample>(&mut self, min: T, max: T) -> Result<T, Error> {
        // Rejects NaN bounds too (every comparison with NaN is false)
        if !(min <= max) || !T::is_sampleable(min, max) {
            return Err(Error::InvalidRange);
        }
        Ok(self.rng.gen_range(min..=max))
    }

    /// Fill `dest` with random bytes.
    pub fn fill(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    /// Consume the wrapper and return the underlying generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl Default for Random<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}
