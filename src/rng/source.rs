//! Randomness capability consumed by the value helpers
//!
//! Helpers never reach for a process-wide generator on their own. The caller
//! injects a [`RandomSource`]: either a seeded [`Prng`], which makes the
//! helper output reproducible, or [`Ambient`], which draws from the
//! thread-local generator of `rand` and is different on every run.

use rand::Rng;

use crate::error::{RandomError, Result};
use crate::rng::Prng;

/// Largest integer a double represents exactly, `2^53 - 1`.
///
/// Upper bound of identifiers drawn from [`Ambient`].
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// A source of randomness for the value helpers.
pub trait RandomSource {
    /// Draws a double in `[0, 1)`.
    fn next_double(&mut self) -> f64;

    /// Draws an identifier no smaller than `min`.
    ///
    /// # Errors
    ///
    /// Implementations return [`RandomError::InvalidRange`] when no
    /// identifier at or above `min` can be produced.
    fn next_id(&mut self, min: u64) -> Result<u64>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_double(&mut self) -> f64 {
        (**self).next_double()
    }

    fn next_id(&mut self, min: u64) -> Result<u64> {
        (**self).next_id(min)
    }
}

/// Seeded, reproducible source.
impl RandomSource for Prng {
    fn next_double(&mut self) -> f64 {
        Prng::next_double(self)
    }

    /// Delegates to [`Prng::next_long_from`]; never fails.
    fn next_id(&mut self, min: u64) -> Result<u64> {
        Ok(self.next_long_from(min))
    }
}

/// Non-seeded source backed by the thread-local generator of `rand`.
///
/// Two calls through `Ambient` are not reproducible.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ambient;

impl RandomSource for Ambient {
    fn next_double(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }

    /// Draws uniformly from `[min, MAX_SAFE_INTEGER]`.
    fn next_id(&mut self, min: u64) -> Result<u64> {
        if min > MAX_SAFE_INTEGER {
            return Err(RandomError::invalid_range(min, MAX_SAFE_INTEGER));
        }

        Ok(rand::rng().random_range(min..=MAX_SAFE_INTEGER))
    }
}
