//! Seeded subtractive generator
//!
//! This module implements the classic lagged-Fibonacci generator with a
//! 55-entry history and a lag of 21 (Knuth's subtractive method in the
//! form popularised by Numerical Recipes). The seeding procedure and the
//! sampling recurrence are reproduced exactly, so a given `i32` seed yields
//! the same output sequence as every other faithful implementation of this
//! generator.
//!
//! The generator is **not** cryptographically secure. It exists for
//! reproducibility: identifiers, test fixtures and replays that must agree
//! across processes and languages.
//!
//! All arithmetic on the seed array is two's-complement 32-bit arithmetic.
//! For seeds of large magnitude the seeding pass overflows `i32`, and the
//! wrapped result is part of the reference output.

use tracing::debug;

use crate::error::{RandomError, Result};

/// Modulus of the recurrence, `2^31 - 1`.
pub(crate) const MBIG: i32 = i32::MAX;

/// Seeding constant (the first digits of the golden ratio).
const MSEED: i32 = 161_803_398;

/// Number of slots in the seed array. Slot 0 is never read.
pub(crate) const SEED_ARRAY_LEN: usize = 56;

/// Initial position of the trailing cursor, which fixes the lag at 21.
pub(crate) const INITIAL_INEXTP: usize = 21;

/// Deterministic subtractive pseudorandom number generator.
///
/// Construction runs the fixed seeding procedure once; every draw then
/// advances both cursors and rewrites exactly one slot of the seed array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prng {
    /// Seed the state was derived from.
    pub(super) seed: i32,

    /// History buffer. Live slots are `1..=55`, each in `[0, MBIG)`.
    pub(super) seed_array: [i32; SEED_ARRAY_LEN],

    /// Leading cursor. `0` before the first draw, then `1..=55`.
    pub(super) inext: usize,

    /// Trailing cursor, always 21 positions ahead of `inext` modulo 55.
    pub(super) inextp: usize,
}

impl Prng {
    /// Creates a generator seeded from ambient entropy.
    ///
    /// This is equivalent to calling [`Prng::from_ambient`].
    pub fn new() -> Self {
        Self::from_ambient()
    }

    /// Creates a generator whose seed is drawn uniformly from the whole
    /// `i32` range using the thread-local generator of `rand`.
    ///
    /// The chosen seed is logged at `debug` level and is available through
    /// [`Prng::seed`], so a run started this way can still be replayed.
    pub fn from_ambient() -> Self {
        let seed = rand::random::<i32>();
        debug!(seed, ambient = true, "seeding subtractive generator");

        Self::seeded(seed)
    }

    /// Creates a generator from an explicit seed.
    ///
    /// Every `i32` is accepted. Seeds differing only in sign produce the
    /// same sequence, and `i32::MIN` is treated like `i32::MAX`.
    pub fn from_seed(seed: i32) -> Self {
        debug!(seed, ambient = false, "seeding subtractive generator");

        Self::seeded(seed)
    }

    fn seeded(seed: i32) -> Self {
        let mut seed_array = [0i32; SEED_ARRAY_LEN];

        let subtraction = if seed == i32::MIN { i32::MAX } else { seed.abs() };
        let mut mj = MSEED - subtraction;
        seed_array[55] = mj;

        // Scatter the initial values over the array in steps of 21.
        let mut mk: i32 = 1;
        let mut ii = 0usize;
        for _ in 1..55 {
            ii += 21;
            if ii >= 55 {
                ii -= 55;
            }

            seed_array[ii] = mk;
            mk = mj.wrapping_sub(mk);
            if mk < 0 {
                mk = mk.wrapping_add(MBIG);
            }
            mj = seed_array[ii];
        }

        for _ in 1..5 {
            for i in 1..SEED_ARRAY_LEN {
                let mut n = i + 30;
                if n >= 55 {
                    n -= 55;
                }

                seed_array[i] = seed_array[i].wrapping_sub(seed_array[1 + n]);
                if seed_array[i] < 0 {
                    seed_array[i] = seed_array[i].wrapping_add(MBIG);
                }
            }
        }

        Self {
            seed,
            seed_array,
            inext: 0,
            inextp: INITIAL_INEXTP,
        }
    }

    /// Returns the seed this generator was constructed from.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Advances the recurrence and returns a value in `[0, MBIG)`.
    pub(crate) fn internal_sample(&mut self) -> i32 {
        let mut inext = self.inext + 1;
        if inext >= SEED_ARRAY_LEN {
            inext = 1;
        }

        let mut inextp = self.inextp + 1;
        if inextp >= SEED_ARRAY_LEN {
            inextp = 1;
        }

        let mut result = self.seed_array[inext].wrapping_sub(self.seed_array[inextp]);

        // Keep the output strictly below MBIG.
        if result == MBIG {
            result -= 1;
        }
        if result < 0 {
            result = result.wrapping_add(MBIG);
        }

        self.seed_array[inext] = result;
        self.inext = inext;
        self.inextp = inextp;

        result
    }

    /// Returns a double in `[0, 1)`.
    pub fn sample(&mut self) -> f64 {
        f64::from(self.internal_sample()) * (1.0 / f64::from(MBIG))
    }

    /// Returns the next raw sample, in `[0, 2^31 - 1)`, as a double.
    pub fn next(&mut self) -> f64 {
        f64::from(self.internal_sample())
    }

    /// Returns `sample() + min`, a double in `[min, min + 1)`.
    pub fn next_from(&mut self, min: f64) -> f64 {
        self.sample() + min
    }

    /// Returns a double in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] if `max` is not a finite value
    /// above zero.
    pub fn next_below(&mut self, max: f64) -> Result<f64> {
        self.next_range(0.0, max)
    }

    /// Returns a double in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] if either bound is not finite
    /// or `max <= min`. The generator state is left untouched in that case.
    pub fn next_range(&mut self, min: f64, max: f64) -> Result<f64> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(RandomError::invalid_range(min, max));
        }

        Ok(self.sample() * (max - min) + min)
    }

    /// Returns the next raw sample, in `[0, 2^31 - 1)`.
    pub fn next_integer(&mut self) -> i32 {
        self.internal_sample()
    }

    /// Returns `min`, the integer part of `sample() + min` in exact
    /// arithmetic.
    ///
    /// Evaluating `floor(sample() + min)` in `f64` rounds the largest
    /// samples up to `min + 1` once `|min|` exceeds about 2^29, and would
    /// overflow at `i32::MAX`. This method keeps the result in
    /// `[min, min + 1)` instead, so it differs from that float formula for
    /// those inputs. One sample is still consumed so that the sequence
    /// advances in lockstep with [`Prng::next_from`].
    pub fn next_integer_from(&mut self, min: i32) -> i32 {
        self.sample();

        min
    }

    /// Returns an integer in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] if `max <= 0`.
    pub fn next_integer_below(&mut self, max: i32) -> Result<i32> {
        self.next_integer_range(0, max)
    }

    /// Returns an integer in `[min, max)`.
    ///
    /// The scaled sample is floored before `min` is added, so large bounds
    /// cannot round the result up to `max`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] if `max <= min`. The generator
    /// state is left untouched in that case.
    pub fn next_integer_range(&mut self, min: i32, max: i32) -> Result<i32> {
        if max <= min {
            return Err(RandomError::invalid_range(min, max));
        }

        let range = i64::from(max) - i64::from(min);
        let offset = (self.sample() * range as f64).floor() as i64;

        Ok((i64::from(min) + offset.min(range - 1)) as i32)
    }

    /// Returns a double in `[0, 1)`. Alias for [`Prng::sample`].
    pub fn next_double(&mut self) -> f64 {
        self.sample()
    }

    /// Fills `buffer` with random bytes, one draw per byte.
    ///
    /// An empty buffer consumes no samples.
    pub fn next_bytes(&mut self, buffer: &mut [u8]) {
        for byte in buffer.iter_mut() {
            *byte = (self.internal_sample() % 256) as u8;
        }
    }

    /// Returns a 64-bit value assembled from eight [`Prng::next_bytes`]
    /// draws, least significant byte first.
    pub fn next_long(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.next_bytes(&mut bytes);

        u64::from_le_bytes(bytes)
    }

    /// Returns `next_long() + min`, saturating at `u64::MAX`.
    pub fn next_long_from(&mut self, min: u64) -> u64 {
        self.next_long().saturating_add(min)
    }

    /// Returns a 64-bit value in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] if `max == 0`.
    pub fn next_long_below(&mut self, max: u64) -> Result<u64> {
        self.next_long_range(0, max)
    }

    /// Returns `next_long() % (max - min) + min`, a value in `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] if `max <= min`. The generator
    /// state is left untouched in that case.
    pub fn next_long_range(&mut self, min: u64, max: u64) -> Result<u64> {
        if max <= min {
            return Err(RandomError::invalid_range(min, max));
        }

        Ok(self.next_long() % (max - min) + min)
    }
}

impl Default for Prng {
    /// Creates a generator seeded from ambient entropy.
    fn default() -> Self {
        Self::new()
    }
}
