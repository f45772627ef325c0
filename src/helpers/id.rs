use tracing::trace;

use crate::error::Result;
use crate::rng::RandomSource;

/// Lower bound used when callers have no preference.
pub const DEFAULT_MIN_ID: u64 = 1;

/// Returns an identifier no smaller than `min_value`.
///
/// A seeded [`Prng`](crate::rng::Prng) yields `next_long() + min_value`;
/// [`Ambient`](crate::rng::Ambient) draws uniformly from
/// `[min_value, MAX_SAFE_INTEGER]`.
///
/// # Errors
///
/// Returns [`RandomError::InvalidRange`](crate::error::RandomError::InvalidRange)
/// if the source cannot produce a value at or above `min_value`.
pub fn get_id<S: RandomSource + ?Sized>(min_value: u64, source: &mut S) -> Result<u64> {
    let id = source.next_id(min_value)?;

    trace!(min_value, id, "generated id");
    Ok(id)
}
