use tracing::trace;

use crate::primitives::to_radix_string;
use crate::rng::RandomSource;

/// Characters taken from each rendered draw.
const DIGITS_PER_DRAW: usize = 10;

/// Returns a string of exactly `length` characters from `[0-9a-z]`.
///
/// Each draw is rendered in base 36 and its first ten fractional digits are
/// appended until the nonce is long enough; the excess is cut off. A zero
/// `length` returns an empty string without consulting `source`.
pub fn get_nonce<S: RandomSource + ?Sized>(length: usize, source: &mut S) -> String {
    let mut nonce = String::with_capacity(length + DIGITS_PER_DRAW);
    if length == 0 {
        return nonce;
    }

    while nonce.len() < length {
        let rendered = to_radix_string(source.next_double(), 36);
        // Skip the leading "0.".
        nonce.extend(rendered.chars().skip(2).take(DIGITS_PER_DRAW));
    }
    nonce.truncate(length);

    trace!(length, "generated nonce");
    nonce
}
