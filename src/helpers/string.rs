use tracing::trace;

use crate::error::{RandomError, Result};
use crate::rng::RandomSource;

/// Alphabet used when callers have no preference.
pub const DEFAULT_CHARSET: &str = "aeiouwjptksmnl";

/// Returns a string of `length` characters drawn independently from
/// `charset`.
///
/// Each character is `charset[floor(draw * n)]`, where `n` counts Unicode
/// scalar values, so multi-byte alphabets are picked per character rather
/// than per byte.
///
/// # Errors
///
/// Returns [`RandomError::EmptyCharset`] if `charset` is empty and
/// `length > 0`.
pub fn get_random_string<S: RandomSource + ?Sized>(
    length: usize,
    source: &mut S,
    charset: &str,
) -> Result<String> {
    if length == 0 {
        return Ok(String::new());
    }

    let alphabet: Vec<char> = charset.chars().collect();
    let last = alphabet.len().checked_sub(1).ok_or(RandomError::EmptyCharset)?;

    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let index = (source.next_double() * alphabet.len() as f64).floor() as usize;
        out.push(alphabet[index.min(last)]);
    }

    trace!(length, charset_len = alphabet.len(), "generated random string");
    Ok(out)
}
