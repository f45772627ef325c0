//! Radix formatting for doubles
//!
//! This module renders an `f64` in an arbitrary radix using the shortest
//! digit sequence that still identifies the value, producing the same text
//! as ECMAScript's `Number.prototype.toString(radix)`. Nonces are built from
//! this rendering, so it has to match digit for digit.
//!
//! The integer part is only supported below 2^53, which covers every value
//! the generators produce.

/// Digit alphabet shared by all radixes up to 36.
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Smallest double strictly greater than a non-negative `value`.
#[inline]
fn next_up(value: f64) -> f64 {
    f64::from_bits(value.to_bits() + 1)
}

/// Formats `value` in the given radix.
///
/// Fractional digits are emitted until the remainder drops below half the
/// distance to the next representable double, then rounded half to even,
/// with carries propagated back into already written digits.
///
/// # Panics
///
/// Panics if `radix` is outside `2..=36`, or if `value` is not finite or
/// its magnitude is not below 2^53.
pub fn to_radix_string(value: f64, radix: u32) -> String {
    assert!((2..=36).contains(&radix), "radix {radix} outside 2..=36");
    assert!(
        value.is_finite() && value.abs() < 9_007_199_254_740_992.0,
        "value {value} cannot be formatted"
    );

    let negative = value < 0.0;
    let value = value.abs();

    let mut integer = value.floor();
    let mut fraction = value - integer;

    let base = f64::from(radix);
    let mut delta = (0.5 * (next_up(value) - value)).max(next_up(0.0));
    let mut fraction_digits: Vec<u32> = Vec::new();

    if fraction >= delta {
        loop {
            fraction *= base;
            delta *= base;

            let digit = fraction as u32;
            fraction_digits.push(digit);
            fraction -= f64::from(digit);

            if (fraction > 0.5 || (fraction == 0.5 && digit & 1 == 1)) && fraction + delta > 1.0 {
                // Round up, carrying into earlier digits.
                loop {
                    match fraction_digits.pop() {
                        None => {
                            integer += 1.0;
                            break;
                        }
                        Some(last) if last + 1 < radix => {
                            fraction_digits.push(last + 1);
                            break;
                        }
                        Some(_) => {}
                    }
                }
                break;
            }

            if fraction < delta {
                break;
            }
        }
    }

    let mut integer_digits = Vec::new();
    let mut rest = integer as u64;
    loop {
        integer_digits.push(DIGITS[(rest % u64::from(radix)) as usize]);
        rest /= u64::from(radix);
        if rest == 0 {
            break;
        }
    }

    let mut out = String::with_capacity(integer_digits.len() + fraction_digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(integer_digits.iter().rev().map(|&d| d as char));

    if !fraction_digits.is_empty() {
        out.push('.');
        out.extend(fraction_digits.iter().map(|&d| DIGITS[d as usize] as char));
    }

    out
}
