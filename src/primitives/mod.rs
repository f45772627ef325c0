//! Primitive conversions
//!
//! This module holds low-level, allocation-light routines that the value
//! helpers build on but that carry no randomness of their own.
//!
//! Current primitives include:
//! - `to_radix_string`: ECMAScript-compatible radix rendering of doubles

mod radix;

pub use radix::to_radix_string;
