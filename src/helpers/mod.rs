//! Value-generation helpers
//!
//! Stateless functions that turn a [`RandomSource`](crate::rng::RandomSource)
//! into higher-level values:
//!
//! - [`get_nonce`]  
//!   Fixed-length tokens over `[0-9a-z]`.
//!
//! - [`get_random_string`]  
//!   Fixed-length strings over a caller-chosen alphabet.
//!
//! - [`get_id`]  
//!   Large non-negative numeric identifiers.
//!
//! Every helper takes the source explicitly. Pass a seeded
//! [`Prng`](crate::rng::Prng) for reproducible output, or
//! [`Ambient`](crate::rng::Ambient) when reproducibility is not wanted.

mod id;
mod nonce;
mod string;

pub use id::{DEFAULT_MIN_ID, get_id};
pub use nonce::get_nonce;
pub use string::{DEFAULT_CHARSET, get_random_string};
