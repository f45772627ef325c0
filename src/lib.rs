//! Reproducible pseudorandom values
//!
//! This crate provides a seeded subtractive pseudorandom number generator
//! and the helpers built on it for generating nonces, random strings and
//! numeric identifiers.
//!
//! The focus is on **reproducibility**: a given `i32` seed produces the same
//! sequence as every other faithful implementation of the generator, down
//! to the last bit. The generator is **not** cryptographically secure and
//! must not be used where unpredictability against an adversary matters.
//!
//! # Module overview
//!
//! - `rng`
//!   The [`Prng`](rng::Prng) generator core, the
//!   [`RandomSource`](rng::RandomSource) capability and its non-seeded
//!   [`Ambient`](rng::Ambient) implementation, plus serializable state
//!   snapshots.
//!
//! - `helpers`
//!   Stateless nonce, random-string and identifier generation over an
//!   injected source.
//!
//! - `primitives`
//!   Low-level conversions used by the helpers, such as
//!   ECMAScript-compatible radix formatting of doubles.
//!
//! - `config`
//!   Serde-friendly generator configuration and environment lookup of a
//!   pinned seed.
//!
//! - `error`
//!   The crate's error type.
//!
//! # Example
//!
//! ```
//! use subrand::helpers::{get_nonce, get_random_string, DEFAULT_CHARSET};
//! use subrand::rng::{Ambient, Prng};
//!
//! let mut rng = Prng::from_seed(42);
//! assert_eq!(rng.next_integer(), 1_434_747_710);
//!
//! let mut rng = Prng::from_seed(42);
//! assert_eq!(get_nonce(10, &mut rng), "o1v6b5kags");
//!
//! // Not reproducible.
//! let word = get_random_string(6, &mut Ambient, DEFAULT_CHARSET).unwrap();
//! assert_eq!(word.len(), 6);
//! ```

pub mod config;
pub mod error;
pub mod helpers;
pub mod primitives;
pub mod rng;

pub use error::{RandomError, Result};
