//! Random number generation module
//!
//! This module provides the reproducible generator at the heart of the
//! crate and the capability through which helpers consume randomness.
//!
//! It is built around a seeded subtractive (lagged-Fibonacci) generator
//! whose seeding and sampling steps match the reference algorithm exactly,
//! so that a given seed yields the same sequence in every implementation.

/// Design goals:
/// - Bit-exact reproducibility for a given `i32` seed
/// - Fixed-size state, no heap allocation while sampling
/// - Explicit injection of seeded or ambient randomness
mod source;
mod state;
mod subtractive;

/// Deterministic subtractive pseudorandom number generator.
///
/// This type is the primary entry point for reproducible randomness
/// within the crate.
pub use subtractive::Prng;

pub use source::{Ambient, MAX_SAFE_INTEGER, RandomSource};
pub use state::PrngState;
