//! Generator configuration
//!
//! This module defines how a generator is configured from outside the
//! program: a serde-friendly [`GeneratorConfig`] that can be embedded in a
//! larger configuration file, and an environment lookup for pinning the
//! seed of a single run.

use std::env::VarError;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RandomError, Result};
use crate::rng::Prng;

/// Environment variable read by [`GeneratorConfig::from_env`].
pub const SEED_ENV_VAR: &str = "SUBRAND_SEED";

/// Configuration for building a [`Prng`].
///
/// An absent seed means the generator is seeded from ambient entropy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Explicit seed for reproducible runs.
    pub seed: Option<i32>,
}

impl GeneratorConfig {
    /// Configuration pinned to `seed`.
    pub fn seeded(seed: i32) -> Self {
        Self { seed: Some(seed) }
    }

    /// Parses a seed as it would appear in [`SEED_ENV_VAR`].
    ///
    /// Surrounding whitespace is ignored and a blank value means no seed.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidSeed`] if the value is not an `i32`.
    pub fn from_seed_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        trimmed
            .parse::<i32>()
            .map(Self::seeded)
            .map_err(|e| RandomError::InvalidSeed(format!("{trimmed:?}: {e}")))
    }

    /// Reads the seed from [`SEED_ENV_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidSeed`] if the variable is set to
    /// something other than an `i32`, including values that are not valid
    /// unicode.
    pub fn try_from_env() -> Result<Self> {
        match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => Self::from_seed_str(&raw),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(RandomError::InvalidSeed(format!(
                "{raw:?}: not valid unicode"
            ))),
        }
    }

    /// Reads the seed from [`SEED_ENV_VAR`], falling back to ambient seeding
    /// when the variable is unset or unusable.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring {SEED_ENV_VAR}, seeding from ambient entropy");
            Self::default()
        })
    }

    /// Builds a generator from this configuration.
    pub fn build(&self) -> Prng {
        match self.seed {
            Some(seed) => Prng::from_seed(seed),
            None => Prng::from_ambient(),
        }
    }
}
