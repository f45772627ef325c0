//! Serializable generator snapshots
//!
//! A [`Prng`] serializes through [`PrngState`], a plain mirror of its fields.
//! Restoring a snapshot continues the exact sequence the original generator
//! would have produced. Snapshots are validated on the way in, since they
//! may come from storage or another process.

use serde::{Deserialize, Serialize};

use crate::error::RandomError;
use crate::rng::subtractive::{INITIAL_INEXTP, MBIG, SEED_ARRAY_LEN};
use crate::rng::Prng;

/// Externally visible form of a generator's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrngState {
    /// Seed the generator was built from.
    pub seed: i32,
    /// Leading cursor.
    pub inext: usize,
    /// Trailing cursor.
    pub inextp: usize,
    /// All 56 slots of the seed array, including the unused slot 0.
    pub seed_array: Vec<i32>,
}

impl From<&Prng> for PrngState {
    fn from(rng: &Prng) -> Self {
        Self {
            seed: rng.seed,
            inext: rng.inext,
            inextp: rng.inextp,
            seed_array: rng.seed_array.to_vec(),
        }
    }
}

impl From<Prng> for PrngState {
    fn from(rng: Prng) -> Self {
        Self::from(&rng)
    }
}

impl TryFrom<PrngState> for Prng {
    type Error = RandomError;

    fn try_from(state: PrngState) -> Result<Self, Self::Error> {
        let seed_array: [i32; SEED_ARRAY_LEN] =
            state.seed_array.as_slice().try_into().map_err(|_| {
                RandomError::InvalidState(format!(
                    "expected {SEED_ARRAY_LEN} slots, found {}",
                    state.seed_array.len()
                ))
            })?;

        if let Some(slot) = seed_array[1..].iter().position(|v| !(0..MBIG).contains(v)) {
            return Err(RandomError::InvalidState(format!(
                "slot {} holds {} outside [0, {MBIG})",
                slot + 1,
                seed_array[slot + 1]
            )));
        }

        if state.inext >= SEED_ARRAY_LEN {
            return Err(RandomError::InvalidState(format!(
                "cursor inext {} out of range",
                state.inext
            )));
        }

        // The trailing cursor sits INITIAL_INEXTP positions after inext on
        // the 1..=55 ring.
        let expected_inextp = (state.inext + INITIAL_INEXTP - 1) % 55 + 1;
        if state.inextp != expected_inextp {
            return Err(RandomError::InvalidState(format!(
                "cursor inextp {} does not trail inext {} by {INITIAL_INEXTP}",
                state.inextp, state.inext
            )));
        }

        Ok(Self {
            seed: state.seed,
            seed_array,
            inext: state.inext,
            inextp: state.inextp,
        })
    }
}

impl Serialize for Prng {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PrngState::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Prng {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let state = PrngState::deserialize(deserializer)?;

        Prng::try_from(state).map_err(serde::de::Error::custom)
    }
}
