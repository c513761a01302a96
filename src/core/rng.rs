//! Die rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical roll sequence
//! - **Serializable**: O(1) state capture and restore
//! - **Pluggable**: the engine rolls through the [`Die`] trait, so a fixed
//!   sequence ([`LoadedDie`]) can stand in for the RNG
//!
//! ```
//! use pig_dice::core::{Die, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! for _ in 0..20 {
//!     assert_eq!(a.roll().unwrap(), b.roll().unwrap());
//! }
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::PigError;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Source of die values.
///
/// Implementations return a value in `1..=DIE_FACES`, or an error when no
/// value can be produced. The engine treats both an error and an
/// out-of-range value as fatal.
pub trait Die {
    /// Roll once.
    fn roll(&mut self) -> Result<u8, PigError>;
}

/// Seeded six-sided die.
///
/// Uses ChaCha8 so a logged seed is enough to replay a whole game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is available through [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Die for GameRng {
    fn roll(&mut self) -> Result<u8, PigError> {
        Ok(self.inner.gen_range(1..=DIE_FACES))
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// A die that replays a fixed sequence of values.
///
/// Returns [`PigError::DieExhausted`] once the sequence runs out.
/// Values are passed through unchecked so range validation can be tested.
#[derive(Clone, Debug, Default)]
pub struct LoadedDie {
    values: VecDeque<u8>,
}

impl LoadedDie {
    /// Create a die that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Die for LoadedDie {
    fn roll(&mut self) -> Result<u8, PigError> {
        self.values.pop_front().ok_or(PigError::DieExhausted)
    }
}
