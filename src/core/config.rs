//! Game configuration.
//!
//! The rules themselves are fixed: a two-player race to `WINNING_SCORE`.
//! What a game may choose is whether it is timed and how its die is seeded.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Committed score that ends the game.
pub const WINNING_SCORE: u32 = 100;

/// The automated player never risks more than this many points in a turn.
pub const AUTOMATED_TURN_CAP: u32 = 25;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Length of a timed game.
pub const TIME_LIMIT: Duration = Duration::from_secs(60);

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the die. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Whether the game ends when the time limit runs out.
    pub timed: bool,

    /// Wall-clock budget for a timed game.
    pub time_limit: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            timed: false,
            time_limit: TIME_LIMIT,
        }
    }
}

impl GameConfig {
    /// Use a fixed seed for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Select the timed variant.
    pub fn with_timed(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }
}
