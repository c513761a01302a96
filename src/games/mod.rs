//! Whole games: seating, the turn loop, and the final ranking.
//!
//! - `GameController`: rotate turns until a player reaches 100
//! - `TimedGameController`: same, but also stop when the clock runs out
//! - `GameBuilder`: seat two players and pick the variant
//! - `GameResult`: winner, leaderboard and turn history

mod controller;
mod result;
mod setup;

pub use controller::{GameController, TimedGameController};
pub use result::{EndReason, GameResult, Standing};
pub use setup::{computer_name, Game, GameBuilder, PlayerKind};
