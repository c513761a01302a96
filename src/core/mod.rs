//! Core types: players, decisions, dice, time, configuration, errors.
//!
//! Everything the turn engine and controllers are built from.

pub mod action;
pub mod clock;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::Action;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GameConfig, AUTOMATED_TURN_CAP, PLAYER_COUNT, TIME_LIMIT, WINNING_SCORE};
pub use error::PigError;
pub use player::{Identity, Player, PlayerId, PlayerMap};
pub use rng::{Die, GameRng, GameRngState, LoadedDie, DIE_FACES};
