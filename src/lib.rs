//! # pig-dice
//!
//! Turn engine for the two-player dice game Pig.
//!
//! On each turn a player rolls a die as often as they like, adding each roll
//! to the turn's score, and may hold at any time to bank it. Rolling a 1
//! loses the turn's points. The first player whose banked score reaches 100
//! wins. In the timed variant the game also ends after one minute, and the
//! highest banked score at that moment wins.
//!
//! ## Design Principles
//!
//! 1. **Commit at turn boundaries**: a player's score changes only when a
//!    turn ends by hold, bust or reaching 100. A turn cut short by the clock
//!    commits nothing.
//!
//! 2. **Pluggable collaborators**: dice, clocks, decision policies and
//!    observers are traits, so every game can be replayed deterministically.
//!
//! 3. **Loops, not recursion**: the controller drives the turn engine one
//!    turn at a time for as long as the game lasts.
//!
//! ## Modules
//!
//! - `core`: players, decisions, dice, clocks, configuration, errors
//! - `rotation`: round-robin turn order
//! - `policy`: human and computer decision policies
//! - `rules`: the per-turn state machine and its events
//! - `games`: game controllers, setup and final rankings
//! - `render`: console text for narration and the leaderboard

pub mod core;
pub mod games;
pub mod policy;
pub mod render;
pub mod rotation;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, Clock, Die, GameConfig, GameRng, GameRngState, Identity, LoadedDie, ManualClock,
    PigError, Player, PlayerId, PlayerMap, SystemClock, WINNING_SCORE,
};

pub use crate::rotation::PlayerRotation;

pub use crate::policy::{AutomatedPolicy, DecisionContext, DecisionPolicy, HumanPolicy, Prompt, ScriptedPrompt};

pub use crate::rules::{GameEvent, GameObserver, TurnEngine, TurnOutcome, TurnReport, TurnState};

pub use crate::games::{
    EndReason, Game, GameBuilder, GameController, GameResult, PlayerKind, Standing,
    TimedGameController,
};
