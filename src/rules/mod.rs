//! Turn rules for Pig.
//!
//! `TurnEngine` runs one player's turn: ask for a decision, roll, bust on a
//! 1, bank on hold, stop the game at 100. Controllers call it once per turn
//! and never interpret rolls themselves.

pub mod event;
pub mod turn;

pub use event::{GameEvent, GameObserver};
pub use turn::{TurnEngine, TurnOutcome, TurnReport, TurnState, BUST_FACE};
