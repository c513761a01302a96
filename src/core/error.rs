//! Error taxonomy for the turn engine and its setup.
//!
//! Only `InvalidAction` is recoverable: the engine reports it and asks the
//! same player again. Every other variant halts turn processing and is
//! propagated to the process boundary.

use thiserror::Error;

use super::player::PlayerId;

/// Errors raised by the Pig engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PigError {
    /// The active player answered with something other than roll or hold.
    #[error("invalid action '{0}': enter 'r' to roll or 'h' to hold")]
    InvalidAction(String),

    /// A seat was configured with a type other than `human` or `computer`.
    #[error("invalid player type '{0}': valid types are computer or human")]
    InvalidPlayerType(String),

    /// The rotation was asked for a player before any were registered.
    #[error("no players are registered in the rotation")]
    EmptyRotation,

    /// A player name was blank after trimming.
    #[error("player name must not be empty")]
    EmptyName,

    /// The game was set up with the wrong number of seats.
    #[error("Pig is played by exactly 2 players, got {0}")]
    PlayerCount(usize),

    /// A seat's player id does not match its registration position.
    #[error("seat {position} is registered as {found}; ids must follow registration order")]
    SeatOrder { position: usize, found: PlayerId },

    /// The die could not produce another value.
    #[error("the die has no more values to roll")]
    DieExhausted,

    /// The die produced a value outside 1..=6.
    #[error("die produced {0}, which is outside 1..=6")]
    DieOutOfRange(u8),

    /// Reading a decision from the terminal failed.
    #[error("failed to read player input: {0}")]
    Input(String),
}

impl PigError {
    /// Whether the engine may re-request a decision after this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PigError::InvalidAction(_))
    }
}
