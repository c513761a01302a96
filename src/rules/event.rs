//! Narration of a game as it is played.
//!
//! The engine fires an event at every visible step of a turn. Observers
//! decide what, if anything, to show; the engine never prints.

use std::time::Duration;

/// Something that happened during a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent<'a> {
    /// A player's turn began.
    TurnStarted { name: &'a str, score: u32 },
    /// Time left in a timed game, fired before each decision.
    TimeRemaining { left: Duration },
    /// The player answered with neither roll nor hold.
    InvalidAction { name: &'a str },
    /// A non-bust roll that did not reach the threshold.
    Rolled {
        name: &'a str,
        roll: u8,
        turn_score: u32,
        total: u32,
    },
    /// A 1 was rolled; the turn's points are gone.
    Busted { name: &'a str, roll: u8, score: u32 },
    /// The player banked the turn.
    Held {
        name: &'a str,
        turn_score: u32,
        score: u32,
    },
    /// The player's committed score reached the threshold.
    ThresholdReached { name: &'a str, roll: u8, score: u32 },
    /// Time ran out during this player's turn.
    TimeExpired { name: &'a str, discarded: u32 },
}

/// Receives game events.
pub trait GameObserver {
    /// Handle one event.
    fn notify(&mut self, event: &GameEvent<'_>);
}

/// Discards every event.
impl GameObserver for () {
    fn notify(&mut self, _event: &GameEvent<'_>) {}
}
