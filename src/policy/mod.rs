//! Decision policies: who decides between rolling and holding.
//!
//! Policies are trait-based so the turn engine never knows whether it is
//! talking to a person or a formula:
//! - `AutomatedPolicy`: deterministic hold-at-25 rule, tightened near 100
//! - `HumanPolicy`: asks a [`Prompt`] and interprets the answer

mod automated;
mod human;

use std::time::Duration;

use crate::core::{Action, PigError, PlayerId};

pub use automated::AutomatedPolicy;
#[cfg(feature = "cli")]
pub use human::TerminalPrompt;
pub use human::{HumanPolicy, Prompt, ScriptedPrompt, ROLL_OR_HOLD};

/// What a policy can see when asked for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecisionContext<'a> {
    /// Seat being asked.
    pub player: PlayerId,
    /// Name of the seat being asked.
    pub name: &'a str,
    /// Score committed before this turn.
    pub committed: u32,
    /// Points accumulated so far this turn (not yet committed).
    pub turn_score: u32,
    /// Rolls made so far this turn.
    pub rolls_this_turn: u32,
    /// Most recent roll this turn.
    pub last_roll: Option<u8>,
    /// Time left in a timed game.
    pub time_left: Option<Duration>,
}

/// Chooses the next step of a turn.
pub trait DecisionPolicy {
    /// Decide whether to roll or hold.
    ///
    /// May return `Action::Invalid`; the engine reports it and asks again.
    /// Errors are fatal to the game.
    fn decide(&mut self, context: &DecisionContext<'_>) -> Result<Action, PigError>;
}
