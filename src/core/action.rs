//! Player decisions.
//!
//! A decision is one of three things: roll the die, hold (bank the turn),
//! or an unrecognized answer. `Invalid` never changes game state; the
//! engine reports it and asks again.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::PigError;

/// A decision made at the start of each step of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll the die.
    Roll,
    /// Commit the turn score and pass the die.
    Hold,
    /// Unrecognized input.
    Invalid,
}

impl Action {
    /// Interpret free-form input, mapping anything unrecognized to `Invalid`.
    ///
    /// ```
    /// use pig_dice::core::Action;
    ///
    /// assert_eq!(Action::from_input(" R "), Action::Roll);
    /// assert_eq!(Action::from_input("hold"), Action::Hold);
    /// assert_eq!(Action::from_input("x"), Action::Invalid);
    /// ```
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        input.parse().unwrap_or(Action::Invalid)
    }
}

impl FromStr for Action {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "roll" => Ok(Action::Roll),
            "h" | "hold" => Ok(Action::Hold),
            _ => Err(PigError::InvalidAction(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Action::Roll => "roll",
            Action::Hold => "hold",
            Action::Invalid => "invalid",
        };
        f.write_str(s)
    }
}
