//! Human player.
//!
//! The policy itself only interprets text; where the text comes from is a
//! [`Prompt`]. The terminal implementation blocks on stdin.

use std::collections::VecDeque;

use crate::core::{Action, PigError};

use super::{DecisionContext, DecisionPolicy};

/// Question shown to a human before every decision.
pub const ROLL_OR_HOLD: &str = "Enter 'r' to roll the die, or 'h' to hold. What would you like to do?";

/// Source of raw answers for a human seat.
pub trait Prompt {
    /// Ask for the next decision and return the raw answer.
    fn ask(&mut self, context: &DecisionContext<'_>) -> Result<String, PigError>;
}

/// Decision policy backed by a person.
#[derive(Clone, Debug)]
pub struct HumanPolicy<P> {
    prompt: P,
}

impl<P: Prompt> HumanPolicy<P> {
    /// Create a policy that reads answers from `prompt`.
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }
}

impl<P: Prompt> DecisionPolicy for HumanPolicy<P> {
    fn decide(&mut self, context: &DecisionContext<'_>) -> Result<Action, PigError> {
        let answer = self.prompt.ask(context)?;
        let action = Action::from_input(&answer);
        log::debug!("{} answered {:?} ({})", context.name, answer.trim(), action);
        Ok(action)
    }
}

/// Prompt that replays canned answers.
///
/// Fails with [`PigError::Input`] once the answers run out, the same way a
/// closed stdin would.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
}

impl ScriptedPrompt {
    /// Create a prompt that answers with `answers` in order.
    pub fn new<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> Self {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, _context: &DecisionContext<'_>) -> Result<String, PigError> {
        self.answers
            .pop_front()
            .ok_or_else(|| PigError::Input("no more scripted answers".to_string()))
    }
}

/// Prompt on the controlling terminal.
#[cfg(feature = "cli")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalPrompt;

#[cfg(feature = "cli")]
impl Prompt for TerminalPrompt {
    fn ask(&mut self, _context: &DecisionContext<'_>) -> Result<String, PigError> {
        dialoguer::Input::<String>::new()
            .with_prompt(ROLL_OR_HOLD)
            .allow_empty(true)
            .report(false)
            .interact_text()
            .map_err(|e| PigError::Input(e.to_string()))
    }
}
