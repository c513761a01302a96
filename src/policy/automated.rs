//! Computer player.

use crate::core::{Action, PigError, AUTOMATED_TURN_CAP, WINNING_SCORE};

use super::{DecisionContext, DecisionPolicy};

/// Hold once the turn is worth 25 points, or once it is worth enough to
/// reach 100, whichever comes first.
///
/// Stateless: the decision depends only on the scores in the context.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutomatedPolicy;

impl AutomatedPolicy {
    /// Points this turn at which the policy holds.
    #[must_use]
    pub fn hold_target(committed: u32, turn_score: u32) -> u32 {
        let to_win = WINNING_SCORE.saturating_sub(committed + turn_score);
        AUTOMATED_TURN_CAP.min(to_win)
    }
}

impl DecisionPolicy for AutomatedPolicy {
    fn decide(&mut self, context: &DecisionContext<'_>) -> Result<Action, PigError> {
        let target = Self::hold_target(context.committed, context.turn_score);
        let action = if context.turn_score >= target {
            Action::Hold
        } else {
            Action::Roll
        };
        log::debug!(
            "{} decides to {} at {} this turn (target {})",
            context.name,
            action,
            context.turn_score,
            target
        );
        Ok(action)
    }
}
