//! Final rankings.

use serde::{Deserialize, Serialize};

use crate::core::{PigError, Player, PlayerId};
use crate::rules::TurnReport;

/// Why the game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The winner's committed score reached the threshold.
    ThresholdReached,
    /// A timed game ran out of time.
    TimeExpired,
}

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub score: u32,
    pub rolls: u32,
}

impl From<&Player> for Standing {
    fn from(player: &Player) -> Self {
        Self {
            player: player.id(),
            name: player.name().to_string(),
            score: player.score(),
            rolls: player.rolls(),
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Why the game ended.
    pub reason: EndReason,
    /// The announced winner.
    pub winner: Standing,
    /// All players, highest committed score first. Equal scores keep
    /// registration order.
    pub standings: Vec<Standing>,
    /// Every turn played, in order.
    pub turns: Vec<TurnReport>,
}

impl GameResult {
    /// Result of a game won by reaching the threshold.
    pub(crate) fn threshold(
        winner: PlayerId,
        players: &[&Player],
        turns: Vec<TurnReport>,
    ) -> Result<Self, PigError> {
        let standings = rank(players);
        let winner = standings
            .iter()
            .find(|s| s.player == winner)
            .cloned()
            .ok_or(PigError::EmptyRotation)?;
        Ok(Self {
            reason: EndReason::ThresholdReached,
            winner,
            standings,
            turns,
        })
    }

    /// Result of a timed game whose clock ran out.
    ///
    /// The winner is the highest committed score; ties go to the player
    /// registered first.
    pub(crate) fn time_expired(players: &[&Player], turns: Vec<TurnReport>) -> Result<Self, PigError> {
        let standings = rank(players);
        let winner = standings.first().cloned().ok_or(PigError::EmptyRotation)?;
        Ok(Self {
            reason: EndReason::TimeExpired,
            winner,
            standings,
            turns,
        })
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner.player == player
    }

    /// Number of turns played, including an interrupted final turn.
    #[must_use]
    pub fn turns_played(&self) -> usize {
        self.turns.len()
    }
}

/// Sort by committed score, descending. `players` must be in registration
/// order; the sort is stable so that order breaks ties.
fn rank(players: &[&Player]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = players.iter().map(|p| Standing::from(*p)).collect();
    standings.sort_by(|a, b| b.score.cmp(&a.score));
    standings
}
