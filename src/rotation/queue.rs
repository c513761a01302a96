//! Queue-backed player rotation.

use std::collections::VecDeque;

use crate::core::{PigError, Player, PlayerId};

/// Circular ordering over the registered players.
///
/// Owns the players for the duration of a game. Only the current player is
/// handed out mutably, and only between calls to [`advance`](Self::advance).
#[derive(Clone, Debug, Default)]
pub struct PlayerRotation {
    queue: VecDeque<Player>,
}

impl PlayerRotation {
    /// Create a rotation in registration order.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            queue: players.into(),
        }
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no players are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The player whose turn it is.
    pub fn current(&self) -> Result<&Player, PigError> {
        self.queue.front().ok_or(PigError::EmptyRotation)
    }

    /// Mutable access to the player whose turn it is.
    pub fn current_mut(&mut self) -> Result<&mut Player, PigError> {
        self.queue.front_mut().ok_or(PigError::EmptyRotation)
    }

    /// Move the current player to the back and return the new current player.
    ///
    /// Call once per completed turn.
    pub fn advance(&mut self) -> Result<&Player, PigError> {
        let finished = self.queue.pop_front().ok_or(PigError::EmptyRotation)?;
        self.queue.push_back(finished);
        self.current()
    }

    /// Look up a player by seat without moving the rotation.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.queue.iter().find(|p| p.id() == id)
    }

    /// All players in registration order, regardless of whose turn it is.
    #[must_use]
    pub fn snapshot(&self) -> Vec<&Player> {
        let mut players: Vec<_> = self.queue.iter().collect();
        players.sort_by_key(|p| p.id());
        players
    }
}
