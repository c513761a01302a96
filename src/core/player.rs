//! Player identification, per-player storage, and scoring state.
//!
//! ## PlayerId
//!
//! Seat identifier. Seats are numbered in registration order, which is
//! also the tie-break order for rankings.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Name, identity and the committed score/roll totals. Scores only move
//! through [`Player::commit`], which the turn engine calls once per turn.

use serde::{Deserialize, Serialize};

use super::error::PigError;

/// Seat identifier.
///
/// Indices are 0-based: the first registered player is `PlayerId(0)`.
/// Display is 1-based to match how seats are announced ("Player 1").
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the seat number as announced to players (1-based).
    #[must_use]
    pub const fn seat(self) -> usize {
        self.0 as usize + 1
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.seat())
    }
}

/// Per-player data storage with O(1) access.
///
/// Values are stored in seat order, so the value at position `i` belongs
/// to `PlayerId(i)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build a map from values already in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }
}

/// Who makes the decisions for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    /// Decisions come from a person at the terminal.
    Human,
    /// Decisions come from the built-in hold-at-25 policy.
    Automated,
}

/// A seat at the table and its committed totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    identity: Identity,
    score: u32,
    rolls: u32,
}

impl Player {
    /// Create a player with zeroed totals.
    ///
    /// The name is trimmed; a name that is blank after trimming is rejected.
    pub fn new(id: PlayerId, name: &str, identity: Identity) -> Result<Self, PigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PigError::EmptyName);
        }
        Ok(Self {
            id,
            name: name.to_string(),
            identity,
            score: 0,
            rolls: 0,
        })
    }

    /// Seat identifier.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human or automated.
    #[must_use]
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Committed score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Lifetime number of rolls, busts included.
    #[must_use]
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    /// Add a finished turn's points and rolls to the committed totals.
    pub fn commit(&mut self, turn_score: u32, roll_count: u32) {
        self.score += turn_score;
        self.rolls += roll_count;
    }
}
