//! The per-turn state machine.
//!
//! A turn starts awaiting a decision with a zeroed [`TurnState`] and runs
//! until one of four outcomes:
//!
//! | Outcome            | Committed to the player          | Ends game |
//! |--------------------|----------------------------------|-----------|
//! | `Bust`             | 0 points, all rolls this turn    | no        |
//! | `Held`             | turn points, all rolls           | no        |
//! | `ThresholdReached` | turn points, all rolls           | yes       |
//! | `TimeExpired`      | nothing                          | yes       |
//!
//! Invalid answers are reported and the same decision is asked again
//! without touching the turn state.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::core::{Action, Clock, Die, PigError, Player, PlayerId, SystemClock, DIE_FACES, WINNING_SCORE};
use crate::policy::{DecisionContext, DecisionPolicy};

use super::event::{GameEvent, GameObserver};

/// The face that wipes out a turn.
pub const BUST_FACE: u8 = 1;

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Rolled a 1.
    Bust,
    /// Chose to hold.
    Held,
    /// Committed score reached the winning threshold.
    ThresholdReached,
    /// The timed game's deadline passed before the turn finished.
    TimeExpired,
}

impl TurnOutcome {
    /// Whether this outcome ends the whole game.
    #[must_use]
    pub fn ends_game(self) -> bool {
        matches!(self, TurnOutcome::ThresholdReached | TurnOutcome::TimeExpired)
    }
}

/// Uncommitted progress of the active turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnState {
    /// Points accumulated this turn.
    pub turn_score: u32,
    /// Rolls made this turn.
    pub rolls: u32,
    /// Most recent roll.
    pub last_roll: Option<u8>,
}

/// Summary of a finished turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Who played the turn.
    pub player: PlayerId,
    /// How it ended.
    pub outcome: TurnOutcome,
    /// Points committed to the player by this turn.
    pub points: u32,
    /// Rolls made this turn. Not committed when the turn timed out.
    pub rolls: u32,
    /// Final roll of the turn.
    pub last_roll: Option<u8>,
}

/// Drives one player's turn from first decision to completion.
///
/// Owns the die and, for timed games, the clock and deadline. The deadline
/// is checked before every decision.
#[derive(Debug)]
pub struct TurnEngine<D, C = SystemClock> {
    die: D,
    clock: C,
    deadline: Option<Instant>,
}

impl<D: Die> TurnEngine<D, SystemClock> {
    /// Create an untimed engine on the wall clock.
    pub fn new(die: D) -> Self {
        Self::with_clock(die, SystemClock)
    }
}

impl<D: Die, C: Clock> TurnEngine<D, C> {
    /// Create an untimed engine on the given clock.
    pub fn with_clock(die: D, clock: C) -> Self {
        Self {
            die,
            clock,
            deadline: None,
        }
    }

    /// The engine's clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Start the countdown: the deadline becomes now + `limit`.
    pub fn start_timer(&mut self, limit: Duration) -> Instant {
        let deadline = self.clock.now() + limit;
        self.deadline = Some(deadline);
        deadline
    }

    /// The deadline, if the game is timed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time until the deadline, if the game is timed.
    #[must_use]
    pub fn time_left(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(self.clock.now()))
    }

    /// Whether the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| self.clock.now() >= deadline)
    }

    /// Play one turn for `player`, asking `policy` for every decision.
    ///
    /// Commits to `player` exactly once, when the turn ends by bust, hold or
    /// threshold. A timed-out turn commits nothing. Errors from the die or
    /// the policy abort the turn before any commit.
    pub fn play_turn(
        &mut self,
        player: &mut Player,
        policy: &mut dyn DecisionPolicy,
        observer: &mut dyn GameObserver,
    ) -> Result<TurnReport, PigError> {
        let mut state = TurnState::default();
        log::info!("{} starts a turn at {}", player.name(), player.score());
        observer.notify(&GameEvent::TurnStarted {
            name: player.name(),
            score: player.score(),
        });

        loop {
            if self.is_expired() {
                log::info!(
                    "time expired during {}'s turn, discarding {} points",
                    player.name(),
                    state.turn_score
                );
                observer.notify(&GameEvent::TimeExpired {
                    name: player.name(),
                    discarded: state.turn_score,
                });
                return Ok(Self::report(player, TurnOutcome::TimeExpired, 0, &state));
            }

            let time_left = self.time_left();
            if let Some(left) = time_left {
                observer.notify(&GameEvent::TimeRemaining { left });
            }

            let context = DecisionContext {
                player: player.id(),
                name: player.name(),
                committed: player.score(),
                turn_score: state.turn_score,
                rolls_this_turn: state.rolls,
                last_roll: state.last_roll,
                time_left,
            };

            let action = match policy.decide(&context) {
                Ok(action) => action,
                Err(err) if err.is_recoverable() => Action::Invalid,
                Err(err) => return Err(err),
            };

            match action {
                Action::Invalid => {
                    log::warn!("{} entered an invalid action", player.name());
                    observer.notify(&GameEvent::InvalidAction { name: player.name() });
                }
                Action::Hold => {
                    player.commit(state.turn_score, state.rolls);
                    log::info!("{} holds with {} points", player.name(), state.turn_score);
                    observer.notify(&GameEvent::Held {
                        name: player.name(),
                        turn_score: state.turn_score,
                        score: player.score(),
                    });
                    return Ok(Self::report(player, TurnOutcome::Held, state.turn_score, &state));
                }
                Action::Roll => {
                    let roll = self.roll()?;
                    state.rolls += 1;
                    state.last_roll = Some(roll);
                    log::debug!("{} rolled {}", player.name(), roll);

                    if roll == BUST_FACE {
                        state.turn_score = 0;
                        player.commit(0, state.rolls);
                        log::info!("{} busts after {} rolls", player.name(), state.rolls);
                        observer.notify(&GameEvent::Busted {
                            name: player.name(),
                            roll,
                            score: player.score(),
                        });
                        return Ok(Self::report(player, TurnOutcome::Bust, 0, &state));
                    }

                    state.turn_score += u32::from(roll);
                    if player.score() + state.turn_score >= WINNING_SCORE {
                        player.commit(state.turn_score, state.rolls);
                        log::info!("{} reaches {}", player.name(), player.score());
                        observer.notify(&GameEvent::ThresholdReached {
                            name: player.name(),
                            roll,
                            score: player.score(),
                        });
                        return Ok(Self::report(
                            player,
                            TurnOutcome::ThresholdReached,
                            state.turn_score,
                            &state,
                        ));
                    }

                    observer.notify(&GameEvent::Rolled {
                        name: player.name(),
                        roll,
                        turn_score: state.turn_score,
                        total: player.score() + state.turn_score,
                    });
                }
            }
        }
    }

    fn roll(&mut self) -> Result<u8, PigError> {
        let roll = self.die.roll()?;
        if !(1..=DIE_FACES).contains(&roll) {
            log::error!("die produced out-of-range value {}", roll);
            return Err(PigError::DieOutOfRange(roll));
        }
        Ok(roll)
    }

    fn report(player: &Player, outcome: TurnOutcome, points: u32, state: &TurnState) -> TurnReport {
        TurnReport {
            player: player.id(),
            outcome,
            points,
            rolls: state.rolls,
            last_roll: state.last_roll,
        }
    }
}
