//! Untimed and timed game loops.

use std::time::Duration;

use crate::core::{Clock, Die, PigError, Player, PlayerMap, SystemClock};
use crate::policy::DecisionPolicy;
use crate::rotation::PlayerRotation;
use crate::rules::{GameObserver, TurnEngine, TurnOutcome, TurnReport};

use super::result::GameResult;

/// Plays turns in rotation until someone reaches the threshold.
pub struct GameController<D, C = SystemClock> {
    rotation: PlayerRotation,
    policies: PlayerMap<Box<dyn DecisionPolicy>>,
    engine: TurnEngine<D, C>,
    observer: Box<dyn GameObserver>,
    history: Vec<TurnReport>,
}

impl<D: Die, C: Clock> GameController<D, C> {
    /// Create a controller over `seats`, in registration order.
    ///
    /// Each player's id must equal its position in `seats`; otherwise
    /// returns [`PigError::SeatOrder`] for the first seat that does not.
    pub fn new(
        seats: Vec<(Player, Box<dyn DecisionPolicy>)>,
        engine: TurnEngine<D, C>,
    ) -> Result<Self, PigError> {
        if let Some((position, (player, _))) = seats
            .iter()
            .enumerate()
            .find(|(i, (p, _))| p.id().index() != *i)
        {
            return Err(PigError::SeatOrder {
                position,
                found: player.id(),
            });
        }

        let (players, policies): (Vec<_>, Vec<_>) = seats.into_iter().unzip();
        Ok(Self {
            rotation: PlayerRotation::new(players),
            policies: PlayerMap::from_vec(policies),
            engine,
            observer: Box::new(()),
            history: Vec::new(),
        })
    }

    /// Send game events to `observer`.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The turn order and the players in it.
    pub fn rotation(&self) -> &PlayerRotation {
        &self.rotation
    }

    /// Turns completed so far.
    pub fn history(&self) -> &[TurnReport] {
        &self.history
    }

    /// Play until the threshold is reached.
    pub fn play(mut self) -> Result<GameResult, PigError> {
        self.run()
    }

    /// Play one turn for the current player and advance the rotation unless
    /// the turn ended the game.
    pub fn play_turn(&mut self) -> Result<TurnReport, PigError> {
        let player = self.rotation.current_mut()?;
        let policy = self.policies.get_mut(player.id());
        let report = self
            .engine
            .play_turn(player, &mut **policy, &mut *self.observer)?;
        self.history.push(report);

        if !report.outcome.ends_game() {
            self.rotation.advance()?;
        }
        Ok(report)
    }

    fn run(&mut self) -> Result<GameResult, PigError> {
        loop {
            let report = self.play_turn()?;
            match report.outcome {
                TurnOutcome::ThresholdReached => {
                    log::info!("{} wins by reaching the threshold", report.player);
                    return GameResult::threshold(
                        report.player,
                        &self.rotation.snapshot(),
                        std::mem::take(&mut self.history),
                    );
                }
                TurnOutcome::TimeExpired => {
                    let result = GameResult::time_expired(
                        &self.rotation.snapshot(),
                        std::mem::take(&mut self.history),
                    )?;
                    log::info!("time expired, {} leads with {}", result.winner.name, result.winner.score);
                    return Ok(result);
                }
                TurnOutcome::Bust | TurnOutcome::Held => {}
            }
        }
    }
}

/// A game that also ends when its time limit runs out.
///
/// The countdown starts when [`play`](Self::play) is called. A turn in
/// progress at the deadline is abandoned without committing.
pub struct TimedGameController<D, C = SystemClock> {
    inner: GameController<D, C>,
    time_limit: Duration,
}

impl<D: Die, C: Clock> TimedGameController<D, C> {
    /// Wrap `inner` with a time limit.
    pub fn new(inner: GameController<D, C>, time_limit: Duration) -> Self {
        Self { inner, time_limit }
    }

    /// The time budget for the game.
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// The turn order and the players in it.
    pub fn rotation(&self) -> &PlayerRotation {
        self.inner.rotation()
    }

    /// Start the clock and play until the threshold or the deadline.
    pub fn play(mut self) -> Result<GameResult, PigError> {
        self.inner.engine.start_timer(self.time_limit);
        log::info!("timed game started with {}s on the clock", self.time_limit.as_secs());
        self.inner.run()
    }
}
