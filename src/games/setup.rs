//! Seating players and choosing the game variant.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Clock, Die, GameConfig, GameRng, Identity, PigError, Player, PlayerId, SystemClock, PLAYER_COUNT};
use crate::policy::{AutomatedPolicy, DecisionPolicy, HumanPolicy, Prompt};
use crate::rules::{GameObserver, TurnEngine};

use super::controller::{GameController, TimedGameController};
use super::result::GameResult;

/// Seat type as selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl PlayerKind {
    /// The identity a seat of this kind plays with.
    #[must_use]
    pub fn identity(self) -> Identity {
        match self {
            PlayerKind::Human => Identity::Human,
            PlayerKind::Computer => Identity::Automated,
        }
    }
}

impl FromStr for PlayerKind {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            _ => Err(PigError::InvalidPlayerType(s.to_string())),
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => f.write_str("human"),
            PlayerKind::Computer => f.write_str("computer"),
        }
    }
}

/// Name given to a computer seat, e.g. `Computer [Player 1]`.
#[must_use]
pub fn computer_name(id: PlayerId) -> String {
    format!("Computer [{}]", id)
}

/// A configured game, ready to play.
pub enum Game<D, C = SystemClock> {
    Untimed(GameController<D, C>),
    Timed(TimedGameController<D, C>),
}

impl<D: Die, C: Clock> Game<D, C> {
    /// Play to completion.
    pub fn play(self) -> Result<GameResult, PigError> {
        match self {
            Game::Untimed(game) => game.play(),
            Game::Timed(game) => game.play(),
        }
    }
}

/// Builder for a two-player game.
///
/// ```
/// use pig_dice::core::{GameConfig, WINNING_SCORE};
/// use pig_dice::games::{EndReason, GameBuilder};
///
/// let result = GameBuilder::new(GameConfig::default().with_seed(7))
///     .computer()?
///     .computer()?
///     .build_seeded()?
///     .play()?;
///
/// assert_eq!(result.reason, EndReason::ThresholdReached);
/// assert!(result.winner.score >= WINNING_SCORE);
/// # Ok::<(), pig_dice::core::PigError>(())
/// ```
pub struct GameBuilder {
    config: GameConfig,
    seats: Vec<(Player, Box<dyn DecisionPolicy>)>,
    observer: Option<Box<dyn GameObserver>>,
}

impl GameBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            seats: Vec::new(),
            observer: None,
        }
    }

    fn next_id(&self) -> PlayerId {
        PlayerId::new(self.seats.len() as u8)
    }

    /// Seat a player with an arbitrary decision policy.
    pub fn seat(
        mut self,
        name: &str,
        identity: Identity,
        policy: impl DecisionPolicy + 'static,
    ) -> Result<Self, PigError> {
        if self.seats.len() >= PLAYER_COUNT {
            return Err(PigError::PlayerCount(self.seats.len() + 1));
        }
        let player = Player::new(self.next_id(), name, identity)?;
        log::debug!("seated {} as {}", player.name(), player.id());
        self.seats.push((player, Box::new(policy)));
        Ok(self)
    }

    /// Seat a human who answers through `prompt`.
    pub fn human(self, name: &str, prompt: impl Prompt + 'static) -> Result<Self, PigError> {
        self.seat(name, Identity::Human, HumanPolicy::new(prompt))
    }

    /// Seat a computer player named after its seat.
    pub fn computer(self) -> Result<Self, PigError> {
        let name = computer_name(self.next_id());
        self.seat(&name, Identity::Automated, AutomatedPolicy)
    }

    /// Send game events to `observer`.
    pub fn observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Build with the given die and clock.
    pub fn build<D: Die, C: Clock>(self, die: D, clock: C) -> Result<Game<D, C>, PigError> {
        if self.seats.len() != PLAYER_COUNT {
            return Err(PigError::PlayerCount(self.seats.len()));
        }

        let engine = TurnEngine::with_clock(die, clock);
        let mut controller = GameController::new(self.seats, engine)?;
        if let Some(observer) = self.observer {
            controller = controller.with_observer(observer);
        }

        Ok(if self.config.timed {
            Game::Timed(TimedGameController::new(controller, self.config.time_limit))
        } else {
            Game::Untimed(controller)
        })
    }

    /// Build with a seeded die on the wall clock.
    ///
    /// Uses the configured seed, or draws one from OS entropy. The seed is
    /// logged so the game can be replayed.
    pub fn build_seeded(self) -> Result<Game<GameRng>, PigError> {
        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        log::info!("die seed {}", rng.seed());
        self.build(rng, SystemClock)
    }
}
