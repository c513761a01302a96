//! Whole-game tests for the untimed and timed controllers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::iter::repeat;
use std::rc::Rc;
use std::time::Duration;

use pig_dice::core::{
    Action, GameConfig, Identity, LoadedDie, ManualClock, PigError, Player, PlayerId, SystemClock,
    WINNING_SCORE,
};
use pig_dice::games::{EndReason, Game, GameBuilder, GameController, TimedGameController};
use pig_dice::policy::{DecisionContext, DecisionPolicy, HumanPolicy, ScriptedPrompt};
use pig_dice::render;
use pig_dice::rules::{GameEvent, GameObserver, TurnEngine, TurnOutcome};

type Seat = (Player, Box<dyn DecisionPolicy>);

fn seat(id: u8, name: &str, script: Vec<&str>) -> Seat {
    let player = Player::new(PlayerId::new(id), name, Identity::Human).unwrap();
    let policy = HumanPolicy::new(ScriptedPrompt::new(script));
    (player, Box::new(policy))
}

fn rolls(n: usize) -> Vec<&'static str> {
    vec!["r"; n]
}

fn with_hold(mut script: Vec<&'static str>) -> Vec<&'static str> {
    script.push("h");
    script
}

/// Scripted policy that can also move a shared clock.
///
/// `wait` pushes the clock past any one-minute deadline and answers with
/// an invalid action; `late-h` does the same and holds.
struct Clocked {
    clock: ManualClock,
    steps: VecDeque<&'static str>,
}

impl Clocked {
    fn seat(id: u8, name: &str, clock: &ManualClock, steps: Vec<&'static str>) -> Seat {
        let player = Player::new(PlayerId::new(id), name, Identity::Human).unwrap();
        let policy = Clocked {
            clock: clock.clone(),
            steps: steps.into(),
        };
        (player, Box::new(policy))
    }
}

impl DecisionPolicy for Clocked {
    fn decide(&mut self, _context: &DecisionContext<'_>) -> Result<Action, PigError> {
        let step = self
            .steps
            .pop_front()
            .ok_or_else(|| PigError::Input("script ended".to_string()))?;
        match step {
            "wait" => {
                self.clock.advance(Duration::from_secs(61));
                Ok(Action::Invalid)
            }
            "late-h" => {
                self.clock.advance(Duration::from_secs(61));
                Ok(Action::Hold)
            }
            other => Ok(Action::from_input(other)),
        }
    }
}

#[derive(Clone, Default)]
struct Shared(Rc<RefCell<Vec<String>>>);

impl GameObserver for Shared {
    fn notify(&mut self, event: &GameEvent<'_>) {
        self.0.borrow_mut().push(render::narrate(event));
    }
}

// =============================================================================
// Untimed games
// =============================================================================

/// Test that turn scores of 20, 0 (bust) and 40 commit to 60.
#[test]
fn test_three_turns_commit_sixty() {
    let die = LoadedDie::new([6, 6, 4, 4, 1, 6, 6, 6, 6, 6, 5, 5]);
    let mut a_script = with_hold(rolls(4));
    a_script.extend(rolls(1));
    a_script.extend(with_hold(rolls(7)));
    let seats = vec![seat(0, "Ada", a_script), seat(1, "Bob", vec!["h", "h"])];
    let mut game = GameController::new(seats, TurnEngine::new(die)).unwrap();

    let outcomes: Vec<_> = (0..5).map(|_| game.play_turn().unwrap().outcome).collect();

    assert_eq!(
        outcomes,
        vec![
            TurnOutcome::Held,
            TurnOutcome::Held,
            TurnOutcome::Bust,
            TurnOutcome::Held,
            TurnOutcome::Held,
        ]
    );
    let ada = game.rotation().get(PlayerId::new(0)).unwrap();
    assert_eq!(ada.score(), 60);
    assert_eq!(ada.rolls(), 12);
    assert_eq!(game.history().len(), 5);
    // Bob is up next.
    assert_eq!(game.rotation().current().unwrap().name(), "Bob");
}

/// Test that reaching 100 on the opening turn ends the game before the
/// opponent plays.
#[test]
fn test_opening_turn_win() {
    let die = LoadedDie::new([6; 17]);
    let seats = vec![seat(0, "Ada", rolls(17)), seat(1, "Bob", vec![])];

    let result = GameController::new(seats, TurnEngine::new(die)).unwrap().play().unwrap();

    assert_eq!(result.reason, EndReason::ThresholdReached);
    assert!(result.is_winner(PlayerId::new(0)));
    assert_eq!(result.winner.score, 102);
    assert_eq!(result.turns_played(), 1);
    assert_eq!(result.standings[1].name, "Bob");
    assert_eq!(result.standings[1].score, 0);
}

/// Test that a player at 95 who rolls a 6 wins with 101.
#[test]
fn test_ninety_five_plus_six() {
    let die = LoadedDie::new(repeat(6).take(15).chain([5, 6]));
    let mut a_script = with_hold(rolls(16));
    a_script.push("r");
    let seats = vec![seat(0, "Ada", a_script), seat(1, "Bob", vec!["h"])];

    let result = GameController::new(seats, TurnEngine::new(die)).unwrap().play().unwrap();

    assert_eq!(result.reason, EndReason::ThresholdReached);
    assert_eq!(result.winner.name, "Ada");
    assert_eq!(result.winner.score, 101);
    assert_eq!(result.winner.rolls, 17);
    assert_eq!(
        result.turns.iter().map(|t| t.outcome).collect::<Vec<_>>(),
        vec![TurnOutcome::Held, TurnOutcome::Held, TurnOutcome::ThresholdReached]
    );
}

/// Test that the second seat can win and is ranked first.
#[test]
fn test_second_seat_wins() {
    let die = LoadedDie::new([1].into_iter().chain(repeat(6).take(17)));
    let seats = vec![seat(0, "Ada", rolls(1)), seat(1, "Bob", rolls(17))];

    let result = GameController::new(seats, TurnEngine::new(die)).unwrap().play().unwrap();

    assert!(result.is_winner(PlayerId::new(1)));
    assert_eq!(result.standings[0].name, "Bob");
    assert_eq!(result.standings[1].name, "Ada");
    assert_eq!(result.standings[1].rolls, 1);
}

/// Test that turn history accounts for every committed point and roll.
#[test]
fn test_history_matches_totals() {
    let result = GameBuilder::new(GameConfig::default().with_seed(2024))
        .computer()
        .unwrap()
        .computer()
        .unwrap()
        .build_seeded()
        .unwrap()
        .play()
        .unwrap();

    for standing in &result.standings {
        let turns = result.turns.iter().filter(|t| t.player == standing.player);
        let (points, rolls) = turns.fold((0, 0), |(p, r), t| (p + t.points, r + t.rolls));
        assert_eq!(points, standing.score);
        assert_eq!(rolls, standing.rolls);
    }
    assert!(result.winner.score >= WINNING_SCORE);
    assert!(result.standings[1].score < WINNING_SCORE);
}

/// Test that the same seed replays the same game.
#[test]
fn test_seeded_games_replay() {
    let play = |seed| {
        GameBuilder::new(GameConfig::default().with_seed(seed))
            .computer()
            .unwrap()
            .computer()
            .unwrap()
            .build_seeded()
            .unwrap()
            .play()
            .unwrap()
    };

    assert_eq!(play(99), play(99));
}

/// Test that a controller with no players fails instead of looping.
#[test]
fn test_empty_game() {
    let game = GameController::new(Vec::new(), TurnEngine::new(LoadedDie::default())).unwrap();
    assert_eq!(game.play().unwrap_err(), PigError::EmptyRotation);
}

/// Test that seats numbered out of registration order are rejected.
#[test]
fn test_seat_ids_must_follow_registration_order() {
    let seats = vec![seat(1, "Ada", vec![]), seat(2, "Bob", vec![])];
    let err = GameController::new(seats, TurnEngine::new(LoadedDie::default())).err();
    assert_eq!(
        err,
        Some(PigError::SeatOrder {
            position: 0,
            found: PlayerId::new(1)
        })
    );

    let seats = vec![seat(1, "Ada", vec![]), seat(0, "Bob", vec![])];
    let err = GameController::new(seats, TurnEngine::new(LoadedDie::default())).err();
    assert!(matches!(err, Some(PigError::SeatOrder { position: 0, .. })));
}

/// Test that two seats sharing an id are rejected.
#[test]
fn test_duplicate_seat_ids_rejected() {
    let seats = vec![seat(0, "Ada", vec![]), seat(0, "Bob", vec![])];
    let err = GameController::new(seats, TurnEngine::new(LoadedDie::default())).err();
    assert_eq!(
        err,
        Some(PigError::SeatOrder {
            position: 1,
            found: PlayerId::new(0)
        })
    );
}

/// Test that the observer hears the whole game.
#[test]
fn test_observer_receives_narration() {
    let transcript = Shared::default();
    let game = GameBuilder::new(GameConfig::default())
        .human("Ada", ScriptedPrompt::new(["?", "r", "h", "r"]))
        .unwrap()
        .computer()
        .unwrap()
        .observer(transcript.clone())
        .build(LoadedDie::new([4, 1, 1]), SystemClock)
        .unwrap();

    // Ada holds 4, the computer busts, Ada busts, then the computer's die runs out.
    assert_eq!(game.play().unwrap_err(), PigError::DieExhausted);

    let lines = transcript.0.borrow();
    assert!(lines.contains(&"You entered an invalid action.".to_string()));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("Ouch Computer [Player 2], you rolled a 1")));
    assert_eq!(
        lines.iter().filter(|l| l.contains("it's your turn")).count(),
        4
    );
}

// =============================================================================
// Timed games
// =============================================================================

fn timed(seats: Vec<Seat>, die: LoadedDie, clock: &ManualClock) -> TimedGameController<LoadedDie, ManualClock> {
    let engine = TurnEngine::with_clock(die, clock.clone());
    TimedGameController::new(GameController::new(seats, engine).unwrap(), Duration::from_secs(60))
}

/// Test that 17 unbanked points at the deadline are discarded: 80, not 97.
#[test]
fn test_deadline_discards_partial_turn() {
    let clock = ManualClock::new();
    let die = LoadedDie::new(repeat(6).take(13).chain([2, 6, 6, 5]));
    let mut a_steps = with_hold(rolls(14));
    a_steps.extend(["r", "r", "r", "wait"]);
    let seats = vec![
        Clocked::seat(0, "Ada", &clock, a_steps),
        Clocked::seat(1, "Bob", &clock, vec!["h"]),
    ];

    let result = timed(seats, die, &clock).play().unwrap();

    assert_eq!(result.reason, EndReason::TimeExpired);
    assert_eq!(result.winner.name, "Ada");
    assert_eq!(result.winner.score, 80);
    assert_eq!(result.winner.rolls, 14);

    let last = result.turns.last().unwrap();
    assert_eq!(last.outcome, TurnOutcome::TimeExpired);
    assert_eq!(last.rolls, 3);
    assert_eq!(last.points, 0);
}

/// Test that equal scores at the deadline go to the first registered player.
#[test]
fn test_deadline_tie_goes_to_first_seat() {
    let clock = ManualClock::new();
    let die = LoadedDie::new([5, 5]);
    let seats = vec![
        Clocked::seat(0, "Ada", &clock, vec!["r", "h"]),
        Clocked::seat(1, "Bob", &clock, vec!["r", "late-h"]),
    ];

    let result = timed(seats, die, &clock).play().unwrap();

    assert_eq!(result.reason, EndReason::TimeExpired);
    assert_eq!(result.standings[0].score, 5);
    assert_eq!(result.standings[1].score, 5);
    assert!(result.is_winner(PlayerId::new(0)));
    assert_eq!(render::announcement(&result), "Congratulations Ada, you had the highest score of 5 before time ran out. You won the game!");
}

/// Test that a deadline passing between turns ends the game at the next
/// decision, keeping the held points.
#[test]
fn test_deadline_between_turns() {
    let clock = ManualClock::new();
    let die = LoadedDie::new([3, 4]);
    let seats = vec![
        Clocked::seat(0, "Ada", &clock, vec!["r", "h"]),
        Clocked::seat(1, "Bob", &clock, vec!["r", "late-h"]),
    ];

    let result = timed(seats, die, &clock).play().unwrap();

    assert!(result.is_winner(PlayerId::new(1)));
    assert_eq!(result.winner.score, 4);
    assert_eq!(result.turns_played(), 3);
    assert_eq!(result.turns[2].player, PlayerId::new(0));
    assert_eq!(result.turns[2].outcome, TurnOutcome::TimeExpired);
}

/// Test that a timed game can still be won outright before the deadline.
#[test]
fn test_timed_threshold_win() {
    let clock = ManualClock::new();
    let seats = vec![
        Clocked::seat(0, "Ada", &clock, rolls(17)),
        Clocked::seat(1, "Bob", &clock, vec![]),
    ];

    let result = timed(seats, LoadedDie::new([6; 17]), &clock).play().unwrap();

    assert_eq!(result.reason, EndReason::ThresholdReached);
    assert_eq!(result.winner.score, 102);
    assert_eq!(render::announcement(&result), "Congratulations Ada, you rolled a 6 and your total score is 102. You won the game!");
}

/// Test that the builder produces a timed game from the config.
#[test]
fn test_builder_timed_game() {
    let clock = ManualClock::new();
    let game = GameBuilder::new(GameConfig::default().with_timed(true))
        .seat("Ada", Identity::Human, Clocked {
            clock: clock.clone(),
            steps: VecDeque::from(vec!["wait"]),
        })
        .unwrap()
        .computer()
        .unwrap()
        .build(LoadedDie::default(), clock.clone())
        .unwrap();
    assert!(matches!(game, Game::Timed(_)));

    let result = game.play().unwrap();

    assert_eq!(result.reason, EndReason::TimeExpired);
    assert!(result.is_winner(PlayerId::new(0)));
    assert_eq!(result.winner.score, 0);
}
