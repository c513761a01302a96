//! Text for the console: per-turn narration, the winner announcement and
//! the leaderboard table.
//!
//! Everything here returns `String`s; printing is left to the caller.

use crate::games::{EndReason, GameResult};
use crate::rules::GameEvent;

const NAME_WIDTH: usize = 32;
const NUM_WIDTH: usize = 10;

/// The line to show for a game event.
#[must_use]
pub fn narrate(event: &GameEvent<'_>) -> String {
    match event {
        GameEvent::TurnStarted { name, score } => {
            format!("\n{}, it's your turn. Your current score is {}", name, score)
        }
        GameEvent::TimeRemaining { left } => {
            format!("There are {} seconds left in this game.", left.as_secs_f64().round())
        }
        GameEvent::InvalidAction { .. } => "You entered an invalid action.".to_string(),
        GameEvent::Rolled {
            name,
            roll,
            turn_score,
            total,
        } => format!(
            "Nice {}! You rolled a {}. Your current score for this turn is {}. Your total score is {}",
            name, roll, turn_score, total
        ),
        GameEvent::Busted { name, roll, score } => format!(
            "Ouch {}, you rolled a {} and lost all points you accumulated during this turn. \
             Your score for this turn is 0. Your total score is {}.",
            name, roll, score
        ),
        GameEvent::Held {
            name,
            turn_score,
            score,
        } => format!(
            "{}, you held. Your score for this turn is {}. Your total score is {}.",
            name, turn_score, score
        ),
        GameEvent::ThresholdReached { name, roll, score } => {
            format!("{}, you rolled a {} and reached {}.", name, roll, score)
        }
        GameEvent::TimeExpired { name, discarded } => format!(
            "Time is up! {}, the {} points from your unfinished turn do not count.",
            name, discarded
        ),
    }
}

/// Congratulate the winner, phrased by how the game ended.
#[must_use]
pub fn announcement(result: &GameResult) -> String {
    let winner = &result.winner;
    let winning_roll = result.turns.last().and_then(|turn| turn.last_roll);
    match (result.reason, winning_roll) {
        (EndReason::ThresholdReached, Some(roll)) => format!(
            "Congratulations {}, you rolled a {} and your total score is {}. You won the game!",
            winner.name, roll, winner.score
        ),
        (EndReason::ThresholdReached, None) => format!(
            "Congratulations {}, your total score is {}. You won the game!",
            winner.name, winner.score
        ),
        (EndReason::TimeExpired, _) => format!(
            "Congratulations {}, you had the highest score of {} before time ran out. You won the game!",
            winner.name, winner.score
        ),
    }
}

/// Bordered Player / Score / # of Rolls table, highest score first.
#[must_use]
pub fn leaderboard(result: &GameResult) -> String {
    let mut out = String::from("LEADERBOARD\n\n");
    let border = format!(
        "+-{}-+-{}-+-{}-+\n",
        "-".repeat(NAME_WIDTH),
        "-".repeat(NUM_WIDTH),
        "-".repeat(NUM_WIDTH)
    );
    let separator = format!(
        "|-{}-+-{}-+-{}-|\n",
        "-".repeat(NAME_WIDTH),
        "-".repeat(NUM_WIDTH),
        "-".repeat(NUM_WIDTH)
    );

    out.push_str(&border);
    out.push_str(&row("Player", "Score", "# of Rolls"));
    for standing in &result.standings {
        out.push_str(&separator);
        out.push_str(&row(
            &standing.name,
            &standing.score.to_string(),
            &standing.rolls.to_string(),
        ));
    }
    out.push_str(&border);
    out
}

fn row(name: &str, score: &str, rolls: &str) -> String {
    format!(
        "| {:<nw$} | {:>w$} | {:>w$} |\n",
        name,
        score,
        rolls,
        nw = NAME_WIDTH,
        w = NUM_WIDTH
    )
}
