//! Pig
//!
//! Play Pig in the terminal against a friend or the computer.
//!
//! Options: --player1 <human|computer>, --player2 <human|computer>, --timed,
//! --seed <N>, --verbose

use clap::Parser;
use dialoguer::Input;
use pig_dice::core::{GameConfig, PigError, PlayerId, PLAYER_COUNT};
use pig_dice::games::{GameBuilder, PlayerKind};
use pig_dice::policy::TerminalPrompt;
use pig_dice::render;
use pig_dice::rules::{GameEvent, GameObserver};

#[derive(Parser)]
#[command(author, version, about = "The dice game Pig for two players", long_about = None)]
struct Args {
    #[arg(long, help = "Player 1 type, computer or human.")]
    player1: Option<String>,
    #[arg(long, help = "Player 2 type, computer or human.")]
    player2: Option<String>,
    #[arg(long, help = "Whichever player has the most points after one minute wins the game.")]
    timed: bool,
    #[arg(long, help = "Seed the die to replay a game.")]
    seed: Option<u64>,
    #[arg(long, short, help = "Log every roll and decision to stderr.")]
    verbose: bool,
}

/// Prints every game event as it happens.
struct Console;

impl GameObserver for Console {
    fn notify(&mut self, event: &GameEvent<'_>) {
        println!("{}", render::narrate(event));
    }
}

fn main() {
    let args = Args::parse();
    log(args.verbose);
    if let Err(err) = run(args) {
        log::error!("{}", err);
        println!("{}", err);
    }
}

fn log(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(err) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logging disabled: {}", err);
    }
}

fn run(args: Args) -> Result<(), PigError> {
    let (Some(player1), Some(player2)) = (args.player1, args.player2) else {
        println!(
            "The --player1 and --player2 arguments are required. Valid types are computer or human. Please try again."
        );
        return Ok(());
    };

    let mut kinds = Vec::with_capacity(PLAYER_COUNT);
    for (flag, value) in [("player1", player1), ("player2", player2)] {
        match value.parse::<PlayerKind>() {
            Ok(kind) => kinds.push(kind),
            Err(err) => {
                log::debug!("{}", err);
                println!(
                    "You entered an invalid player type for {}. Valid types are computer or human. Please try again.",
                    flag
                );
                return Ok(());
            }
        }
    }

    let config = GameConfig {
        seed: args.seed,
        ..GameConfig::default()
    }
    .with_timed(args.timed);

    let mut builder = GameBuilder::new(config);
    for (i, kind) in kinds.into_iter().enumerate() {
        builder = match kind {
            PlayerKind::Computer => builder.computer()?,
            PlayerKind::Human => builder.human(&ask_name(PlayerId::new(i as u8))?, TerminalPrompt)?,
        };
    }

    let result = builder.observer(Console).build_seeded()?.play()?;

    println!("\n\n{}", render::announcement(&result));
    println!("\n{}", render::leaderboard(&result));
    Ok(())
}

fn ask_name(id: PlayerId) -> Result<String, PigError> {
    Input::<String>::new()
        .with_prompt(format!("What is {}'s name?", id))
        .validate_with(|name: &String| -> Result<(), &str> {
            if name.trim().is_empty() {
                Err("Enter a NAME")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| PigError::Input(e.to_string()))
}
