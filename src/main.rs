//! Wordfall - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use strictly_wordfall::{SessionFinished, SessionInProgress, SessionSetup};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use wordfall::{AppConfig, AutoPlayer, Console};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game } => run_play(&game),
        Command::Auto {
            game,
            max_words,
            json,
        } => run_auto(&game, max_words, json),
    }
}

/// Loads config and words, then starts a session.
#[instrument(skip_all)]
fn start_session(game: &GameArgs) -> Result<SessionInProgress> {
    let config = AppConfig::load(game.config.as_deref())?
        .with_overrides(game.words.clone(), game.seed);
    let words = config.load_words()?;

    let setup = SessionSetup::new(config.engine().clone(), words)?;
    let session = match config.seed() {
        Some(seed) => setup.start_seeded(*seed)?,
        None => setup.start()?,
    };
    info!(initial = ?session.initial_words(), "Game ready");
    Ok(session)
}

/// Run the interactive console
fn run_play(game: &GameArgs) -> Result<()> {
    let session = start_session(game)?;
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let finished = console.run(session)?;
    print_summary(&finished, false)
}

/// Run the auto-player
#[instrument(skip(game))]
fn run_auto(game: &GameArgs, max_words: usize, json: bool) -> Result<()> {
    let session = start_session(game)?;
    let finished = AutoPlayer::new(max_words).run(session)?;
    print_summary(&finished, json)
}

fn print_summary(finished: &SessionFinished, json: bool) -> Result<()> {
    let summary = finished.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", finished.grid().display());
    println!("Game over: {}", summary.reason.label());
    println!(
        "Words ({}): {}",
        summary.completed_words.len(),
        summary.completed_words.join(", ")
    );
    println!("Rejected attempts: {}", summary.rejected_attempts);
    Ok(())
}
