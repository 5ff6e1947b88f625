//! Command-line interface for wordfall.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Wordfall - falling-letter word puzzle
#[derive(Parser, Debug)]
#[command(name = "wordfall")]
#[command(about = "Spell words by picking one letter per column", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every game mode
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Newline-separated word list (overrides the config file)
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Seed for reproducible grids (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal
    Play {
        /// Game options
        #[command(flatten)]
        game: GameArgs,
    },

    /// Let the auto-player solve words until none remain
    Auto {
        /// Game options
        #[command(flatten)]
        game: GameArgs,

        /// Stop after this many accepted words
        #[arg(long, default_value = "50")]
        max_words: usize,

        /// Print the final summary as JSON
        #[arg(long)]
        json: bool,
    },
}
