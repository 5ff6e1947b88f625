//! Wordfall - terminal driver for the strictly_wordfall engine
//!
//! Loads configuration and word lists, then runs a game either
//! interactively on a line console or headless with an auto-player.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Word source**: newline-separated word lists (a five-letter list is bundled)
//! - **Drivers**: [`AutoPlayer`] and [`Console`] over any reader and writer
//!
//! # Example
//!
//! ```no_run
//! use strictly_wordfall::SessionSetup;
//! use wordfall::{AppConfig, AutoPlayer};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load(None)?;
//! let words = config.load_words()?;
//! let session = SessionSetup::new(config.engine().clone(), words)?.start()?;
//!
//! let finished = AutoPlayer::new(10).run(session)?;
//! println!("{:?}", finished.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod driver;
mod word_source;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Word lists
pub use word_source::{
    BUNDLED_WORDS, WordListError, bundled_word_list, load_word_list, parse_word_list,
    word_list_from_str,
};

// Crate-level exports - Drivers
pub use driver::{AutoPlayer, Console, ConsoleCommand, render};
