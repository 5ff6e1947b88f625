//! Application configuration loaded from TOML.

use crate::word_source::{WordListError, bundled_word_list, load_word_list};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_wordfall::{EngineConfig, WordList};
use tracing::{debug, info, instrument};

/// Configuration for a wordfall run.
///
/// ```toml
/// word_list = "words.txt"
/// seed = 42
///
/// [engine]
/// visible_rows = 6
/// word_length = 5
/// wildcard_pct = 0.05
/// ```
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Engine parameters.
    #[serde(default)]
    engine: EngineConfig,

    /// Newline-separated word list; the bundled list is used when absent.
    #[serde(default)]
    word_list: Option<PathBuf>,

    /// Fixed seed for reproducible grids.
    #[serde(default)]
    seed: Option<u64>,
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config
            .engine
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid engine settings: {}", e)))?;

        info!(
            visible_rows = config.engine.visible_rows(),
            word_length = config.engine.word_length(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, word_list: Option<PathBuf>, seed: Option<u64>) -> Self {
        if word_list.is_some() {
            self.word_list = word_list;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Loads the configured word list for the configured word length.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if the list cannot be read or has no usable words.
    pub fn load_words(&self) -> Result<WordList, WordListError> {
        let word_length = *self.engine.word_length();
        match &self.word_list {
            Some(path) => load_word_list(path, word_length),
            None => bundled_word_list(word_length),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
