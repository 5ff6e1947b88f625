//! Engine configuration.

use crate::error::EngineError;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Parameters shared by every grid variant (rows, word length, wildcards, refill).
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Rows rendered and selectable by the player.
    #[serde(default = "default_visible_rows")]
    visible_rows: usize,

    /// Letters per word, and therefore columns per row.
    #[serde(default = "default_word_length")]
    word_length: usize,

    /// Probability that a generated cell becomes a wildcard.
    #[serde(default = "default_wildcard_pct")]
    wildcard_pct: f64,

    /// Reservoir is refilled once it holds fewer rows than this.
    #[serde(default)]
    #[getter(skip)]
    #[setters(strip_option)]
    filler_low_water_mark: Option<usize>,

    /// Rows generated per refill batch.
    #[serde(default)]
    #[getter(skip)]
    #[setters(strip_option)]
    filler_batch_rows: Option<usize>,
}

fn default_visible_rows() -> usize {
    6
}

fn default_word_length() -> usize {
    5
}

fn default_wildcard_pct() -> f64 {
    0.05
}

impl EngineConfig {
    /// Creates a configuration with the given dimensions and default refill policy.
    #[instrument]
    pub fn new(visible_rows: usize, word_length: usize) -> Self {
        Self {
            visible_rows,
            word_length,
            ..Self::default()
        }
    }

    /// Low-water mark for the filler reservoir (defaults to one row).
    pub fn low_water_mark(&self) -> usize {
        self.filler_low_water_mark.unwrap_or(1)
    }

    /// Rows per refill batch (defaults to one screenful).
    pub fn batch_rows(&self) -> usize {
        self.filler_batch_rows.unwrap_or(self.visible_rows)
    }

    /// Checks that the configuration can drive a session.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] describing the first bad field.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.visible_rows == 0 {
            return Err(EngineError::InvalidConfig("visible_rows must be at least 1".into()));
        }
        if self.word_length == 0 {
            return Err(EngineError::InvalidConfig("word_length must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.wildcard_pct) {
            return Err(EngineError::InvalidConfig(format!(
                "wildcard_pct must be within 0..=1, got {}",
                self.wildcard_pct
            )));
        }
        if self.low_water_mark() == 0 {
            return Err(EngineError::InvalidConfig(
                "filler_low_water_mark must be at least 1".into(),
            ));
        }
        if self.batch_rows() == 0 {
            return Err(EngineError::InvalidConfig("filler_batch_rows must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            visible_rows: default_visible_rows(),
            word_length: default_word_length(),
            wildcard_pct: default_wildcard_pct(),
            filler_low_water_mark: None,
            filler_batch_rows: None,
        }
    }
}
