//! Grid generation from word batches.
//!
//! Letters are shuffled per column, never per row: each input word ends up
//! spread across different rows, yet stays formable by picking one tile in
//! every column.

use crate::config::EngineConfig;
use crate::types::{Grid, Row, Tile};
use crate::word_list::WordList;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Builds letter grids from batches of words.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGenerator {
    word_length: usize,
    wildcard_pct: f64,
}

impl GridGenerator {
    /// Creates a generator. Out-of-range probabilities are clamped to `0..=1`.
    pub fn new(word_length: usize, wildcard_pct: f64) -> Self {
        let wildcard_pct = if wildcard_pct.is_finite() {
            wildcard_pct.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            word_length,
            wildcard_pct,
        }
    }

    /// Creates a generator matching `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(*config.word_length(), *config.wildcard_pct())
    }

    /// Columns in every generated row.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Wildcard probability per cell.
    pub fn wildcard_pct(&self) -> f64 {
        self.wildcard_pct
    }

    /// Generates one row per word.
    ///
    /// For each column the words' letters are shuffled uniformly and dealt
    /// to the rows in order. With `wildcard_enabled`, each dealt cell
    /// independently becomes a wildcard with probability `wildcard_pct`.
    /// Words too short for a column contribute [`Tile::Empty`].
    #[instrument(skip(self, words, rng), fields(rows = words.len()))]
    pub fn generate<S, R>(&self, words: &[S], wildcard_enabled: bool, rng: &mut R) -> Grid
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut grid = Grid::blank(words.len(), self.word_length);

        for col in 0..self.word_length {
            let mut letters: Vec<Tile> = words
                .iter()
                .map(|w| w.as_ref().chars().nth(col).map_or(Tile::Empty, Tile::from_char))
                .collect();
            letters.shuffle(rng);

            for (row, letter) in letters.into_iter().enumerate() {
                let tile = if wildcard_enabled && rng.random_bool(self.wildcard_pct) {
                    Tile::Wildcard
                } else {
                    letter
                };
                grid.set(crate::types::Cell::new(row, col), tile);
            }
        }

        debug!(rows = grid.height(), "Generated grid");
        grid
    }

    /// All-empty grid shown before a game starts.
    pub fn placeholder(&self, rows: usize) -> Grid {
        Grid::blank(rows, self.word_length)
    }

    /// Generates `count` rows from a fresh random batch of `list` words.
    #[instrument(skip(self, list, rng))]
    pub fn random_rows<R: Rng + ?Sized>(
        &self,
        list: &WordList,
        count: usize,
        rng: &mut R,
    ) -> Vec<Row> {
        let words = list.choose_batch(count, rng);
        debug!(?words, "Selected filler words");
        self.generate(&words, true, rng).into_rows()
    }
}
