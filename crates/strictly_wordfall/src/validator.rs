//! Candidate word validation, including wildcard resolution.

use crate::types::{Tile, spell};
use crate::word_list::WordList;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of validating a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The candidate resolved to this list word.
    Accepted(String),
    /// No list word fits the candidate.
    Rejected,
}

impl Outcome {
    /// The accepted word, if any.
    pub fn word(&self) -> Option<&str> {
        match self {
            Outcome::Accepted(word) => Some(word.as_str()),
            Outcome::Rejected => None,
        }
    }

    /// Returns true for [`Outcome::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

/// Checks assembled candidates against a [`WordList`].
pub struct WordValidator;

impl WordValidator {
    /// Validates `candidate` (tiles in column order).
    ///
    /// Without wildcards the candidate must be a list word. With wildcards
    /// the first list word (in list order) that agrees at every letter
    /// position is accepted, even when several words would fit. Empty tiles
    /// and wrong lengths are always rejected.
    #[instrument(skip(candidate, list), fields(candidate = %spell(candidate)))]
    pub fn validate(candidate: &[Tile], list: &WordList) -> Outcome {
        if candidate.len() != list.word_length() || candidate.contains(&Tile::Empty) {
            debug!("Candidate malformed");
            return Outcome::Rejected;
        }

        let outcome = if candidate.iter().any(|t| t.is_wildcard()) {
            list.first_match(candidate)
                .map_or(Outcome::Rejected, |word| Outcome::Accepted(word.to_string()))
        } else {
            let word = spell(candidate);
            if list.contains(&word) {
                Outcome::Accepted(word)
            } else {
                Outcome::Rejected
            }
        };

        debug!(?outcome, "Candidate validated");
        outcome
    }
}
