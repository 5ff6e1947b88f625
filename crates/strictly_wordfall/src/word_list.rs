//! The source dictionary: an ordered, case-normalized list of fixed-length words.

use crate::types::Tile;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// Ordered set of uppercase words, all of one length.
///
/// Iteration order is the order the words were supplied in. Wildcard
/// resolution depends on it, so it is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    word_length: usize,
    words: Vec<String>,
    index: HashSet<String>,
    skipped: usize,
}

impl WordList {
    /// Builds a word list, keeping words of exactly `word_length` ASCII letters.
    ///
    /// Words are trimmed and uppercased. Malformed entries (wrong length,
    /// non-letters) are skipped and counted; duplicates keep their first
    /// position.
    #[instrument(skip(words))]
    pub fn new<I, S>(word_length: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self {
            word_length,
            ..Self::default()
        };

        for raw in words {
            let word = raw.as_ref().trim().to_ascii_uppercase();
            if word.is_empty() {
                continue;
            }
            let well_formed = word.chars().all(|c| c.is_ascii_uppercase());
            if word.chars().count() != word_length || !well_formed {
                debug!(word = %word, "Skipping malformed word");
                list.skipped += 1;
                continue;
            }
            if list.index.insert(word.clone()) {
                list.words.push(word);
            }
        }

        if list.skipped > 0 {
            warn!(skipped = list.skipped, "Skipped malformed words");
        }
        debug!(words = list.words.len(), "Word list built");
        list
    }

    /// Length every word in the list has.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of malformed entries dropped during construction.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Words in list order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Membership test; `word` must already be uppercase.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// First word (in list order) matching `pattern`.
    ///
    /// Letters must match exactly, wildcards match any letter and empty
    /// tiles match nothing.
    #[instrument(skip(self, pattern))]
    pub fn first_match(&self, pattern: &[Tile]) -> Option<&str> {
        self.words
            .iter()
            .find(|word| matches_pattern(word, pattern))
            .map(String::as_str)
    }

    /// Picks `count` words uniformly at random, with replacement.
    pub fn choose_batch<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&str> {
        if self.words.is_empty() {
            return Vec::new();
        }
        (0..count)
            .map(|_| self.words[rng.random_range(0..self.words.len())].as_str())
            .collect()
    }
}

/// Returns true if `word` fits `pattern` position by position.
pub fn matches_pattern(word: &str, pattern: &[Tile]) -> bool {
    word.chars().count() == pattern.len()
        && word.chars().zip(pattern).all(|(c, tile)| tile.matches(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_normalizes_and_skips_malformed() {
        let list = WordList::new(5, ["crane", " BRAVE ", "toolong", "ab1de", "", "CRANE"]);
        assert_eq!(list.words(), &["CRANE".to_string(), "BRAVE".to_string()]);
        assert_eq!(list.skipped(), 2);
        assert!(list.contains("BRAVE"));
        assert!(!list.contains("brave"));
    }

    #[test]
    fn test_first_match_uses_list_order() {
        let list = WordList::new(5, ["STONE", "CRANE", "BRANE"]);
        let pattern = [
            Tile::Wildcard,
            Tile::Letter('R'),
            Tile::Letter('A'),
            Tile::Letter('N'),
            Tile::Letter('E'),
        ];
        assert_eq!(list.first_match(&pattern), Some("CRANE"));
    }

    #[test]
    fn test_empty_tile_never_matches() {
        let list = WordList::new(2, ["AB"]);
        assert_eq!(list.first_match(&[Tile::Empty, Tile::Letter('B')]), None);
    }

    #[test]
    fn test_choose_batch() {
        let list = WordList::new(3, ["CAT", "DOG"]);
        let mut rng = StdRng::seed_from_u64(7);
        let batch = list.choose_batch(10, &mut rng);
        assert_eq!(batch.len(), 10);
        assert!(batch.iter().all(|w| list.contains(w)));
        assert!(WordList::new(3, Vec::<String>::new()).choose_batch(3, &mut rng).is_empty());
    }
}
