//! Formable-word scanning: the game-over check and hint source.

use crate::types::{Cell, Grid, Tile};
use crate::word_list::WordList;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of a formable-word scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formable {
    /// Number of formable words found (bounded by the scan limit).
    pub count: usize,
    /// The formable words, in list order.
    pub sample: Vec<String>,
}

impl Formable {
    /// Returns true when no word can be formed.
    pub fn is_exhausted(&self) -> bool {
        self.count == 0
    }
}

/// Per-column letter availability among the visible rows.
struct ColumnIndex {
    letters: Vec<[bool; 26]>,
    wildcard: Vec<bool>,
}

impl ColumnIndex {
    fn build(grid: &Grid, visible_rows: usize) -> Self {
        let width = grid.width();
        let mut letters = vec![[false; 26]; width];
        let mut wildcard = vec![false; width];

        for col in 0..width {
            for tile in grid.column(col, visible_rows) {
                match tile {
                    Tile::Letter(c) if c.is_ascii_uppercase() => {
                        letters[col][(c as u8 - b'A') as usize] = true;
                    }
                    Tile::Wildcard => wildcard[col] = true,
                    _ => {}
                }
            }
        }

        Self { letters, wildcard }
    }

    fn admits(&self, word: &str) -> bool {
        word.chars().count() == self.wildcard.len()
            && word.chars().enumerate().all(|(col, c)| {
                self.wildcard[col]
                    || (c.is_ascii_uppercase() && self.letters[col][(c as u8 - b'A') as usize])
            })
    }
}

/// Scans a word list against the visible grid.
pub struct ValidWordCounter;

impl ValidWordCounter {
    /// Returns true if every column has a visible cell equal to the word's
    /// letter, or a wildcard.
    pub fn is_formable(grid: &Grid, word: &str, visible_rows: usize) -> bool {
        ColumnIndex::build(grid, visible_rows).admits(word)
    }

    /// Counts formable words, stopping after `limit` matches (`0` scans the
    /// whole list).
    ///
    /// A count of zero means no correct word can be selected any more.
    #[instrument(skip(grid, list), fields(words = list.len()))]
    pub fn count_formable(
        grid: &Grid,
        list: &WordList,
        visible_rows: usize,
        limit: usize,
    ) -> Formable {
        let index = ColumnIndex::build(grid, visible_rows);
        let mut formable = Formable::default();

        for word in list.words() {
            if index.admits(word) {
                formable.count += 1;
                formable.sample.push(word.clone());
                if limit > 0 && formable.count >= limit {
                    break;
                }
            }
        }

        debug!(count = formable.count, "Formable words counted");
        formable
    }

    /// Finds one visible cell per column spelling `word`.
    ///
    /// Exact letters are preferred over wildcards, and lower rows over
    /// higher ones. Returns `None` if the word is not formable.
    pub fn locate(grid: &Grid, word: &str, visible_rows: usize) -> Option<Vec<Cell>> {
        if word.chars().count() != grid.width() {
            return None;
        }
        let rows = visible_rows.min(grid.height());

        word.chars()
            .enumerate()
            .map(|(col, c)| {
                let pick = |want: fn(Tile, char) -> bool| {
                    (0..rows)
                        .rev()
                        .map(|row| Cell::new(row, col))
                        .find(|cell| grid.get(*cell).is_some_and(|t| want(t, c)))
                };
                pick(|t: Tile, c: char| t == Tile::Letter(c))
                    .or_else(|| pick(|t: Tile, _: char| t.is_wildcard()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formable_with_letters() {
        let grid = Grid::parse(&["CAT", "DOG"]).unwrap();
        assert!(ValidWordCounter::is_formable(&grid, "COT", 2));
        assert!(ValidWordCounter::is_formable(&grid, "DAG", 2));
        assert!(!ValidWordCounter::is_formable(&grid, "CUT", 2));
    }

    #[test]
    fn test_wildcard_covers_column() {
        let grid = Grid::parse(&["C*T", "DOG"]).unwrap();
        assert!(ValidWordCounter::is_formable(&grid, "CUT", 2));
    }

    #[test]
    fn test_hidden_rows_do_not_count() {
        let grid = Grid::parse(&["CAT", "DOG"]).unwrap();
        assert!(!ValidWordCounter::is_formable(&grid, "DOG", 1));
    }

    #[test]
    fn test_count_and_limit() {
        let grid = Grid::parse(&["CAT", "DOG"]).unwrap();
        let list = WordList::new(3, ["CAT", "COG", "DOT", "ZZZ"]);

        let all = ValidWordCounter::count_formable(&grid, &list, 2, 0);
        assert_eq!(all.count, 3);
        assert_eq!(all.sample, vec!["CAT", "COG", "DOT"]);

        let one = ValidWordCounter::count_formable(&grid, &list, 2, 1);
        assert_eq!(one.count, 1);
        assert_eq!(one.sample, vec!["CAT"]);
    }

    #[test]
    fn test_disjoint_columns_exhausted() {
        let grid = Grid::parse(&["XYZ", "QJK"]).unwrap();
        let list = WordList::new(3, ["CAT", "DOG"]);
        assert!(ValidWordCounter::count_formable(&grid, &list, 2, 0).is_exhausted());
    }

    #[test]
    fn test_empty_tiles_never_formable() {
        let grid = Grid::parse(&["..."]).unwrap();
        let list = WordList::new(3, ["CAT"]);
        assert_eq!(ValidWordCounter::count_formable(&grid, &list, 1, 0).count, 0);
    }

    #[test]
    fn test_locate_prefers_letters() {
        let grid = Grid::parse(&["C*T", "DAG"]).unwrap();
        let cells = ValidWordCounter::locate(&grid, "CAT", 2).unwrap();
        assert_eq!(cells, vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(0, 2)]);

        let cells = ValidWordCounter::locate(&grid, "CUT", 2).unwrap();
        assert_eq!(cells[1], Cell::new(0, 1));
        assert_eq!(ValidWordCounter::locate(&grid, "ZZZ", 2), None);
    }
}
