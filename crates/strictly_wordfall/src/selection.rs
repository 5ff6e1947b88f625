//! Column-exclusive selection tracking.
//!
//! The player picks at most one cell per column. Entries stay sorted by
//! column so the candidate word always reads left to right.

use crate::types::{Cell, Tile};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A selected cell and the tile it held when picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionEntry {
    /// Row of the selected cell.
    pub row: usize,
    /// Column of the selected cell.
    pub col: usize,
    /// Tile shown in the cell.
    pub tile: Tile,
}

impl SelectionEntry {
    /// Creates a new entry.
    pub fn new(row: usize, col: usize, tile: Tile) -> Self {
        Self { row, col, tile }
    }

    /// Coordinates of the entry.
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

/// What a toggle changed, for highlight bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// A cell became selected, possibly displacing the previous pick in its column.
    Selected {
        /// The new entry.
        entry: SelectionEntry,
        /// Entry removed from the same column, if any.
        replaced: Option<SelectionEntry>,
    },
    /// An already selected cell was deselected; its column display should be cleared.
    Deselected(SelectionEntry),
}

/// Current picks, at most one per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTracker {
    width: usize,
    pub(crate) entries: Vec<SelectionEntry>,
    generation: u64,
}

impl SelectionTracker {
    /// Creates an empty tracker for words of `width` letters.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            entries: Vec::new(),
            generation: 0,
        }
    }

    /// Toggles the cell at `(row, col)`.
    ///
    /// Selecting a cell in a column that already has a pick replaces that
    /// pick. Returns `None` (no-op) for columns outside the word width.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, row: usize, col: usize, tile: Tile) -> Option<Toggle> {
        if col >= self.width {
            debug!(col, width = self.width, "Column outside word width");
            return None;
        }
        self.generation = self.generation.wrapping_add(1);

        if let Some(index) = self.entries.iter().position(|e| e.row == row && e.col == col) {
            return Some(Toggle::Deselected(self.entries.remove(index)));
        }

        let replaced = self
            .entries
            .iter()
            .position(|e| e.col == col)
            .map(|index| self.entries.remove(index));

        let entry = SelectionEntry::new(row, col, tile);
        let at = self.entries.partition_point(|e| e.col < col);
        self.entries.insert(at, entry);

        Some(Toggle::Selected { entry, replaced })
    }

    /// Empties the selection, returning the entries that were held.
    pub fn clear(&mut self) -> Vec<SelectionEntry> {
        self.generation = self.generation.wrapping_add(1);
        std::mem::take(&mut self.entries)
    }

    /// Entries in column order.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Number of selected cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Word width this tracker was built for.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Counter bumped on every mutation; identifies a selection snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if `cell` is selected.
    pub fn contains(&self, cell: Cell) -> bool {
        self.entries.iter().any(|e| e.cell() == cell)
    }

    /// The pick in column `col`, if any.
    pub fn in_column(&self, col: usize) -> Option<&SelectionEntry> {
        self.entries.iter().find(|e| e.col == col)
    }

    /// Columns that hold a pick, left to right.
    pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.col)
    }

    /// Returns true once every column holds a pick.
    pub fn is_complete(&self) -> bool {
        self.width > 0 && self.entries.len() == self.width
    }

    /// Tiles in column order; only defined for a complete selection.
    pub fn assembled(&self) -> Option<Vec<Tile>> {
        self.is_complete()
            .then(|| self.entries.iter().map(|e| e.tile).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Tile {
        Tile::Letter(c)
    }

    #[test]
    fn test_select_and_deselect() {
        let mut tracker = SelectionTracker::new(5);
        let toggle = tracker.toggle(1, 2, letter('A'));
        assert!(matches!(toggle, Some(Toggle::Selected { replaced: None, .. })));
        assert!(tracker.contains(Cell::new(1, 2)));

        let toggle = tracker.toggle(1, 2, letter('A'));
        assert_eq!(toggle, Some(Toggle::Deselected(SelectionEntry::new(1, 2, letter('A')))));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_column_replacement() {
        let mut tracker = SelectionTracker::new(5);
        tracker.toggle(0, 2, letter('A'));
        let toggle = tracker.toggle(3, 2, letter('B'));

        assert_eq!(
            toggle,
            Some(Toggle::Selected {
                entry: SelectionEntry::new(3, 2, letter('B')),
                replaced: Some(SelectionEntry::new(0, 2, letter('A'))),
            })
        );
        assert_eq!(tracker.entries(), &[SelectionEntry::new(3, 2, letter('B'))]);
    }

    #[test]
    fn test_entries_sorted_by_column() {
        let mut tracker = SelectionTracker::new(3);
        tracker.toggle(0, 2, letter('T'));
        tracker.toggle(4, 0, letter('C'));
        tracker.toggle(1, 1, letter('A'));

        assert_eq!(tracker.columns().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(tracker.is_complete());
        assert_eq!(
            tracker.assembled(),
            Some(vec![letter('C'), letter('A'), letter('T')])
        );
    }

    #[test]
    fn test_assembled_requires_completion() {
        let mut tracker = SelectionTracker::new(3);
        tracker.toggle(0, 0, letter('C'));
        assert_eq!(tracker.assembled(), None);
    }

    #[test]
    fn test_out_of_width_column_ignored() {
        let mut tracker = SelectionTracker::new(3);
        assert_eq!(tracker.toggle(0, 3, letter('X')), None);
        assert!(tracker.is_empty());
        assert_eq!(tracker.generation(), 0);
    }

    #[test]
    fn test_clear_bumps_generation() {
        let mut tracker = SelectionTracker::new(3);
        tracker.toggle(0, 0, letter('C'));
        let before = tracker.generation();
        let cleared = tracker.clear();
        assert_eq!(cleared.len(), 1);
        assert!(tracker.is_empty());
        assert!(tracker.generation() > before);
    }
}
