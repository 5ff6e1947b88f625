//! Events surfaced to rendering collaborators.
//!
//! Engine operations never touch a display. They return these events and
//! the presentation layer decides how (and when) to show them.

use crate::types::{Cell, Grid};
use serde::{Deserialize, Serialize};

/// Something the renderer should reflect.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumDiscriminants,
)]
#[strum_discriminants(name(GameEventKind), derive(strum::Display, Hash))]
pub enum GameEvent {
    /// A cell became highlighted.
    CellSelected {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
    },
    /// A cell lost its highlight; the in-progress letter for its column should be cleared.
    CellDeselected {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
    },
    /// Every column holds a pick; the candidate awaits validation.
    SelectionComplete {
        /// Candidate spelled left to right (`*` for wildcards).
        candidate: String,
    },
    /// The candidate resolved to a list word.
    WordAccepted {
        /// The resolved word.
        word: String,
    },
    /// The candidate matched no list word.
    WordRejected {
        /// Candidate spelled left to right.
        candidate: String,
    },
    /// The grid changed after gravity.
    GridMutated {
        /// The new visible grid.
        grid: Grid,
        /// Cells whose tile changed.
        changed: Vec<Cell>,
    },
    /// No list word can be formed from the visible grid.
    NoWordsRemain,
    /// An external timer ended the game.
    TimeExpired,
}

impl GameEvent {
    /// Event for a newly highlighted cell.
    pub fn selected(cell: Cell) -> Self {
        GameEvent::CellSelected {
            row: cell.row,
            col: cell.col,
        }
    }

    /// Event for a cleared highlight.
    pub fn deselected(cell: Cell) -> Self {
        GameEvent::CellDeselected {
            row: cell.row,
            col: cell.col,
        }
    }

    /// Discriminant of the event, for filtering.
    pub fn kind(&self) -> GameEventKind {
        GameEventKind::from(self)
    }
}
