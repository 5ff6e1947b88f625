//! Engine error types.

use crate::types::Cell;

/// Error raised by engine operations.
///
/// Word rejection is not an error; it is reported through
/// [`Outcome::Rejected`](crate::Outcome::Rejected).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Gravity tried to draw from a reservoir that could not be refilled.
    #[display("Filler reservoir is empty")]
    EmptyReservoir,

    /// The word list holds no usable words.
    #[display("Word list has no words of length {}", _0)]
    EmptyWordList(usize),

    /// The configuration is unusable.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfig(String),

    /// A grid row has the wrong number of tiles.
    #[display("Row {row} has {found} tiles, expected {expected}")]
    RaggedGrid {
        /// Offending row.
        row: usize,
        /// Width found.
        found: usize,
        /// Width expected.
        expected: usize,
    },

    /// A toggle addressed a cell outside the visible grid.
    #[display("Cell {} is outside the visible grid", _0)]
    OutOfBounds(Cell),

    /// A complete selection is awaiting validation.
    #[display("Selection is locked while a word awaits validation")]
    SelectionLocked,

    /// The selection is not complete yet.
    #[display("Selection is not complete")]
    IncompleteSelection,

    /// A pending word snapshot no longer matches the live selection.
    #[display("Pending word no longer matches the current selection")]
    StaleSubmission,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
