//! Contract-based checks for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Toggle preconditions decide whether a pick is a no-op;
//! postconditions run in debug builds.

use crate::error::EngineError;
use crate::invariants::{InvariantSet, WordfallInvariants};
use crate::session::SessionInProgress;
use crate::types::{Cell, Grid};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

/// A player's pick: the cell they clicked or keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    /// Picked cell.
    pub cell: Cell,
}

impl Pick {
    /// Creates a pick at `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            cell: Cell::new(row, col),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Pick Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the picked cell lies in the visible grid.
pub struct CellInBounds;

impl CellInBounds {
    /// Checks the pick against the grid bounds.
    #[instrument(skip(session))]
    pub fn check(pick: &Pick, session: &SessionInProgress) -> Result<(), EngineError> {
        if session.grid().contains(pick.cell) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds(pick.cell))
        }
    }
}

/// Precondition: no complete selection is awaiting validation.
pub struct SelectionUnlocked;

impl SelectionUnlocked {
    /// Checks that the selection still accepts toggles.
    #[instrument(skip(session))]
    pub fn check(_pick: &Pick, session: &SessionInProgress) -> Result<(), EngineError> {
        if session.selection().is_complete() {
            Err(EngineError::SelectionLocked)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for a toggle.
pub struct LegalPick;

impl LegalPick {
    /// Validates all preconditions for a pick.
    pub fn check(pick: &Pick, session: &SessionInProgress) -> Result<(), EngineError> {
        SelectionUnlocked::check(pick, session)?;
        CellInBounds::check(pick, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Toggle Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for toggle actions.
///
/// Preconditions:
/// - Selection is not locked
/// - Cell is on the visible grid
///
/// Postconditions:
/// - All session invariants hold
pub struct ToggleContract;

impl Contract<SessionInProgress, Pick> for ToggleContract {
    fn pre(session: &SessionInProgress, pick: &Pick) -> Result<(), EngineError> {
        LegalPick::check(pick, session)
    }

    fn post(_before: &SessionInProgress, after: &SessionInProgress) -> Result<(), EngineError> {
        check_invariants(after)
    }
}

/// Runs the full invariant set, folding violations into one error.
pub fn check_invariants(session: &SessionInProgress) -> Result<(), EngineError> {
    WordfallInvariants::check_all(session).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

// ─────────────────────────────────────────────────────────────
//  Gravity Conservation
// ─────────────────────────────────────────────────────────────

/// Postcondition for gravity: dimensions unchanged, untouched columns identical.
pub struct GravityConservation;

impl GravityConservation {
    /// Returns true if `after` conserves `before` outside `touched` columns.
    #[instrument(skip(before, after))]
    pub fn holds(before: &Grid, after: &Grid, touched: &[usize]) -> bool {
        let same_shape = before.height() == after.height() && before.width() == after.width();
        let untouched_equal = (0..before.width())
            .filter(|col| !touched.contains(col))
            .all(|col| before.column(col, before.height()).eq(after.column(col, after.height())));

        let valid = same_shape && untouched_equal;
        if !valid {
            warn!(same_shape, untouched_equal, "Gravity conservation violated");
        }
        valid
    }

    /// Checks conservation, returning an error on violation.
    pub fn check(before: &Grid, after: &Grid, touched: &[usize]) -> Result<(), EngineError> {
        if Self::holds(before, after, touched) {
            Ok(())
        } else {
            Err(EngineError::InvariantViolation(
                "Gravity changed an untouched column or the grid shape".into(),
            ))
        }
    }
}
