//! Selection ordering: entries read left to right.

use super::Invariant;
use crate::session::SessionInProgress;

/// Invariant: selection entries are in strictly increasing column order.
pub struct SelectionOrderedInvariant;

impl Invariant<SessionInProgress> for SelectionOrderedInvariant {
    fn holds(session: &SessionInProgress) -> bool {
        session
            .selection()
            .entries()
            .windows(2)
            .all(|pair| pair[0].col < pair[1].col)
    }

    fn description() -> &'static str {
        "Selection entries are sorted by column"
    }
}
