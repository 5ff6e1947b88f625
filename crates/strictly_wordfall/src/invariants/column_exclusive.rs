//! Column exclusivity: at most one selected cell per column.

use super::Invariant;
use crate::session::SessionInProgress;
use std::collections::HashSet;

/// Invariant: no two selection entries share a column.
pub struct ColumnExclusiveInvariant;

impl Invariant<SessionInProgress> for ColumnExclusiveInvariant {
    fn holds(session: &SessionInProgress) -> bool {
        let mut seen = HashSet::new();
        session.selection().columns().all(|col| seen.insert(col))
    }

    fn description() -> &'static str {
        "At most one cell is selected per column"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionEntry;
    use crate::test_support::small_session;

    #[test]
    fn test_replacing_pick_holds() {
        let mut session = small_session(5);
        session.toggle(0, 2).unwrap();
        session.toggle(3, 2).unwrap();
        assert!(ColumnExclusiveInvariant::holds(&session));
        assert_eq!(session.selection().len(), 1);
    }

    #[test]
    fn test_duplicate_column_violates() {
        let mut session = small_session(6);
        let tile = session.grid().rows()[0][0];
        session.selection.entries.push(SelectionEntry::new(0, 0, tile));
        session.selection.entries.push(SelectionEntry::new(1, 0, tile));
        assert!(!ColumnExclusiveInvariant::holds(&session));
    }
}
