//! Grid shape: the visible grid keeps its configured dimensions and every
//! selection entry points at a live cell showing the selected tile.

use super::Invariant;
use crate::session::SessionInProgress;

/// Invariant: grid is `visible_rows` x `word_length` and selections match it.
pub struct GridShapeInvariant;

impl Invariant<SessionInProgress> for GridShapeInvariant {
    fn holds(session: &SessionInProgress) -> bool {
        let grid = session.grid();
        let config = session.config();

        grid.height() == *config.visible_rows()
            && grid.width() == *config.word_length()
            && grid.rows().iter().all(|r| r.len() == grid.width())
            && session
                .selection()
                .entries()
                .iter()
                .all(|e| grid.get(e.cell()) == Some(e.tile))
    }

    fn description() -> &'static str {
        "Grid keeps its shape and selected cells match the grid"
    }
}
