//! Gravity and refill after an accepted word.

use crate::error::EngineError;
use crate::reservoir::{FillerReservoir, RowSource};
use crate::selection::SelectionEntry;
use crate::types::{Cell, Grid, Tile};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// What a gravity pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravityReport {
    /// Columns that lost a cell and received a fresh tile.
    pub columns: Vec<usize>,
    /// Cells whose tile differs from before the pass (drives falling animation).
    pub changed: Vec<Cell>,
    /// Rows appended to the reservoir by the post-pass refill.
    pub refilled: usize,
}

/// Removes selected cells and lets their columns fall.
pub struct GravityEngine;

impl GravityEngine {
    /// Removes every selected cell from `grid`.
    ///
    /// One reservoir row is consumed per pass. For each selected cell the
    /// tiles above it shift down by one row and the top cell of that column
    /// takes the filler row's tile for the same column. Columns without a
    /// selected cell are untouched. The reservoir is refilled from `source`
    /// before the draw if empty, and again afterwards once it drops below its
    /// low-water mark.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyReservoir`] only if `source` cannot supply rows.
    #[instrument(skip_all, fields(selected = selection.len(), reservoir = reservoir.len()))]
    pub fn apply<S: RowSource + ?Sized>(
        grid: &mut Grid,
        selection: &[SelectionEntry],
        reservoir: &mut FillerReservoir,
        source: &mut S,
    ) -> Result<GravityReport, EngineError> {
        if selection.is_empty() {
            return Ok(GravityReport::default());
        }

        if reservoir.is_empty() {
            warn!("Reservoir empty before gravity, refilling");
            reservoir.ensure(reservoir.low_water_mark().max(1), source)?;
        }
        let filler = reservoir.take()?;
        let before = grid.clone();
        let mut columns = Vec::with_capacity(selection.len());

        for entry in selection {
            if !grid.contains(entry.cell()) {
                warn!(cell = %entry.cell(), "Selected cell outside grid, skipping");
                continue;
            }
            let col = entry.col;
            for row in (1..=entry.row).rev() {
                let above = grid.get(Cell::new(row - 1, col)).unwrap_or(Tile::Empty);
                grid.set(Cell::new(row, col), above);
            }
            let fresh = filler.get(col).copied().unwrap_or(Tile::Empty);
            grid.set(Cell::new(0, col), fresh);
            columns.push(col);
        }

        let refilled = if reservoir.needs_refill() {
            reservoir.replenish(source)?
        } else {
            0
        };

        let changed = changed_cells(&before, grid);
        debug!(columns = ?columns, changed = changed.len(), refilled, "Gravity applied");

        Ok(GravityReport {
            columns,
            changed,
            refilled,
        })
    }
}

/// Cells whose tiles differ between two grids of the same shape.
pub fn changed_cells(before: &Grid, after: &Grid) -> Vec<Cell> {
    before
        .rows()
        .iter()
        .zip(after.rows())
        .enumerate()
        .flat_map(|(row, (old, new))| {
            old.iter()
                .zip(new)
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(move |(col, _)| Cell::new(row, col))
        })
        .collect()
}
