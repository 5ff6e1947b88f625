//! Core domain types for the falling-letter grid.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single grid cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// An uppercase ASCII letter.
    Letter(char),
    /// Matches any letter during word formation and validation.
    Wildcard,
    /// Placeholder cell. Never matches anything.
    Empty,
}

impl Tile {
    /// Converts a character into a tile.
    ///
    /// ASCII letters are uppercased; anything else becomes [`Tile::Empty`].
    pub fn from_char(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Tile::Letter(c.to_ascii_uppercase())
        } else {
            Tile::Empty
        }
    }

    /// Returns true if this tile can stand for `letter`.
    pub fn matches(self, letter: char) -> bool {
        match self {
            Tile::Letter(l) => l == letter,
            Tile::Wildcard => true,
            Tile::Empty => false,
        }
    }

    /// Returns true for the wildcard marker.
    pub fn is_wildcard(self) -> bool {
        matches!(self, Tile::Wildcard)
    }

    /// Returns the letter held by this tile, if any.
    pub fn letter(self) -> Option<char> {
        match self {
            Tile::Letter(l) => Some(l),
            _ => None,
        }
    }

    /// Single-character rendering (`*` for wildcards, `.` for empty cells).
    pub fn symbol(self) -> char {
        match self {
            Tile::Letter(l) => l,
            Tile::Wildcard => '*',
            Tile::Empty => '.',
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Renders a tile sequence as a string, e.g. `*RANE`.
pub fn spell(tiles: &[Tile]) -> String {
    tiles.iter().map(|t| t.symbol()).collect()
}

/// One grid row, one tile per column.
pub type Row = Vec<Tile>;

/// Grid coordinates. Row 0 is the top of the grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Cell {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Cell {
    /// Creates a new cell coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangular grid of tiles: the visible zone of the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Row>,
    width: usize,
}

impl Grid {
    /// Builds a grid from rows, checking that every row has `width` tiles.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RaggedGrid`] on the first row of the wrong width.
    #[instrument(skip(rows), fields(height = rows.len()))]
    pub fn from_rows(rows: Vec<Row>, width: usize) -> Result<Self, EngineError> {
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(EngineError::RaggedGrid {
                row,
                found: r.len(),
                expected: width,
            });
        }
        Ok(Self { rows, width })
    }

    /// Parses rows written as strings (`*` wildcard, `.` empty).
    ///
    /// Handy for fixtures and for tests of renderer collaborators.
    pub fn parse(lines: &[&str]) -> Result<Self, EngineError> {
        let width = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        let rows = lines
            .iter()
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '*' => Tile::Wildcard,
                        c => Tile::from_char(c),
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(rows, width)
    }

    /// A grid of `height` rows filled with [`Tile::Empty`].
    pub fn blank(height: usize, width: usize) -> Self {
        Self {
            rows: vec![vec![Tile::Empty; width]; height],
            width,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// All rows, top first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the grid, returning its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Gets the tile at `cell`.
    pub fn get(&self, cell: Cell) -> Option<Tile> {
        self.rows.get(cell.row).and_then(|r| r.get(cell.col)).copied()
    }

    /// Returns true if `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height() && cell.col < self.width
    }

    /// Sets the tile at `cell`. Out-of-bounds writes are ignored.
    pub(crate) fn set(&mut self, cell: Cell, tile: Tile) {
        if let Some(slot) = self.rows.get_mut(cell.row).and_then(|r| r.get_mut(cell.col)) {
            *slot = tile;
        }
    }

    /// Tiles of column `col` among the first `visible_rows` rows.
    pub fn column(&self, col: usize, visible_rows: usize) -> impl Iterator<Item = Tile> + '_ {
        self.rows
            .iter()
            .take(visible_rows)
            .filter_map(move |r| r.get(col).copied())
    }

    /// Formats the grid as a human-readable string with row and column labels.
    pub fn display(&self) -> String {
        let mut result = String::from("   ");
        for col in 0..self.width {
            result.push_str(&format!(" {}", col));
        }
        for (index, row) in self.rows.iter().enumerate() {
            result.push_str(&format!("\n{:>2} ", index));
            for tile in row {
                result.push(' ');
                result.push(tile.symbol());
            }
        }
        result
    }
}
