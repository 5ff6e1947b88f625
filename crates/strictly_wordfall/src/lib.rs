//! Strictly Wordfall - falling-letter word puzzle engine
//!
//! A grid of letters (and the odd wildcard) is shown to the player, who
//! picks one cell per column to spell a word. Accepted words disappear,
//! their columns fall and fresh tiles drop in from a hidden reservoir.
//!
//! # Architecture
//!
//! - **WordList**: the ordered dictionary every check runs against
//! - **GridGenerator**: per-column shuffles that keep input words formable
//! - **FillerReservoir**: lazily refilled queue of off-screen rows
//! - **SelectionTracker**: one pick per column, sorted left to right
//! - **WordValidator**: membership and first-match wildcard resolution
//! - **GravityEngine**: removal, falling columns and refill
//! - **ValidWordCounter**: formable-word scan that signals game over
//! - **Session**: typestate phases tying it all together
//!
//! # Example
//!
//! ```
//! use strictly_wordfall::{EngineConfig, SessionResult, SessionSetup, WordList};
//!
//! # fn example() -> Result<(), strictly_wordfall::EngineError> {
//! let words = WordList::new(4, ["WORD", "GAME", "TILE", "FALL"]);
//! let config = EngineConfig::new(4, 4).with_wildcard_pct(0.0);
//! let mut session = SessionSetup::new(config, words)?.start_seeded(7)?;
//!
//! for col in 0..4 {
//!     session.toggle(0, col)?;
//! }
//! if let Some(pending) = session.pending() {
//!     let events = session.resolve(&pending)?;
//!     assert!(!events.is_empty());
//! }
//! match session.into_result() {
//!     SessionResult::InProgress(_) | SessionResult::Finished(_) => {}
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod contracts;
mod counter;
mod error;
mod events;
mod generator;
mod gravity;
mod invariants;
mod phases;
mod reservoir;
mod selection;
mod session;
mod types;
mod validator;
mod word_list;

#[cfg(test)]
mod test_support;

// Crate-level exports - Core types
pub use types::{Cell, Grid, Row, Tile, spell};
pub use word_list::{WordList, matches_pattern};
pub use config::EngineConfig;
pub use error::EngineError;

// Crate-level exports - Engine components
pub use counter::{Formable, ValidWordCounter};
pub use generator::GridGenerator;
pub use gravity::{GravityEngine, GravityReport, changed_cells};
pub use reservoir::{FillerReservoir, RowSource, WordBatchSource};
pub use selection::{SelectionEntry, SelectionTracker, Toggle};
pub use validator::{Outcome, WordValidator};

// Crate-level exports - Session state machine
pub use events::{GameEvent, GameEventKind};
pub use phases::{FinishReason, RoundPhase};
pub use session::{
    PendingWord, SessionFinished, SessionInProgress, SessionResult, SessionSetup, SessionSummary,
};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    CellInBounds, Contract, GravityConservation, LegalPick, Pick, SelectionUnlocked,
    ToggleContract,
};
pub use invariants::{
    ColumnExclusiveInvariant, GridShapeInvariant, Invariant, InvariantSet, InvariantViolation,
    SelectionOrderedInvariant, WordfallInvariants,
};
