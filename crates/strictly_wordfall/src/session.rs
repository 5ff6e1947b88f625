//! Phase-specific typestate structs for a wordfall game.
//!
//! Each phase is its own type: a [`SessionSetup`] only shows a placeholder
//! grid, a [`SessionInProgress`] accepts picks and validates words, and a
//! [`SessionFinished`] always carries the reason the game ended.

use crate::config::EngineConfig;
use crate::contracts::{Contract, Pick, ToggleContract};
use crate::counter::{Formable, ValidWordCounter};
use crate::error::EngineError;
use crate::events::GameEvent;
use crate::generator::GridGenerator;
use crate::gravity::GravityEngine;
use crate::phases::{FinishReason, RoundPhase};
use crate::reservoir::{FillerReservoir, WordBatchSource};
use crate::selection::{SelectionEntry, SelectionTracker, Toggle};
use crate::types::{Grid, Tile, spell};
use crate::validator::{Outcome, WordValidator};
use crate::word_list::WordList;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: configuration and word list checked, placeholder shown.
#[derive(Debug, Clone)]
pub struct SessionSetup {
    config: EngineConfig,
    words: Arc<WordList>,
    placeholder: Grid,
}

impl SessionSetup {
    /// Creates a session in setup phase.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidConfig`] if the config is unusable or its word
    ///   length differs from the list's
    /// - [`EngineError::EmptyWordList`] if the list holds no words
    #[instrument(skip_all)]
    pub fn new(config: EngineConfig, words: impl Into<Arc<WordList>>) -> Result<Self, EngineError> {
        let words = words.into();
        config.validate()?;
        if words.word_length() != *config.word_length() {
            return Err(EngineError::InvalidConfig(format!(
                "word list has length {}, config expects {}",
                words.word_length(),
                config.word_length()
            )));
        }
        if words.is_empty() {
            return Err(EngineError::EmptyWordList(*config.word_length()));
        }

        let placeholder = GridGenerator::from_config(&config).placeholder(*config.visible_rows());
        Ok(Self {
            config,
            words,
            placeholder,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the word list.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Empty grid to show before the game starts.
    pub fn placeholder(&self) -> &Grid {
        &self.placeholder
    }

    /// Starts the game with an OS-seeded generator.
    pub fn start(self) -> Result<SessionInProgress, EngineError> {
        self.start_with(StdRng::from_os_rng())
    }

    /// Starts the game with a fixed seed (reproducible grids).
    pub fn start_seeded(self, seed: u64) -> Result<SessionInProgress, EngineError> {
        self.start_with(StdRng::seed_from_u64(seed))
    }

    /// Starts the game: picks a random word batch, builds the visible grid
    /// and fills the reservoir.
    #[instrument(skip(self, rng))]
    pub fn start_with(self, mut rng: StdRng) -> Result<SessionInProgress, EngineError> {
        let generator = GridGenerator::from_config(&self.config);
        let visible_rows = *self.config.visible_rows();

        let initial_words: Vec<String> = self
            .words
            .choose_batch(visible_rows, &mut rng)
            .into_iter()
            .map(str::to_string)
            .collect();
        let grid = generator.generate(&initial_words, true, &mut rng);

        let mut reservoir =
            FillerReservoir::new(self.config.low_water_mark(), self.config.batch_rows());
        reservoir.replenish(&mut WordBatchSource::new(&self.words, generator, &mut rng))?;

        info!(words = ?initial_words, reservoir = reservoir.len(), "Session started");

        let session = SessionInProgress {
            selection: SelectionTracker::new(*self.config.word_length()),
            config: self.config,
            words: self.words,
            generator,
            grid,
            reservoir,
            initial_words,
            completed: Vec::new(),
            rejected: 0,
            rng,
        };

        #[cfg(debug_assertions)]
        crate::contracts::check_invariants(&session)?;

        Ok(session)
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Snapshot of a complete selection awaiting validation.
///
/// Validation may run after a UI delay; the snapshot is only honored while
/// the selection is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingWord {
    tiles: Vec<Tile>,
    entries: Vec<SelectionEntry>,
    generation: u64,
}

impl PendingWord {
    /// Tiles in column order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Selected cells in column order.
    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Candidate spelled out (`*` for wildcards).
    pub fn candidate(&self) -> String {
        spell(&self.tiles)
    }
}

/// Game in progress: accepts picks and validates words.
#[derive(Debug, Clone)]
pub struct SessionInProgress {
    pub(crate) config: EngineConfig,
    pub(crate) words: Arc<WordList>,
    pub(crate) generator: GridGenerator,
    pub(crate) grid: Grid,
    pub(crate) reservoir: FillerReservoir,
    pub(crate) selection: SelectionTracker,
    pub(crate) initial_words: Vec<String>,
    pub(crate) completed: Vec<String>,
    pub(crate) rejected: usize,
    pub(crate) rng: StdRng,
}

impl SessionInProgress {
    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the word list.
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Returns the visible grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the filler reservoir.
    pub fn reservoir(&self) -> &FillerReservoir {
        &self.reservoir
    }

    /// Returns the current selection.
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Words the opening grid was generated from.
    pub fn initial_words(&self) -> &[String] {
        &self.initial_words
    }

    /// Accepted words, in order.
    pub fn completed_words(&self) -> &[String] {
        &self.completed
    }

    /// Number of rejected candidates.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Current round phase.
    pub fn phase(&self) -> RoundPhase {
        if self.selection.is_complete() {
            RoundPhase::Complete
        } else if self.selection.is_empty() {
            RoundPhase::Idle
        } else {
            RoundPhase::Selecting
        }
    }

    /// Toggles the visible cell at `(row, col)`.
    ///
    /// Out-of-bounds picks and picks while a complete selection awaits
    /// validation are no-ops and return no events.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvariantViolation`] if a postcondition fails
    /// (debug builds only).
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Vec<GameEvent>, EngineError> {
        let pick = Pick::new(row, col);
        if let Err(reason) = ToggleContract::pre(self, &pick) {
            debug!(%reason, "Ignoring pick");
            return Ok(Vec::new());
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let Some(tile) = self.grid.get(pick.cell) else {
            return Ok(Vec::new());
        };

        let mut events = Vec::new();
        match self.selection.toggle(row, col, tile) {
            Some(Toggle::Selected { entry, replaced }) => {
                if let Some(old) = replaced {
                    events.push(GameEvent::deselected(old.cell()));
                }
                events.push(GameEvent::selected(entry.cell()));
            }
            Some(Toggle::Deselected(entry)) => events.push(GameEvent::deselected(entry.cell())),
            None => return Ok(events),
        }

        if let Some(pending) = self.pending() {
            debug!(candidate = %pending.candidate(), "Selection complete");
            events.push(GameEvent::SelectionComplete {
                candidate: pending.candidate(),
            });
        }

        #[cfg(debug_assertions)]
        ToggleContract::post(&before, self)?;

        Ok(events)
    }

    /// Clears the selection, returning a deselect event per cleared cell.
    #[instrument(skip(self))]
    pub fn clear_selection(&mut self) -> Vec<GameEvent> {
        self.selection
            .clear()
            .into_iter()
            .map(|e| GameEvent::deselected(e.cell()))
            .collect()
    }

    /// Snapshot of the selection once every column holds a pick.
    pub fn pending(&self) -> Option<PendingWord> {
        self.selection.assembled().map(|tiles| PendingWord {
            tiles,
            entries: self.selection.entries().to_vec(),
            generation: self.selection.generation(),
        })
    }

    /// Validates a pending word and resolves the round.
    ///
    /// Accepted words are recorded, gravity removes the selected cells and
    /// refills from the reservoir, then the grid is re-scanned; if nothing
    /// is formable a [`GameEvent::NoWordsRemain`] is emitted and
    /// [`into_result`](Self::into_result) will finish the game. Rejected
    /// words just clear the selection.
    ///
    /// # Errors
    ///
    /// - [`EngineError::StaleSubmission`] if the selection changed since the
    ///   snapshot was taken, or the snapshot does not match it (the session
    ///   is left untouched)
    /// - [`EngineError::EmptyReservoir`] if no filler rows can be generated
    /// - [`EngineError::InvariantViolation`] on a failed postcondition (debug builds)
    #[instrument(skip(self, pending), fields(candidate = %pending.candidate()))]
    pub fn resolve(&mut self, pending: &PendingWord) -> Result<Vec<GameEvent>, EngineError> {
        if pending.generation != self.selection.generation() {
            warn!("Discarding stale pending word");
            return Err(EngineError::StaleSubmission);
        }
        let tiles = self
            .selection
            .assembled()
            .ok_or(EngineError::IncompleteSelection)?;
        if tiles != pending.tiles || self.selection.entries() != pending.entries.as_slice() {
            warn!("Pending word does not match the live selection");
            return Err(EngineError::StaleSubmission);
        }

        let mut events = Vec::new();
        match WordValidator::validate(&tiles, &self.words) {
            Outcome::Accepted(word) => {
                info!(word = %word, "Word accepted");

                #[cfg(debug_assertions)]
                let before = self.grid.clone();
                let mut source = WordBatchSource::new(&self.words, self.generator, &mut self.rng);
                let report = GravityEngine::apply(
                    &mut self.grid,
                    self.selection.entries(),
                    &mut self.reservoir,
                    &mut source,
                )?;

                #[cfg(debug_assertions)]
                crate::contracts::GravityConservation::check(&before, &self.grid, &report.columns)?;

                events.push(GameEvent::WordAccepted { word: word.clone() });
                self.completed.push(word);
                events.push(GameEvent::GridMutated {
                    grid: self.grid.clone(),
                    changed: report.changed,
                });
            }
            Outcome::Rejected => {
                info!(candidate = %pending.candidate(), "Word rejected");
                self.rejected += 1;
                events.push(GameEvent::WordRejected {
                    candidate: spell(&tiles),
                });
            }
        }

        events.extend(self.clear_selection());

        if self.is_exhausted() {
            info!(completed = self.completed.len(), "No words remain");
            events.push(GameEvent::NoWordsRemain);
        }

        #[cfg(debug_assertions)]
        crate::contracts::check_invariants(self)?;

        Ok(events)
    }

    /// Returns true when no list word is formable from the visible grid.
    pub fn is_exhausted(&self) -> bool {
        ValidWordCounter::count_formable(&self.grid, &self.words, *self.config.visible_rows(), 1)
            .is_exhausted()
    }

    /// Up to `limit` formable words for display (`0` for all of them).
    pub fn hints(&self, limit: usize) -> Formable {
        let visible_rows = *self.config.visible_rows();
        ValidWordCounter::count_formable(&self.grid, &self.words, visible_rows, limit)
    }

    /// Transitions to [`SessionFinished`] if no words remain.
    #[instrument(skip(self))]
    pub fn into_result(self) -> SessionResult {
        if self.is_exhausted() {
            SessionResult::Finished(self.finish(FinishReason::NoWordsRemain))
        } else {
            SessionResult::InProgress(self)
        }
    }

    /// Ends the game because an external timer expired.
    #[instrument(skip(self))]
    pub fn expire(self) -> SessionFinished {
        self.finish(FinishReason::TimeExpired)
    }

    fn finish(self, reason: FinishReason) -> SessionFinished {
        info!(%reason, completed = self.completed.len(), "Session finished");
        SessionFinished {
            config: self.config,
            words: self.words,
            grid: self.grid,
            completed: self.completed,
            rejected: self.rejected,
            reason,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished; the reason is always present.
#[derive(Debug, Clone)]
pub struct SessionFinished {
    config: EngineConfig,
    words: Arc<WordList>,
    grid: Grid,
    completed: Vec<String>,
    rejected: usize,
    reason: FinishReason,
}

/// Statistics of a finished game, for the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Accepted words, in order.
    pub completed_words: Vec<String>,
    /// Number of rejected candidates.
    pub rejected_attempts: usize,
    /// Why the game ended.
    pub reason: FinishReason,
}

impl SessionFinished {
    /// Why the game ended.
    pub fn reason(&self) -> FinishReason {
        self.reason
    }

    /// The final grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Accepted words, in order.
    pub fn completed_words(&self) -> &[String] {
        &self.completed
    }

    /// Statistics for display or storage.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            completed_words: self.completed.clone(),
            rejected_attempts: self.rejected,
            reason: self.reason,
        }
    }

    /// Restarts with the same configuration and word list.
    #[instrument(skip(self))]
    pub fn restart(self) -> Result<SessionSetup, EngineError> {
        SessionSetup::new(self.config, self.words)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of checking for game over.
#[derive(Debug)]
pub enum SessionResult {
    /// Game continues.
    InProgress(SessionInProgress),
    /// Game finished.
    Finished(SessionFinished),
}

impl SessionResult {
    /// Phase after the check.
    pub fn phase(&self) -> RoundPhase {
        match self {
            SessionResult::InProgress(session) => session.phase(),
            SessionResult::Finished(_) => RoundPhase::GameOver,
        }
    }
}
