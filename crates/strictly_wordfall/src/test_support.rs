//! Shared fixtures for unit tests.

use crate::config::EngineConfig;
use crate::session::{SessionInProgress, SessionSetup};
use crate::word_list::WordList;

/// Four-letter words used by the small fixture session.
pub const FOUR_LETTER_WORDS: [&str; 12] = [
    "WORD", "GAME", "TILE", "FALL", "DROP", "LINE", "CARD", "STEP", "ROLL", "MINT", "BARK", "POND",
];

/// A started 4x4 session without wildcards.
pub fn small_session(seed: u64) -> SessionInProgress {
    let config = EngineConfig::new(4, 4).with_wildcard_pct(0.0);
    SessionSetup::new(config, WordList::new(4, FOUR_LETTER_WORDS))
        .and_then(|setup| setup.start_seeded(seed))
        .expect("fixture session starts")
}
