//! Tests for the typestate session lifecycle.

use strictly_wordfall::{
    EngineConfig, EngineError, FinishReason, GameEvent, GameEventKind, PendingWord, RoundPhase,
    SessionInProgress, SessionResult, SessionSetup, SessionSummary, Tile, ValidWordCounter,
    WordList,
};

const WORDS: [&str; 16] = [
    "WORD", "GAME", "TILE", "FALL", "DROP", "LINE", "CARD", "STEP", "ROLL", "MINT", "BARK",
    "POND", "SAND", "WIND", "FIRE", "SNOW",
];

fn start(seed: u64) -> SessionInProgress {
    let config = EngineConfig::new(4, 4).with_wildcard_pct(0.0);
    SessionSetup::new(config, WordList::new(4, WORDS))
        .expect("Valid setup")
        .start_seeded(seed)
        .expect("Session starts")
}

/// Selects the cells of the first formable word; returns the word.
fn select_first_formable(session: &mut SessionInProgress) -> Option<String> {
    let word = session.hints(1).sample.into_iter().next()?;
    let cells = ValidWordCounter::locate(session.grid(), &word, 4)?;
    for cell in cells {
        session.toggle(cell.row, cell.col).expect("Toggle succeeds");
    }
    Some(word)
}

#[test]
fn test_typestate_lifecycle() {
    // Setup phase
    let config = EngineConfig::new(4, 4).with_wildcard_pct(0.0);
    let setup = SessionSetup::new(config, WordList::new(4, WORDS)).expect("Valid setup");
    assert!(setup.placeholder().rows().iter().flatten().all(|t| t.letter().is_none()));

    // Start game
    let mut session = setup.start_seeded(1).expect("Session starts");
    assert_eq!(session.phase(), RoundPhase::Idle);
    assert_eq!(session.grid().height(), 4);
    assert_eq!(session.grid().width(), 4);

    // Play a word
    let word = select_first_formable(&mut session).expect("Opening grid has a word");
    assert_eq!(session.phase(), RoundPhase::Complete);
    let pending = session.pending().expect("Selection complete");
    let events = session.resolve(&pending).expect("Resolve succeeds");

    assert_eq!(events[0], GameEvent::WordAccepted { word: word.clone() });
    assert_eq!(events[1].kind(), GameEventKind::GridMutated);
    assert_eq!(session.completed_words(), &[word]);

    match session.into_result() {
        SessionResult::InProgress(session) => assert_eq!(session.phase(), RoundPhase::Idle),
        SessionResult::Finished(finished) => {
            assert_eq!(finished.reason(), FinishReason::NoWordsRemain)
        }
    }
}

#[test]
fn test_opening_words_are_formable() {
    for seed in 0..25 {
        let session = start(seed);
        for word in session.initial_words() {
            assert!(
                ValidWordCounter::is_formable(session.grid(), word, 4),
                "seed {seed}: {word} not formable"
            );
        }
        assert!(!session.is_exhausted());
    }
}

#[test]
fn test_accepted_word_falls_and_refills() {
    let mut session = start(7);
    let before = session.grid().clone();
    let filler = session.reservoir().front().cloned().expect("Reservoir filled at start");

    select_first_formable(&mut session).expect("Opening grid has a word");
    let pending = session.pending().expect("Selection complete");
    session.resolve(&pending).expect("Resolve succeeds");
    let after = session.grid();

    for entry in pending.entries() {
        let col = entry.col;
        assert_eq!(after.rows()[0][col], filler[col]);
        for row in 0..entry.row {
            assert_eq!(after.rows()[row + 1][col], before.rows()[row][col]);
        }
        for row in entry.row + 1..4 {
            assert_eq!(after.rows()[row][col], before.rows()[row][col]);
        }
    }
}

#[test]
fn test_rejected_word_keeps_grid() {
    let mut session = start(3);
    let grid = session.grid().clone();
    let list = WordList::new(4, WORDS);

    // Find a row that does not spell a word.
    let row = (0..4)
        .find(|&row| {
            let spelled: String = grid.rows()[row].iter().map(|t| t.symbol()).collect();
            !list.contains(&spelled)
        })
        .expect("Some row is not a word");

    for col in 0..4 {
        session.toggle(row, col).unwrap();
    }
    let pending = session.pending().unwrap();
    let events = session.resolve(&pending).unwrap();

    assert_eq!(events[0].kind(), GameEventKind::WordRejected);
    assert_eq!(session.grid(), &grid);
    assert_eq!(session.rejected(), 1);
    assert!(session.selection().is_empty());
}

#[test]
fn test_stale_submission_rejected() {
    let mut session = start(4);
    select_first_formable(&mut session).expect("Opening grid has a word");
    let pending = session.pending().unwrap();

    // Deselect and reselect the same cell: same selection, newer generation.
    let entry = pending.entries()[0];
    session.toggle(entry.row, entry.col).unwrap();
    session.toggle(entry.row, entry.col).unwrap();
    assert_eq!(session.pending().unwrap().tiles(), pending.tiles());

    assert_eq!(session.resolve(&pending), Err(EngineError::StaleSubmission));
    assert!(session.completed_words().is_empty());

    let fresh = session.pending().unwrap();
    assert!(session.resolve(&fresh).is_ok());
}

#[test]
fn test_rewritten_snapshot_rejected() {
    let mut session = start(8);
    let word = select_first_formable(&mut session).expect("Opening grid has a word");
    let pending = session.pending().unwrap();
    let grid = session.grid().clone();

    // Same generation, different tiles.
    let mut value = serde_json::to_value(&pending).expect("Snapshot serializes");
    value["tiles"] = serde_json::to_value(vec![Tile::Wildcard; 4]).unwrap();
    let rewritten: PendingWord = serde_json::from_value(value).expect("Snapshot deserializes");
    assert_ne!(rewritten.tiles(), pending.tiles());

    assert_eq!(session.resolve(&rewritten), Err(EngineError::StaleSubmission));
    assert!(session.completed_words().is_empty());
    assert_eq!(session.grid(), &grid);

    let events = session.resolve(&pending).expect("Original snapshot still valid");
    assert_eq!(events[0], GameEvent::WordAccepted { word });
}

#[test]
fn test_changed_selection_not_resolved() {
    let mut session = start(5);
    select_first_formable(&mut session).expect("Opening grid has a word");
    let pending = session.pending().unwrap();
    let entry = pending.entries()[3];
    session.toggle(entry.row, entry.col).unwrap();

    assert_eq!(session.resolve(&pending), Err(EngineError::StaleSubmission));
    assert_eq!(session.phase(), RoundPhase::Selecting);
}

#[test]
fn test_expire_summary_and_restart() {
    let mut session = start(6);
    select_first_formable(&mut session).expect("Opening grid has a word");
    let pending = session.pending().unwrap();
    session.resolve(&pending).unwrap();

    let finished = session.expire();
    assert_eq!(finished.reason(), FinishReason::TimeExpired);

    let summary = finished.summary();
    assert_eq!(summary.completed_words.len(), 1);
    let json = serde_json::to_string(&summary).expect("Summary serializes");
    let decoded: SessionSummary = serde_json::from_str(&json).expect("Summary deserializes");
    assert_eq!(decoded, summary);

    let setup = finished.restart().expect("Restart succeeds");
    assert_eq!(setup.config(), &EngineConfig::new(4, 4).with_wildcard_pct(0.0));
    let session = setup.start_seeded(6).expect("Second game starts");
    assert!(session.completed_words().is_empty());
}

#[test]
fn test_setup_errors() {
    let config = EngineConfig::new(0, 4);
    assert!(matches!(
        SessionSetup::new(config, WordList::new(4, WORDS)),
        Err(EngineError::InvalidConfig(_))
    ));

    let config = EngineConfig::new(4, 4);
    assert_eq!(
        SessionSetup::new(config, WordList::new(4, Vec::<String>::new())).unwrap_err(),
        EngineError::EmptyWordList(4)
    );
}
