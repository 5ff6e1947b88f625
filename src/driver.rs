//! Game drivers: a headless auto-player and a line-oriented console.

use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_wordfall::{
    Cell, EngineError, GameEvent, SessionFinished, SessionInProgress, SessionResult,
    ValidWordCounter,
};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Auto-play
// ─────────────────────────────────────────────────────────────

/// Plays by repeatedly selecting the first formable word in list order.
#[derive(Debug, Clone, Copy)]
pub struct AutoPlayer {
    max_words: usize,
}

impl AutoPlayer {
    /// Creates a player that stops after `max_words` accepted words.
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    /// Selects and submits one formable word.
    ///
    /// Returns `None` when nothing is formable.
    #[instrument(skip(session))]
    pub fn play_word(
        session: &mut SessionInProgress,
    ) -> Result<Option<Vec<GameEvent>>, EngineError> {
        session.clear_selection();

        let hints = session.hints(1);
        let Some(word) = hints.sample.first() else {
            return Ok(None);
        };

        let visible_rows = *session.config().visible_rows();
        let cells = ValidWordCounter::locate(session.grid(), word, visible_rows).ok_or_else(|| {
            EngineError::InvariantViolation(format!("Formable word {} has no cells", word))
        })?;
        debug!(word = %word, ?cells, "Selecting word");

        for cell in cells {
            session.toggle(cell.row, cell.col)?;
        }
        let pending = session.pending().ok_or(EngineError::IncompleteSelection)?;
        session.resolve(&pending).map(Some)
    }

    /// Plays until no words remain or the word budget is spent.
    ///
    /// A spent budget ends the game as an expired timer would.
    #[instrument(skip(self, session), fields(max_words = self.max_words))]
    pub fn run(&self, mut session: SessionInProgress) -> Result<SessionFinished, EngineError> {
        loop {
            if session.completed_words().len() >= self.max_words {
                info!("Word budget spent");
                return Ok(session.expire());
            }

            match Self::play_word(&mut session)? {
                Some(events) => {
                    for event in &events {
                        debug!(%event, "Event");
                    }
                }
                None => {
                    return Ok(match session.into_result() {
                        SessionResult::Finished(finished) => finished,
                        SessionResult::InProgress(session) => {
                            warn!("No hint found on a live grid");
                            session.expire()
                        }
                    });
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Console
// ─────────────────────────────────────────────────────────────

/// One line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Toggle the cell at `row col`.
    Pick {
        /// Visible row, top first.
        row: usize,
        /// Column.
        col: usize,
    },
    /// Show a few formable words.
    Hint,
    /// Drop the current selection.
    Clear,
    /// Redraw the grid.
    Show,
    /// Leave the game.
    Quit,
}

impl ConsoleCommand {
    /// Parses a line; `None` if it is not a command.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_ascii_lowercase();
        match line.as_str() {
            "h" | "hint" => return Some(Self::Hint),
            "c" | "clear" => return Some(Self::Clear),
            "" | "s" | "show" => return Some(Self::Show),
            "q" | "quit" | "exit" => return Some(Self::Quit),
            _ => {}
        }

        let mut parts = line.split_whitespace();
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::Pick { row, col })
    }
}

/// Renders the visible grid with selected cells in brackets.
pub fn render(session: &SessionInProgress) -> String {
    let grid = session.grid();
    let mut out = String::from("   ");
    for col in 0..grid.width() {
        out.push_str(&format!(" {} ", col));
    }
    out.push('\n');

    for (row, tiles) in grid.rows().iter().enumerate() {
        out.push_str(&format!("{:>2} ", row));
        for (col, tile) in tiles.iter().enumerate() {
            if session.selection().contains(Cell::new(row, col)) {
                out.push_str(&format!("[{}]", tile.symbol()));
            } else {
                out.push_str(&format!(" {} ", tile.symbol()));
            }
        }
        out.push('\n');
    }
    out
}

/// Interactive game over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until no words remain, the player quits or input ends.
    ///
    /// Quitting ends the game as an expired timer would.
    #[instrument(skip_all)]
    pub fn run(&mut self, mut session: SessionInProgress) -> Result<SessionFinished> {
        writeln!(
            self.output,
            "Pick one cell per column with `row col`. Commands: hint, clear, show, quit."
        )?;
        self.show(&session)?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                info!("Input closed");
                return Ok(session.expire());
            }

            let Some(command) = ConsoleCommand::parse(&line) else {
                writeln!(self.output, "Unrecognized input: {}", line.trim())?;
                continue;
            };
            debug!(?command, "Console command");

            match command {
                ConsoleCommand::Quit => return Ok(session.expire()),
                ConsoleCommand::Show => self.show(&session)?,
                ConsoleCommand::Clear => {
                    session.clear_selection();
                    self.show(&session)?;
                }
                ConsoleCommand::Hint => {
                    let hints = session.hints(3);
                    writeln!(self.output, "Try: {}", hints.sample.join(", "))?;
                }
                ConsoleCommand::Pick { row, col } => {
                    if session.toggle(row, col)?.is_empty() {
                        writeln!(self.output, "Cannot pick ({}, {})", row, col)?;
                        continue;
                    }

                    if let Some(pending) = session.pending() {
                        let events = session.resolve(&pending)?;
                        self.report(&events)?;
                        if events.contains(&GameEvent::NoWordsRemain) {
                            match session.into_result() {
                                SessionResult::Finished(finished) => return Ok(finished),
                                SessionResult::InProgress(live) => session = live,
                            }
                        }
                    }
                    self.show(&session)?;
                }
            }
        }
    }

    fn show(&mut self, session: &SessionInProgress) -> Result<()> {
        write!(self.output, "{}", render(session))?;
        Ok(())
    }

    fn report(&mut self, events: &[GameEvent]) -> Result<()> {
        for event in events {
            match event {
                GameEvent::WordAccepted { word } => writeln!(self.output, "Accepted: {}", word)?,
                GameEvent::WordRejected { candidate } => {
                    writeln!(self.output, "Not a word: {}", candidate)?
                }
                GameEvent::NoWordsRemain => writeln!(self.output, "No words remain")?,
                _ => {}
            }
        }
        Ok(())
    }
}
