//! Word list files: one word per line.

use derive_more::{Display, Error};
use std::path::Path;
use strictly_wordfall::WordList;
use tracing::{debug, info, instrument};

/// Five-letter words bundled with the binary.
pub const BUNDLED_WORDS: &str = include_str!("../assets/words5.txt");

/// Word list loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Word list error: {} at {}:{}", message, file, line)]
pub struct WordListError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordListError {
    /// Creates a new word list error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Splits file content into trimmed, uppercased, non-blank entries.
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_ascii_uppercase)
        .collect()
}

/// Builds a word list from newline-separated content.
///
/// # Errors
///
/// Returns [`WordListError`] if no entry has `word_length` letters.
#[instrument(skip(content))]
pub fn word_list_from_str(content: &str, word_length: usize) -> Result<WordList, WordListError> {
    let entries = parse_word_list(content);
    debug!(entries = entries.len(), "Parsed word list entries");

    let list = WordList::new(word_length, &entries);
    if list.is_empty() {
        return Err(WordListError::new(format!(
            "No {}-letter words among {} entries",
            word_length,
            entries.len()
        )));
    }
    Ok(list)
}

/// Loads a word list file.
///
/// # Errors
///
/// Returns [`WordListError`] if the file cannot be read or holds no usable words.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_word_list(
    path: impl AsRef<Path>,
    word_length: usize,
) -> Result<WordList, WordListError> {
    let content = std::fs::read_to_string(path.as_ref())
        .map_err(|e| WordListError::new(format!("Failed to read word list: {}", e)))?;

    let list = word_list_from_str(&content, word_length)?;
    info!(words = list.len(), skipped = list.skipped(), "Word list loaded");
    Ok(list)
}

/// The bundled list, filtered to `word_length`.
///
/// # Errors
///
/// Returns [`WordListError`] when `word_length` is not 5.
pub fn bundled_word_list(word_length: usize) -> Result<WordList, WordListError> {
    word_list_from_str(BUNDLED_WORDS, word_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_trims_and_uppercases() {
        let entries = parse_word_list("  crane\n\nslate \r\nPlace\n");
        assert_eq!(entries, ["CRANE", "SLATE", "PLACE"]);
    }

    #[test]
    fn test_load_skips_malformed() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("words.txt");
        fs::write(&path, "crane\nslate\nno\ntoolong\nab1de\ncrane\n")
            .expect("Failed to write words");

        let list = load_word_list(&path, 5).expect("Load failed");
        assert_eq!(list.words(), ["CRANE", "SLATE"]);
        assert_eq!(list.skipped(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let err = load_word_list(dir.path().join("missing.txt"), 5).unwrap_err();
        assert!(err.message.contains("Failed to read word list"));
    }

    #[test]
    fn test_no_usable_words() {
        let err = word_list_from_str("cat\ndog\n", 5).unwrap_err();
        assert!(err.message.contains("No 5-letter words"));
    }

    #[test]
    fn test_bundled_list() {
        let list = bundled_word_list(5).expect("Bundled list loads");
        assert!(list.len() > 300);
        assert_eq!(list.skipped(), 0);
        assert!(bundled_word_list(4).is_err());
    }
}
