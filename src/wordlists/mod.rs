//! Word lists for the game
//!
//! The Dictionary Provider: a non-empty pool of solution words, read from a
//! file or taken from the list embedded at build time.

mod embedded;
pub mod loader;

pub use embedded::{SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::Word;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word list loading
#[derive(Debug)]
pub enum WordListError {
    Io { path: PathBuf, source: io::Error },
    Empty { source: String },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty { source } => {
                write!(f, "Word list {source} contains no valid 5-letter words")
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Where solution words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Embedded,
    File(PathBuf),
}

impl WordSource {
    /// Parse the `--wordlist` value: "embedded" or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("embedded") {
            Self::Embedded
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "<embedded>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Non-empty pool of candidate solution words
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Wrap a list of words, refusing an empty one
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>, source: impl fmt::Display) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty {
                source: source.to_string(),
            });
        }
        Ok(Self { words })
    }

    /// Load the pool for a word source
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or yields no valid words.
    pub fn load(source: &WordSource) -> Result<Self, WordListError> {
        match source {
            WordSource::Embedded => Self::new(loader::words_from_slice(SOLUTIONS), source),
            WordSource::File(path) => Self::from_file(path),
        }
    }

    /// Load the pool from a word list file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or yields no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        Self::new(loader::load_from_file(path)?, path.display())
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the pool holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
    }

    #[test]
    fn solutions_are_valid_words() {
        for &word in SOLUTIONS {
            assert!(
                crate::core::is_valid(word),
                "Word '{word}' is not a valid 5-letter word"
            );
        }
    }

    #[test]
    fn embedded_pool_is_not_empty() {
        let pool = WordPool::load(&WordSource::Embedded).unwrap();
        assert_eq!(pool.len(), SOLUTIONS_COUNT);
        assert!(!pool.is_empty());
    }

    #[test]
    fn empty_pool_is_rejected() {
        let err = WordPool::new(Vec::new(), "test.txt").unwrap_err();
        assert!(matches!(err, WordListError::Empty { .. }));
        assert_eq!(
            err.to_string(),
            "Word list test.txt contains no valid 5-letter words"
        );
    }

    #[test]
    fn pool_of_only_invalid_lines_is_rejected() {
        let words = loader::words_from_slice(&["toolong", "abc", "12345"]);
        assert!(WordPool::new(words, "junk").is_err());
    }

    #[test]
    fn word_source_from_arg() {
        assert_eq!(WordSource::from_arg("embedded"), WordSource::Embedded);
        assert_eq!(WordSource::from_arg("EMBEDDED"), WordSource::Embedded);
        assert_eq!(
            WordSource::from_arg("solutions.txt"),
            WordSource::File(PathBuf::from("solutions.txt"))
        );
    }
}
