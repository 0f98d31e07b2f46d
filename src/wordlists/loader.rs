//! Word list loading utilities
//!
//! Provides functions to load solution words from files or use the embedded constant.

use super::WordListError;
use crate::core::{WORD_LENGTH, Word};
use std::fs;
use std::path::Path;

/// Load solution words from a file
///
/// Returns the valid words in file order, skipping any ineligible lines.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(content.lines()))
}

/// Convert lines of text into solution words
///
/// A line is eligible when it holds exactly five characters after trimming;
/// eligible lines must also pass word validation. Everything else is dropped.
pub fn words_from_lines<'a, I>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| line.chars().count() == WORD_LENGTH)
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}
