//! Word representation
//!
//! A Word stores a validated, uppercase 5-letter word. The same validation gates
//! player guesses and the solution words read from a word list.

use std::fmt;

/// Number of letters in every solution and guess
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter word, always uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word must contain only letters A-Z"),
        }
    }
}

impl std::error::Error for WordError {}

/// Raise every letter to its uppercase form
///
/// Only ASCII letters change; everything else passes through untouched, so the
/// result always has the same length as the input.
///
/// # Examples
/// ```
/// use wordle_game::core::normalize;
///
/// assert_eq!(normalize("crAne"), "CRANE");
/// assert_eq!(normalize("h3llo"), "H3LLO");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Check the shape of a candidate word without building a [`Word`]
///
/// # Errors
/// Returns the first rule the normalized candidate breaks.
pub fn validate(candidate: &str) -> Result<(), WordError> {
    let normalized = normalize(candidate);

    let len = normalized.chars().count();
    if len != WORD_LENGTH {
        return Err(WordError::InvalidLength(len));
    }

    if !normalized.is_ascii() {
        return Err(WordError::NonAscii);
    }

    if !normalized.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(WordError::InvalidCharacters);
    }

    Ok(())
}

/// True iff the candidate is 5 letters from A-Z once normalized
///
/// # Examples
/// ```
/// use wordle_game::core::is_valid;
///
/// assert!(is_valid("crane"));
/// assert!(!is_valid("cran"));
/// assert!(!is_valid("cr4ne"));
/// ```
#[must_use]
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_ok()
}

impl Word {
    /// Create a new Word from a string, normalizing it to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();
        validate(text)?;

        let text = normalize(text);
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
