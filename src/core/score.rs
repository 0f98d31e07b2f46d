//! Guess scoring
//!
//! Each guess is classified letter by letter against the solution:
//! - `NotMatch` (letter not creditable anywhere in the solution)
//! - `PartialMatch` (letter occurs in the solution at another position)
//! - `Match` (letter sits at the same position in the solution)
//!
//! Solution letters carry no budget: one solution letter may credit several
//! guess positions at once. `ALLOW` against the guess `LLAMA` scores both `A`s
//! as partial matches even though the solution holds a single `A`.

use super::word::{WORD_LENGTH, Word};

/// Classification of a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterMatch {
    #[default]
    NotMatch,
    PartialMatch,
    Match,
}

impl LetterMatch {
    /// Emoji square for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::NotMatch => '⬜',
            Self::PartialMatch => '🟨',
            Self::Match => '🟩',
        }
    }
}

/// Per-letter classifications for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score([LetterMatch; WORD_LENGTH]);

impl Score {
    /// All five letters matched
    pub const PERFECT: Self = Self([LetterMatch::Match; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(matches: [LetterMatch; WORD_LENGTH]) -> Self {
        Self(matches)
    }

    /// Score `guess` against `solution`
    ///
    /// # Algorithm
    /// Every position starts as `NotMatch`. For each guess position `j`, every
    /// solution position `i` is scanned left to right. An equal letter at
    /// `i == j` marks `Match` and ends the scan for `j`; an equal letter
    /// elsewhere marks `PartialMatch` and the scan goes on, so a later exact hit
    /// can still upgrade it.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{LetterMatch::*, Score, Word};
    ///
    /// let solution = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let score = Score::calculate(&solution, &guess);
    ///
    /// assert_eq!(
    ///     score.matches(),
    ///     &[NotMatch, Match, Match, PartialMatch, Match]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(solution: &Word, guess: &Word) -> Self {
        let mut result = [LetterMatch::NotMatch; WORD_LENGTH];

        for (j, &letter) in guess.chars().iter().enumerate() {
            for (i, &candidate) in solution.chars().iter().enumerate() {
                if letter != candidate {
                    continue;
                }
                if i == j {
                    result[j] = LetterMatch::Match;
                    break;
                }
                result[j] = LetterMatch::PartialMatch;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn matches(&self) -> &[LetterMatch; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the exact matches
    #[must_use]
    pub fn count_matches(&self) -> usize {
        self.0.iter().filter(|&&m| m == LetterMatch::Match).count()
    }

    /// Count the partial matches
    #[must_use]
    pub fn count_partials(&self) -> usize {
        self.0
            .iter()
            .filter(|&&m| m == LetterMatch::PartialMatch)
            .count()
    }

    /// Convert to an emoji string such as "⬜🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }

    /// Parse a score from a string like "-GGYG" or "⬜🟩🟩🟨🟩"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for a match
    /// - 'Y'/'y'/🟨 for a partial match
    /// - '-'/'_'/⬜ for no match
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Score;
    ///
    /// let s1 = Score::from_str("GY-GY").unwrap();
    /// let s2 = Score::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(s1, s2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API for callers; FromStr also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut result = [LetterMatch::NotMatch; WORD_LENGTH];
        let mut len = 0;

        for ch in s.chars() {
            let slot = result.get_mut(len)?;
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterMatch::Match,
                'Y' | 'y' | '🟨' => LetterMatch::PartialMatch,
                '-' | '_' | '⬜' => LetterMatch::NotMatch,
                _ => return None,
            };
            len += 1;
        }

        (len == WORD_LENGTH).then_some(Self(result))
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid score string: {s}"))
    }
}

/// Exact full-word equality, used for win detection
///
/// Computed directly from the letters rather than from a [`Score`].
#[must_use]
pub fn is_all_match(solution: &Word, guess: &Word) -> bool {
    solution.chars() == guess.chars()
}
