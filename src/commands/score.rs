//! Scoring command
//!
//! Scores a single guess against a given solution without starting a game.

use crate::core::{Score, Word, WordError, is_all_match};
use crate::game::Turn;

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub solution: Word,
    pub turn: Turn,
    pub solved: bool,
}

/// Validate both words and score `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn score_words(solution: &str, guess: &str) -> Result<ScoreReport, WordError> {
    let solution = Word::new(solution)?;
    let guess = Word::new(guess)?;

    Ok(ScoreReport {
        turn: Turn {
            score: Score::calculate(&solution, &guess),
            guess: guess.clone(),
        },
        solved: is_all_match(&solution, &guess),
        solution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_valid_words() {
        let report = score_words("crane", "trace").unwrap();
        assert_eq!(report.solution.text(), "CRANE");
        assert_eq!(report.turn.guess.text(), "TRACE");
        assert_eq!(report.turn.score, Score::from_str("-GGYG").unwrap());
        assert!(!report.solved);
    }

    #[test]
    fn score_exact_guess_is_solved() {
        let report = score_words("crane", "CRANE").unwrap();
        assert!(report.solved);
        assert!(report.turn.score.is_perfect());
    }

    #[test]
    fn score_invalid_solution() {
        assert_eq!(
            score_words("cran", "trace").unwrap_err(),
            WordError::InvalidLength(4)
        );
    }

    #[test]
    fn score_invalid_guess() {
        assert_eq!(
            score_words("crane", "tr4ce").unwrap_err(),
            WordError::InvalidCharacters
        );
    }
}
