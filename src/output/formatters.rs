//! Formatting utilities for terminal output

use crate::core::{LetterMatch, WORD_LENGTH};
use crate::game::Turn;
use colored::{ColoredString, Colorize};

/// Horizontal rule between grid rows: "-------...-"
#[must_use]
pub fn grid_separator() -> String {
    format!("-{}", "------".repeat(WORD_LENGTH))
}

/// Empty row inside the grid: "|     |     |..."
#[must_use]
pub fn grid_padding() -> String {
    format!("|{}", "     |".repeat(WORD_LENGTH))
}

/// Color a single guess letter by its classification
///
/// Partial matches are yellow, exact matches green, misses stay uncolored.
#[must_use]
pub fn colorize_letter(letter: char, classification: LetterMatch) -> ColoredString {
    let letter = letter.to_string();
    match classification {
        LetterMatch::NotMatch => letter.normal(),
        LetterMatch::PartialMatch => letter.yellow(),
        LetterMatch::Match => letter.green(),
    }
}

/// Render the letter row of one guess: "|  C  |  R  |..."
#[must_use]
pub fn render_letters(turn: &Turn) -> String {
    let mut text = String::from("|");
    for (&letter, &classification) in turn.guess.chars().iter().zip(turn.score.matches()) {
        text.push_str("  ");
        text.push_str(&colorize_letter(char::from(letter), classification).to_string());
        text.push_str("  |");
    }
    text
}

/// Render every guess so far as a bordered grid, oldest first
#[must_use]
pub fn render_grid(history: &[Turn]) -> String {
    let separator = grid_separator();
    let padding = grid_padding();

    let mut lines = Vec::with_capacity(1 + history.len() * 4);
    if !history.is_empty() {
        lines.push(separator.clone());
    }
    for turn in history {
        lines.push(padding.clone());
        lines.push(render_letters(turn));
        lines.push(padding.clone());
        lines.push(separator.clone());
    }

    lines.join("\n")
}

/// Emoji summary of a game, one line per guess
#[must_use]
pub fn history_to_emoji(history: &[Turn]) -> String {
    history
        .iter()
        .map(|turn| turn.score.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}
