//! Display functions for the game and command results

use super::formatters::{history_to_emoji, render_grid, render_letters};
use crate::commands::ScoreReport;
use crate::core::WordError;
use crate::game::{MAX_ATTEMPTS, Outcome, QUIT_SENTINEL, Turn};
use colored::Colorize;
use std::io::{self, Write};

/// Print the title card
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(31).bright_cyan())?;
    writeln!(out, "{}", "     W   O   R   D   L   E     ".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(31).bright_cyan())?;
    writeln!(out)
}

/// Print how to play
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_instructions<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to Wordle!")?;
    writeln!(
        out,
        "You have {MAX_ATTEMPTS} attempts to guess a 5 letter word. Once you have made a guess,"
    )?;
    writeln!(out, "letters that are not in the word will be printed in WHITE,")?;
    writeln!(
        out,
        "letters in the word but not in the correct position will be printed in {},",
        "YELLOW".yellow()
    )?;
    writeln!(
        out,
        "and letters that are in the correct position will be printed in {}.",
        "GREEN".green()
    )?;
    writeln!(
        out,
        "Enter a guess to start the game or type {QUIT_SENTINEL} to quit."
    )?;
    writeln!(out)
}

/// Print the whole guess history grid
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(out: &mut W, history: &[Turn]) -> io::Result<()> {
    if history.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", render_grid(history))?;
    writeln!(out)
}

/// Ask for the next guess
///
/// # Errors
/// Returns an error if writing to or flushing `out` fails.
pub fn print_prompt<W: Write>(out: &mut W, attempt: usize) -> io::Result<()> {
    write!(out, "Guess {attempt}/{MAX_ATTEMPTS}: ")?;
    out.flush()
}

/// Explain why a guess was rejected
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_invalid_guess<W: Write>(out: &mut W, err: &WordError) -> io::Result<()> {
    writeln!(
        out,
        "{} {err}. Try again (no attempt used).",
        "Invalid guess:".red().bold()
    )
}

/// Print the end-of-game line
///
/// Wins and losses are followed by an emoji summary of the guesses.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_outcome<W: Write>(out: &mut W, outcome: &Outcome, history: &[Turn]) -> io::Result<()> {
    match outcome {
        Outcome::Won { attempts, message } => {
            writeln!(out, "{}", message.bright_green().bold())?;
            writeln!(
                out,
                "Solved in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if *attempts == 1 { "guess" } else { "guesses" }
            )?;
        }
        Outcome::Lost { solution } => {
            writeln!(
                out,
                "The word was: {}",
                solution.text().bright_yellow().bold()
            )?;
        }
        Outcome::Quit => {
            return writeln!(out, "Thanks for playing!");
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", history_to_emoji(history))
}

/// Print the result of scoring one guess against a solution
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_score_report<W: Write>(out: &mut W, report: &ScoreReport) -> io::Result<()> {
    writeln!(
        out,
        "Solution: {}  Guess: {}",
        report.solution.text().bright_yellow().bold(),
        report.turn.guess.text().bright_white().bold()
    )?;
    writeln!(out, "{}", render_letters(&report.turn))?;
    writeln!(out, "{}", report.turn.score.to_emoji())?;

    if report.solved {
        writeln!(out, "{}", "All letters match!".green().bold())
    } else {
        writeln!(
            out,
            "{} exact, {} misplaced",
            report.turn.score.count_matches(),
            report.turn.score.count_partials()
        )
    }
}
