//! Terminal output formatting
//!
//! Display utilities for the game board, messages and command results.

pub mod display;
pub mod formatters;
pub mod screen;

pub use display::{
    print_banner, print_board, print_instructions, print_invalid_guess, print_outcome,
    print_prompt, print_score_report,
};
pub use screen::{NoClear, Screen, TerminalScreen};
