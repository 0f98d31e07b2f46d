//! Wordle Game
//!
//! A terminal word-guessing game: guess the hidden 5-letter word in six tries.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterMatch, Score, Word};
//! use wordle_game::game::{Game, GameState, SubmitResult};
//!
//! let solution = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//! let score = Score::calculate(&solution, &guess);
//! assert_eq!(score.matches()[1], LetterMatch::Match);
//!
//! let mut game = Game::new(solution);
//! assert_eq!(game.submit("crane").unwrap(), SubmitResult::Scored(GameState::Won));
//! ```

// Core domain types
pub mod core;

// Game state machine and solution selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
