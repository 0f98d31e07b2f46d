//! Game session logic
//!
//! Solution selection, the attempt state machine and the win-message table.

mod messages;
mod selector;
mod state;

pub use messages::{WIN_MESSAGES, win_message};
pub use selector::{seeded_rng, select_solution};
pub use state::{Game, GameError, GameState, Outcome, SubmitResult, Turn};

/// Number of valid guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Input that abandons the game, compared after normalization
pub const QUIT_SENTINEL: &str = "Q";
