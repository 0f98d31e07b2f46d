//! Command implementations

pub mod play;
pub mod score;

pub use play::run_play;
pub use score::{ScoreReport, score_words};
