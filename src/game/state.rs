//! Game state machine
//!
//! A `Game` owns the solution and the append-only history of scored guesses.
//! Only valid guesses advance it; invalid input leaves it untouched.

use super::messages::win_message;
use super::{MAX_ATTEMPTS, QUIT_SENTINEL};
use crate::core::{Score, Word, WordError, is_all_match, normalize};
use std::fmt;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
    Quit,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One scored attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub score: Score,
}

/// What a successful submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// The guess was scored; carries the state after it
    Scored(GameState),
    Quit,
}

/// Final result of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won {
        attempts: usize,
        message: &'static str,
    },
    Lost {
        solution: Word,
    },
    Quit,
}

/// Rejected submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidGuess(WordError),
    Finished(GameState),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::Finished(state) => write!(f, "Game is already over ({state:?})"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            Self::Finished(_) => None,
        }
    }
}

/// A single game session
#[derive(Debug, Clone)]
pub struct Game {
    solution: Word,
    history: Vec<Turn>,
    state: GameState,
}

impl Game {
    /// Start a game with a fixed solution
    #[must_use]
    pub fn new(solution: Word) -> Self {
        Self {
            solution,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            state: GameState::InProgress,
        }
    }

    /// Submit one line of player input
    ///
    /// The input is normalized first. The quit sentinel ends the game; any other
    /// input must be a valid word to be scored and counted.
    ///
    /// # Errors
    /// - `GameError::Finished` if the game already reached a terminal state
    /// - `GameError::InvalidGuess` if the input is not a 5-letter word; the
    ///   attempt counter and history are unchanged
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Game, GameState, SubmitResult};
    ///
    /// let mut game = Game::new(Word::new("crane").unwrap());
    /// assert!(game.submit("cr4ne").is_err());
    /// assert_eq!(game.attempts(), 0);
    ///
    /// let result = game.submit("crane").unwrap();
    /// assert_eq!(result, SubmitResult::Scored(GameState::Won));
    /// ```
    pub fn submit(&mut self, input: &str) -> Result<SubmitResult, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::Finished(self.state));
        }

        let input = normalize(input.trim());
        if input == QUIT_SENTINEL {
            self.state = GameState::Quit;
            return Ok(SubmitResult::Quit);
        }

        let guess = Word::new(&input).map_err(GameError::InvalidGuess)?;
        let score = Score::calculate(&self.solution, &guess);
        let won = is_all_match(&self.solution, &guess);
        self.history.push(Turn { guess, score });

        if won {
            self.state = GameState::Won;
        } else if self.history.len() >= MAX_ATTEMPTS {
            self.state = GameState::Lost;
        }

        Ok(SubmitResult::Scored(self.state))
    }

    /// Abandon the game
    ///
    /// Has no effect once the game is over.
    pub fn quit(&mut self) {
        if !self.state.is_terminal() {
            self.state = GameState::Quit;
        }
    }

    /// Final result, or `None` while the game is still running
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::InProgress => None,
            GameState::Won => Some(Outcome::Won {
                attempts: self.attempts(),
                message: win_message(self.attempts()).unwrap_or("Solved"),
            }),
            GameState::Lost => Some(Outcome::Lost {
                solution: self.solution.clone(),
            }),
            GameState::Quit => Some(Outcome::Quit),
        }
    }

    /// Number of valid guesses so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }
}
