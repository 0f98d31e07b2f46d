//! Interactive play mode
//!
//! Line-based game loop: read a guess, score it, redraw the board.

use crate::game::{Game, GameError, Outcome, SubmitResult};
use crate::output::{
    Screen, print_banner, print_board, print_instructions, print_invalid_guess, print_outcome,
    print_prompt,
};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Run one game to completion
///
/// Reads guesses line by line from `input` and writes everything to `out`.
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R, W, S>(game: &mut Game, input: &mut R, out: &mut W, screen: &mut S) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
    S: Screen,
{
    screen.clear(out).context("Failed to clear screen")?;
    print_banner(out)?;
    print_instructions(out)?;

    loop {
        if let Some(outcome) = game.outcome() {
            print_outcome(out, &outcome, game.history())?;
            return Ok(outcome);
        }

        print_prompt(out, game.attempts() + 1)?;

        let mut line = Vec::new();
        if input
            .read_until(b'\n', &mut line)
            .context("Failed to read guess")?
            == 0
        {
            writeln!(out)?;
            game.quit();
            continue;
        }

        // Undecodable bytes become U+FFFD and fail validation like any other bad guess
        match game.submit(&String::from_utf8_lossy(&line)) {
            Ok(SubmitResult::Scored(_)) => {
                screen.clear(out).context("Failed to clear screen")?;
                print_banner(out)?;
                print_board(out, game.history())?;
            }
            Ok(SubmitResult::Quit) => {}
            Err(GameError::InvalidGuess(err)) => print_invalid_guess(out, &err)?,
            Err(err @ GameError::Finished(_)) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameState;
    use crate::output::NoClear;
    use std::io::{self, Cursor};

    /// Counts clears instead of touching the output
    #[derive(Default)]
    struct CountingScreen {
        clears: usize,
    }

    impl Screen for CountingScreen {
        fn clear<W: Write>(&mut self, _out: &mut W) -> io::Result<()> {
            self.clears += 1;
            Ok(())
        }
    }

    fn play(solution: &str, script: &str) -> (Game, Outcome, String) {
        let mut game = Game::new(Word::new(solution).unwrap());
        let mut input = Cursor::new(script.as_bytes());
        let mut out = Vec::new();
        let outcome = run_play(&mut game, &mut input, &mut out, &mut NoClear).unwrap();
        (game, outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_in_two() {
        let (game, outcome, text) = play("crane", "slate\ncrane\n");

        assert_eq!(
            outcome,
            Outcome::Won {
                attempts: 2,
                message: "Magnificent"
            }
        );
        assert_eq!(game.history().len(), 2);
        assert!(text.contains("Guess 1/6: "));
        assert!(text.contains("Guess 2/6: "));
        assert!(!text.contains("Guess 3/6: "));
    }

    #[test]
    fn invalid_input_is_reprompted_without_using_attempt() {
        let (game, outcome, text) = play("crane", "abc\n12345\ncrane\n");

        assert_eq!(
            outcome,
            Outcome::Won {
                attempts: 1,
                message: "Genius"
            }
        );
        assert_eq!(game.attempts(), 1);
        assert_eq!(text.matches("Guess 1/6: ").count(), 3);
    }

    #[test]
    fn six_misses_reveal_solution() {
        let (game, outcome, text) = play("crane", "slate\nmoist\naudio\nbrick\nplumb\ntrace\n");

        assert_eq!(
            outcome,
            Outcome::Lost {
                solution: Word::new("crane").unwrap()
            }
        );
        assert_eq!(game.state(), GameState::Lost);
        assert!(text.contains("The word was: "));
    }

    #[test]
    fn extra_input_after_game_end_is_ignored() {
        let (game, _, _) = play("crane", "crane\nslate\nslate\n");
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn quit_sentinel_stops_the_game() {
        let (game, outcome, text) = play("crane", "slate\nq\ncrane\n");

        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(game.attempts(), 1);
        assert!(text.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn non_utf8_guess_is_rejected_and_reprompted() {
        let mut game = Game::new(Word::new("crane").unwrap());
        let mut input = Cursor::new(&b"caf\xe9s\ncrane\n"[..]);
        let mut out = Vec::new();

        let outcome = run_play(&mut game, &mut input, &mut out, &mut NoClear).unwrap();
        assert_eq!(
            outcome,
            Outcome::Won {
                attempts: 1,
                message: "Genius"
            }
        );

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Word must contain only ASCII letters"), "{text}");
        assert_eq!(text.matches("Guess 1/6: ").count(), 2);
    }

    #[test]
    fn end_of_input_quits() {
        let (game, outcome, _) = play("crane", "slate\n");
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn screen_cleared_at_start_and_after_each_valid_guess() {
        let mut game = Game::new(Word::new("crane").unwrap());
        let mut input = Cursor::new("slate\nxx\ncrane\n".as_bytes());
        let mut out = Vec::new();
        let mut screen = CountingScreen::default();

        run_play(&mut game, &mut input, &mut out, &mut screen).unwrap();
        assert_eq!(screen.clears, 3);
    }
}
