//! Screen clearing capability
//!
//! The play loop clears the terminal between guesses through this trait, so
//! tests and `--no-clear` runs can swap in a screen that leaves output alone.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Something that can wipe the visible output
pub trait Screen {
    /// Clear the screen backing `out`
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()>;
}

/// Clears a real terminal with crossterm escape sequences
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalScreen;

impl Screen for TerminalScreen {
    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))
    }
}

/// Leaves previous output on screen
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClear;

impl Screen for NoClear {
    fn clear<W: Write>(&mut self, _out: &mut W) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_clear_writes_nothing() {
        let mut out = Vec::new();
        NoClear.clear(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn terminal_screen_emits_clear_and_home() {
        let mut out = Vec::new();
        TerminalScreen.clear(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}[2J"), "{text:?}");
        assert!(text.contains("\u{1b}[1;1H"), "{text:?}");
    }
}
