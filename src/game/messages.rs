//! Congratulation messages, indexed by the attempt that won

use super::MAX_ATTEMPTS;

/// Message for a win on attempt `n` lives at index `n - 1`
pub const WIN_MESSAGES: [&str; MAX_ATTEMPTS] = [
    "Genius",
    "Magnificent",
    "Impressive",
    "Splendid",
    "Great",
    "Phew",
];

/// Look up the message for a win after `attempts` guesses
///
/// Returns `None` outside 1..=6.
#[must_use]
pub fn win_message(attempts: usize) -> Option<&'static str> {
    attempts
        .checked_sub(1)
        .and_then(|index| WIN_MESSAGES.get(index))
        .copied()
}
