//! Solution selection
//!
//! The random source is injected so games can be replayed from a seed.

use crate::core::Word;
use crate::wordlists::WordPool;
use rand::rngs::StdRng;
use rand::prelude::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Build the game RNG, drawing a fresh seed when none is given
///
/// Returns the seed actually used so a game can be reproduced.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    (StdRng::seed_from_u64(seed), seed)
}

/// Pick one solution uniformly from the pool
///
/// Returns `None` only for an empty pool, which `WordPool` never holds.
///
/// # Examples
/// ```
/// use wordle_game::game::{seeded_rng, select_solution};
/// use wordle_game::wordlists::{WordPool, WordSource};
///
/// let pool = WordPool::load(&WordSource::Embedded).unwrap();
/// let (mut rng, _) = seeded_rng(Some(7));
/// let solution = select_solution(&pool, &mut rng).unwrap();
/// assert!(pool.words().contains(&solution));
/// ```
pub fn select_solution<R: Rng + ?Sized>(pool: &WordPool, rng: &mut R) -> Option<Word> {
    pool.words().choose(rng).cloned()
}
