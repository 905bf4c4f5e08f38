//! Secret code generation
//!
//! Generates a uniformly random valid code under the configured duplicate
//! policy. The randomness source is injected so tests can supply a seeded RNG.

use crate::core::{Code, Config};
use rand::Rng;
use rand::seq::SliceRandom;

/// Generate a secret code for `config`
///
/// - Duplicates disallowed: a uniform shuffle of the active color subset,
///   truncated to the code length. Config validation guarantees
///   `code_length <= color_count`, so the pegs are all distinct.
/// - Duplicates allowed: independent uniform draws from the active subset.
#[must_use]
pub fn generate(config: Config, rng: &mut impl Rng) -> Code {
    let active = config.active_colors();

    if config.allow_duplicates() {
        (0..config.code_length())
            .map(|_| active[rng.random_range(0..active.len())])
            .collect()
    } else {
        let mut pool = active.to_vec();
        pool.shuffle(rng);
        pool.truncate(config.code_length());
        Code::new(pool)
    }
}
