//! Duplicate-safe guess scoring
//!
//! A score is the pair of feedback counts for one guess:
//! - `exact`: pegs with the right color in the right position
//! - `color_only`: pegs with a right color in a wrong position
//!
//! Color-only matches are counted with a multiset intersection over the
//! positions that did not match exactly. Excluding exact matches from both
//! sides first is what makes the rule duplicate-safe: a correctly placed peg
//! never also counts as a color-only match.

use super::{Code, PALETTE};
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Right color, right position
    pub exact: usize,
    /// Right color, wrong position
    pub color_only: usize,
}

/// Error type for scoring contract violations
///
/// A length mismatch means the caller submitted an attempt without validating
/// its size first. It signals a programming defect, not a game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    LengthMismatch { attempt: usize, secret: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { attempt, secret } => write!(
                f,
                "Attempt length {attempt} does not match secret length {secret}"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

impl Score {
    /// Score `attempt` against `secret`
    ///
    /// # Algorithm
    /// 1. Single pass over positions: count exact matches; for every non-exact
    ///    position, tally the attempt color and the secret color into
    ///    fixed-size count arrays indexed by palette position.
    /// 2. `color_only` is the sum over the palette of
    ///    `min(attempt_count, secret_count)`.
    ///
    /// The count arrays cover the full 8-color palette, so scoring never
    /// allocates.
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the two codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let secret = Code::from_text("WKRGB").unwrap();
    /// let attempt = Code::from_text("BGRKW").unwrap();
    /// let score = Score::of(&attempt, &secret).unwrap();
    /// assert_eq!((score.exact, score.color_only), (1, 4));
    /// ```
    pub fn of(attempt: &Code, secret: &Code) -> Result<Self, ScoreError> {
        if attempt.len() != secret.len() {
            return Err(ScoreError::LengthMismatch {
                attempt: attempt.len(),
                secret: secret.len(),
            });
        }

        let mut exact = 0;
        let mut attempt_counts = [0usize; PALETTE.len()];
        let mut secret_counts = [0usize; PALETTE.len()];

        for (a, s) in attempt.colors().iter().zip(secret.colors()) {
            if a == s {
                exact += 1;
            } else {
                attempt_counts[a.index()] += 1;
                secret_counts[s.index()] += 1;
            }
        }

        let color_only = attempt_counts
            .iter()
            .zip(&secret_counts)
            .map(|(&a, &s)| a.min(s))
            .sum();

        Ok(Self { exact, color_only })
    }

    /// Whether this score represents a fully solved code of length `len`
    #[inline]
    #[must_use]
    pub const fn is_win(self, len: usize) -> bool {
        self.exact == len
    }
}
