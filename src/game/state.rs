//! Game state and the win/loss state machine
//!
//! A [`Game`] owns the secret, the configuration, and the append-only guess
//! history. It performs no I/O; the controller feeds it validated attempts.

use super::secret;
use crate::core::{Code, Config, Score, ScoreError};
use rand::Rng;

/// Progress of a game
///
/// Stored explicitly and updated once per transition, so terminality is an
/// invariant rather than something recomputed from the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Guesses remain and the code has not been broken
    InProgress,
    /// A guess matched the secret exactly (terminal)
    Won,
    /// The guess budget ran out without a win (terminal)
    Lost,
}

impl Status {
    /// Whether no further guesses are accepted
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game of Mastermind: secret, configuration, and guess history
#[derive(Debug, Clone)]
pub struct Game {
    config: Config,
    secret: Code,
    history: Vec<(Code, Score)>,
    status: Status,
}

impl Game {
    /// Create a game with a freshly generated secret
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Config;
    /// use mastermind::game::Game;
    ///
    /// let config = Config::new(false, 8, 5, 12).unwrap();
    /// let game = Game::new(config, &mut rand::rng());
    /// assert_eq!(game.secret().len(), 5);
    /// ```
    #[must_use]
    pub fn new(config: Config, rng: &mut impl Rng) -> Self {
        let secret = secret::generate(config, rng);
        Self::with_secret(config, secret)
    }

    /// Create a game with a fixed secret
    ///
    /// Useful for deterministic tests and demos. The secret is taken as-is;
    /// it should satisfy the configuration's length and color constraints.
    #[must_use]
    pub const fn with_secret(config: Config, secret: Code) -> Self {
        Self {
            config,
            secret,
            history: Vec::new(),
            status: Status::InProgress,
        }
    }

    /// Score an attempt and record it in the history
    ///
    /// Returns the score and whether this guess won the game. Every accepted
    /// attempt appends exactly one history entry; repeated identical attempts
    /// are recorded independently.
    ///
    /// Transitions: to `Won` when every peg matches, otherwise to `Lost` once
    /// the history reaches the guess budget. Terminal states are final.
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the attempt length differs from
    /// the code length. The caller is expected to validate size beforehand;
    /// this error indicates a controller defect, not a game outcome.
    ///
    /// # Panics
    /// Panics if called after the game has reached `Won` or `Lost`. A correct
    /// controller stops the turn loop on a terminal status.
    pub fn submit_guess(&mut self, attempt: Code) -> Result<(Score, bool), ScoreError> {
        assert!(
            !self.status.is_terminal(),
            "guess submitted after the game ended"
        );

        let score = Score::of(&attempt, &self.secret)?;
        self.history.push((attempt, score));

        let won = score.is_win(self.config.code_length());
        if won {
            self.status = Status::Won;
        } else if self.history.len() == self.config.max_guesses() {
            self.status = Status::Lost;
        }

        Ok((score, won))
    }

    /// The game configuration
    #[inline]
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// The secret code
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Accepted guesses with their scores, in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Code, Score)] {
        &self.history
    }

    /// Current progress
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Guesses left in the budget
    #[inline]
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.config.max_guesses() - self.history.len()
    }
}
