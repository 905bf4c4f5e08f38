//! Turn controller
//!
//! Sits between raw player input and the game state: normalizes the text,
//! validates its shape and alphabet against the configuration, and only then
//! lets the attempt reach [`Game::submit_guess`]. Rejected input never
//! consumes a guess.

use super::{Game, Status};
use crate::core::{Code, Color, Score};
use std::fmt;

/// Why a raw input was rejected without being counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The normalized input has the wrong number of pegs
    WrongSize { got: usize, want: usize },
    /// A symbol outside the active color subset (or the palette entirely)
    InvalidSymbol(char),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongSize { got, want } => {
                write!(f, "Invalid guess size: expected {want} pegs, got {got}")
            }
            Self::InvalidSymbol(ch) => write!(f, "Invalid color symbol: {ch}"),
        }
    }
}

/// Result of feeding one line of input to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Guess accepted and scored; the game goes on
    Continue(Score),
    /// Guess accepted and it broke the code (terminal)
    Won(Score),
    /// Guess accepted and it was the last of the budget (terminal)
    Lost(Score),
    /// Input rejected before scoring; no guess consumed
    Rejected(Rejection),
}

/// Drives the turn loop against a [`Game`]
#[derive(Debug)]
pub struct Controller {
    game: Game,
}

impl Controller {
    /// Wrap a game for turn-by-turn play
    #[must_use]
    pub const fn new(game: Game) -> Self {
        Self { game }
    }

    /// The underlying game, for rendering
    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Play one turn from raw input
    ///
    /// Normalizes the text (trim, uppercase, strip interior spaces), then
    /// validates size and alphabet. Only a fully valid attempt is submitted
    /// and counted; anything else returns `Rejected` and leaves the game
    /// untouched.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Config};
    /// use mastermind::game::{Controller, Game, TurnOutcome};
    ///
    /// let config = Config::new(false, 8, 5, 12).unwrap();
    /// let game = Game::with_secret(config, Code::from_text("WKRGB").unwrap());
    /// let mut controller = Controller::new(game);
    ///
    /// assert!(matches!(
    ///     controller.run_turn("  w k r g b "),
    ///     TurnOutcome::Won(_)
    /// ));
    /// ```
    pub fn run_turn(&mut self, raw: &str) -> TurnOutcome {
        let normalized = normalize(raw);
        let want = self.game.config().code_length();

        let got = normalized.chars().count();
        if got != want {
            return TurnOutcome::Rejected(Rejection::WrongSize { got, want });
        }

        for ch in normalized.chars() {
            match Color::from_letter(ch) {
                Some(color) if self.game.config().allows(color) => {}
                _ => return TurnOutcome::Rejected(Rejection::InvalidSymbol(ch)),
            }
        }

        let attempt = Code::from_text(&normalized).expect("symbols validated above");
        let (score, won) = self
            .game
            .submit_guess(attempt)
            .expect("attempt size validated above");

        if won {
            TurnOutcome::Won(score)
        } else if self.game.status() == Status::Lost {
            TurnOutcome::Lost(score)
        } else {
            TurnOutcome::Continue(score)
        }
    }
}

/// Trim, uppercase, and strip interior spaces
fn normalize(raw: &str) -> String {
    raw.trim().replace(' ', "").to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn controller(color_count: usize, max_guesses: usize) -> Controller {
        let config = Config::new(false, color_count, 5, max_guesses).unwrap();
        let game = Game::with_secret(config, Code::from_text("WKRGB").unwrap());
        Controller::new(game)
    }

    #[test]
    fn accepted_guess_is_scored_and_counted() {
        let mut ctrl = controller(8, 12);
        let outcome = ctrl.run_turn("BGRKW");

        assert_eq!(
            outcome,
            TurnOutcome::Continue(Score {
                exact: 1,
                color_only: 4
            })
        );
        assert_eq!(ctrl.game().history().len(), 1);
    }

    #[test]
    fn input_is_normalized_before_validation() {
        let mut ctrl = controller(8, 12);
        assert!(matches!(ctrl.run_turn("  w K r g B \n"), TurnOutcome::Won(_)));
    }

    #[test]
    fn wrong_size_is_rejected_without_consuming_a_guess() {
        let mut ctrl = controller(8, 12);
        let outcome = ctrl.run_turn("WKR");

        assert_eq!(
            outcome,
            TurnOutcome::Rejected(Rejection::WrongSize { got: 3, want: 5 })
        );
        assert!(ctrl.game().history().is_empty());
    }

    #[test]
    fn unknown_symbol_is_rejected_with_the_first_offender() {
        let mut ctrl = controller(8, 12);
        let outcome = ctrl.run_turn("WXZGB");

        assert_eq!(
            outcome,
            TurnOutcome::Rejected(Rejection::InvalidSymbol('X'))
        );
        assert!(ctrl.game().history().is_empty());
    }

    #[test]
    fn palette_color_outside_active_subset_is_rejected() {
        // 5 colors in play: W K R G B. P is a palette letter but not active.
        let mut ctrl = controller(5, 12);
        let outcome = ctrl.run_turn("WKRGP");

        assert_eq!(
            outcome,
            TurnOutcome::Rejected(Rejection::InvalidSymbol('P'))
        );
        assert!(ctrl.game().history().is_empty());
    }

    #[test]
    fn rejections_do_not_count_toward_the_budget() {
        let mut ctrl = controller(8, 2);

        assert!(matches!(ctrl.run_turn("WKR"), TurnOutcome::Rejected(_)));
        assert!(matches!(ctrl.run_turn("WXZGB"), TurnOutcome::Rejected(_)));
        assert!(matches!(ctrl.run_turn("PPPPP"), TurnOutcome::Continue(_)));
        assert!(matches!(ctrl.run_turn("PPPPP"), TurnOutcome::Lost(_)));

        assert_eq!(ctrl.game().history().len(), 2);
    }

    #[test]
    fn final_budgeted_guess_reports_lost() {
        let mut ctrl = controller(8, 1);
        assert!(matches!(ctrl.run_turn("PPPPP"), TurnOutcome::Lost(_)));
        assert_eq!(ctrl.game().status(), Status::Lost);
    }

    #[test]
    fn winning_guess_reports_won_even_on_last_budgeted_turn() {
        let mut ctrl = controller(8, 1);
        assert!(matches!(ctrl.run_turn("WKRGB"), TurnOutcome::Won(_)));
        assert_eq!(ctrl.game().status(), Status::Won);
    }
}
