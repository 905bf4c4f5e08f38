//! Board rendering
//!
//! The renderer consumes the game state (history, secret length, outcome) and
//! produces text; it holds no game logic. Color is applied per render mode so
//! the same board works on dumb terminals and truecolor ones.

use crate::core::{Code, Color, Score};
use crate::game::{Game, Rejection};
use colored::Colorize;

/// How peg symbols are colored on the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Plain letters, no escape codes
    NoColor,
    /// Standard 8/16-color ANSI palette
    Basic,
    /// 24-bit truecolor, one distinct shade per peg color
    Extended,
}

impl RenderMode {
    /// Create a render mode from its CLI name
    ///
    /// Supported names: "no-color", "8-color", "extended-color", "extended".
    /// Defaults to the 8-color mode if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "no-color" | "none" | "plain" => Self::NoColor,
            "extended-color" | "extended" => Self::Extended,
            _ => Self::Basic,
        }
    }
}

/// Produces the textual board and per-turn messages
///
/// The game core exposes raw scores and symbols only; everything visual lives
/// behind this trait.
pub trait Renderer {
    /// The full board: header plus one row per accepted guess
    fn board(&self, game: &Game) -> String;

    /// The legend of legal color symbols for this game
    fn legend(&self, game: &Game) -> String;

    /// A per-turn rejection message
    fn rejection(&self, rejection: Rejection) -> String;

    /// The secret reveal shown on loss or cancellation
    fn reveal(&self, secret: &Code) -> String;

    /// The banner shown on a win after `turns` guesses
    fn win(&self, turns: usize) -> String;
}

/// Terminal renderer following the classic board layout
#[derive(Debug, Clone, Copy)]
pub struct BoardRenderer {
    mode: RenderMode,
}

impl BoardRenderer {
    /// Create a renderer with the given color mode
    #[must_use]
    pub const fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    fn paint(&self, color: Color) -> String {
        let letter = color.letter().to_string();
        match self.mode {
            RenderMode::NoColor => letter,
            RenderMode::Basic => {
                let painted = match color {
                    Color::White => letter.white(),
                    Color::Black => letter.bright_black(),
                    Color::Red => letter.red(),
                    Color::Green => letter.green(),
                    Color::Blue => letter.blue(),
                    Color::Yellow => letter.yellow(),
                    Color::Orange => letter.bright_red(),
                    Color::Purple => letter.magenta(),
                };
                painted.bold().to_string()
            }
            RenderMode::Extended => {
                let (r, g, b) = truecolor_rgb(color);
                letter.truecolor(r, g, b).bold().to_string()
            }
        }
    }

    fn paint_code(&self, code: &Code) -> String {
        code.colors()
            .iter()
            .map(|&c| self.paint(c))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn row(&self, turn: usize, attempt: &Code, score: Score) -> String {
        format!(
            "[{turn:2}] {} {}   {}",
            score.exact,
            score.color_only,
            self.paint_code(attempt)
        )
    }
}

impl Renderer for BoardRenderer {
    fn board(&self, game: &Game) -> String {
        let slots = "| ".repeat(game.secret().len());
        let mut lines = vec![format!("[##] ! ? < {slots}>")];
        for (i, (attempt, score)) in game.history().iter().enumerate() {
            lines.push(self.row(i + 1, attempt, *score));
        }
        lines.join("\n")
    }

    fn legend(&self, game: &Game) -> String {
        let colors = game
            .config()
            .active_colors()
            .iter()
            .map(|&c| self.paint(c))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "Colors: {colors}  |  {} pegs, {} guesses",
            game.config().code_length(),
            game.config().max_guesses()
        )
    }

    fn rejection(&self, rejection: Rejection) -> String {
        match self.mode {
            RenderMode::NoColor => rejection.to_string(),
            _ => rejection.to_string().red().to_string(),
        }
    }

    fn reveal(&self, secret: &Code) -> String {
        format!("Answer was : {}", self.paint_code(secret))
    }

    fn win(&self, turns: usize) -> String {
        let noun = if turns == 1 { "guess" } else { "guesses" };
        let message = format!("Code broken in {turns} {noun}!");
        match self.mode {
            RenderMode::NoColor => message,
            _ => message.green().bold().to_string(),
        }
    }
}

const fn truecolor_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::White => (235, 235, 235),
        Color::Black => (95, 95, 95),
        Color::Red => (220, 50, 47),
        Color::Green => (0, 170, 80),
        Color::Blue => (40, 110, 230),
        Color::Yellow => (240, 200, 0),
        Color::Orange => (255, 140, 0),
        Color::Purple => (150, 60, 200),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Config};
    use crate::game::Controller;

    fn no_color_game() -> (Controller, BoardRenderer) {
        let config = Config::new(false, 8, 5, 12).unwrap();
        let game = Game::with_secret(config, Code::from_text("WKRGB").unwrap());
        (Controller::new(game), BoardRenderer::new(RenderMode::NoColor))
    }

    #[test]
    fn empty_board_is_just_the_header() {
        let (ctrl, renderer) = no_color_game();
        assert_eq!(renderer.board(ctrl.game()), "[##] ! ? < | | | | | >");
    }

    #[test]
    fn board_rows_show_turn_score_and_guess() {
        let (mut ctrl, renderer) = no_color_game();
        ctrl.run_turn("BGRKW");

        let board = renderer.board(ctrl.game());
        let mut lines = board.lines();
        assert_eq!(lines.next(), Some("[##] ! ? < | | | | | >"));
        assert_eq!(lines.next(), Some("[ 1] 1 4   B G R K W"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn reveal_names_the_secret() {
        let (ctrl, renderer) = no_color_game();
        assert_eq!(renderer.reveal(ctrl.game().secret()), "Answer was : W K R G B");
    }

    #[test]
    fn legend_lists_only_active_colors() {
        let config = Config::new(false, 4, 3, 10).unwrap();
        let game = Game::with_secret(config, Code::from_text("WKR").unwrap());
        let renderer = BoardRenderer::new(RenderMode::NoColor);

        assert_eq!(renderer.legend(&game), "Colors: W K R G  |  3 pegs, 10 guesses");
    }

    #[test]
    fn win_message_pluralizes() {
        let renderer = BoardRenderer::new(RenderMode::NoColor);
        assert_eq!(renderer.win(1), "Code broken in 1 guess!");
        assert_eq!(renderer.win(4), "Code broken in 4 guesses!");
    }

    #[test]
    fn render_mode_from_name() {
        assert_eq!(RenderMode::from_name("no-color"), RenderMode::NoColor);
        assert_eq!(RenderMode::from_name("8-color"), RenderMode::Basic);
        assert_eq!(RenderMode::from_name("extended-color"), RenderMode::Extended);
        assert_eq!(RenderMode::from_name("anything"), RenderMode::Basic);
    }
}
