//! Ordered color sequences
//!
//! A [`Code`] is an ordered sequence of colors. Both the secret and a player
//! attempt are codes; scoring compares two codes of equal length.

use super::Color;
use std::fmt;

/// An ordered sequence of peg colors
///
/// Displays as space-separated letters, e.g. `W K R G B`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(Vec<Color>);

/// Error type for text that does not parse as a code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeError {
    /// A character with no palette color assigned to it
    UnknownSymbol(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol(ch) => write!(f, "Unknown color symbol: {ch}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from a color sequence
    #[inline]
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Parse a code from symbol text, one letter per peg
    ///
    /// The text is expected to be pre-normalized (no whitespace). Case is
    /// ignored. Membership in the active color subset is a separate concern,
    /// checked by the game controller.
    ///
    /// # Errors
    /// Returns `CodeError::UnknownSymbol` naming the first character that is
    /// not a palette letter.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Color};
    ///
    /// let code = Code::from_text("wkr").unwrap();
    /// assert_eq!(code.colors(), &[Color::White, Color::Black, Color::Red]);
    /// assert!(Code::from_text("wxr").is_err());
    /// ```
    pub fn from_text(text: &str) -> Result<Self, CodeError> {
        let colors = text
            .chars()
            .map(|ch| Color::from_letter(ch).ok_or(CodeError::UnknownSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(colors))
    }

    /// The colors of this code, in order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Number of pegs in this code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this code has no pegs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromIterator<Color> for Code {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
