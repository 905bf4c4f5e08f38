//! Peg colors and the fixed palette
//!
//! The palette is a fixed ordered set of 8 distinct colors. A game plays with
//! the first `color_count` entries of this order, so "allowed colors" listings
//! are reproducible across runs.

use std::fmt;

/// A single peg color, identified by a one-letter symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// `W`
    White,
    /// `K`
    Black,
    /// `R`
    Red,
    /// `G`
    Green,
    /// `B`
    Blue,
    /// `Y`
    Yellow,
    /// `O`
    Orange,
    /// `P`
    Purple,
}

/// The fixed palette, in canonical order
///
/// The active color subset of a game is always a prefix of this array.
pub const PALETTE: [Color; 8] = [
    Color::White,
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Orange,
    Color::Purple,
];

impl Color {
    /// The one-letter symbol for this color
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::White => 'W',
            Self::Black => 'K',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Purple => 'P',
        }
    }

    /// Parse a color from its one-letter symbol (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_letter('K'), Some(Color::Black));
    /// assert_eq!(Color::from_letter('k'), Some(Color::Black));
    /// assert_eq!(Color::from_letter('X'), None);
    /// ```
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'W' => Some(Self::White),
            'K' => Some(Self::Black),
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'Y' => Some(Self::Yellow),
            'O' => Some(Self::Orange),
            'P' => Some(Self::Purple),
            _ => None,
        }
    }

    /// Position of this color in [`PALETTE`] (0-7)
    ///
    /// Used as an index into fixed-size count arrays during scoring.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_symbols_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a.letter(), b.letter());
            }
        }
    }

    #[test]
    fn palette_order_matches_indices() {
        for (i, color) in PALETTE.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn letter_round_trip() {
        for color in PALETTE {
            assert_eq!(Color::from_letter(color.letter()), Some(color));
            assert_eq!(
                Color::from_letter(color.letter().to_ascii_lowercase()),
                Some(color)
            );
        }
    }

    #[test]
    fn from_letter_rejects_unknown_symbols() {
        assert_eq!(Color::from_letter('X'), None);
        assert_eq!(Color::from_letter('1'), None);
        assert_eq!(Color::from_letter(' '), None);
    }

    #[test]
    fn display_is_the_letter() {
        assert_eq!(format!("{}", Color::White), "W");
        assert_eq!(format!("{}", Color::Purple), "P");
    }
}
