//! Game configuration
//!
//! Configuration is validated once at construction and immutable afterwards.
//! An invalid combination fails construction rather than being clamped.

use super::{Color, PALETTE};
use std::fmt;

/// Immutable game parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    allow_duplicates: bool,
    color_count: usize,
    code_length: usize,
    max_guesses: usize,
}

/// Error type for invalid configurations
///
/// Each variant names the constraint it violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `color_count` outside `2..=8`
    ColorCountOutOfRange(usize),
    /// `code_length` must be at least 1
    ZeroCodeLength,
    /// `max_guesses` must be at least 1
    ZeroMaxGuesses,
    /// Without duplicates, a code cannot be longer than the active palette
    CodeLongerThanColors {
        code_length: usize,
        color_count: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColorCountOutOfRange(count) => write!(
                f,
                "Color count must be between 2 and {}, got {count}",
                PALETTE.len()
            ),
            Self::ZeroCodeLength => write!(f, "Code length must be at least 1"),
            Self::ZeroMaxGuesses => write!(f, "Guess budget must be at least 1"),
            Self::CodeLongerThanColors {
                code_length,
                color_count,
            } => write!(
                f,
                "Without duplicates a {code_length}-peg code needs at least \
                 {code_length} colors, got {color_count}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - `color_count` is not in `2..=8`
    /// - `code_length` or `max_guesses` is zero
    /// - duplicates are disallowed and `code_length > color_count`
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Config;
    ///
    /// let config = Config::new(false, 8, 5, 12).unwrap();
    /// assert_eq!(config.code_length(), 5);
    ///
    /// // 5 distinct pegs cannot be drawn from 3 colors
    /// assert!(Config::new(false, 3, 5, 12).is_err());
    /// ```
    pub const fn new(
        allow_duplicates: bool,
        color_count: usize,
        code_length: usize,
        max_guesses: usize,
    ) -> Result<Self, ConfigError> {
        if color_count < 2 || color_count > PALETTE.len() {
            return Err(ConfigError::ColorCountOutOfRange(color_count));
        }
        if code_length == 0 {
            return Err(ConfigError::ZeroCodeLength);
        }
        if max_guesses == 0 {
            return Err(ConfigError::ZeroMaxGuesses);
        }
        if !allow_duplicates && code_length > color_count {
            return Err(ConfigError::CodeLongerThanColors {
                code_length,
                color_count,
            });
        }
        Ok(Self {
            allow_duplicates,
            color_count,
            code_length,
            max_guesses,
        })
    }

    /// Whether the secret may repeat colors
    #[inline]
    #[must_use]
    pub const fn allow_duplicates(self) -> bool {
        self.allow_duplicates
    }

    /// Number of colors in play
    #[inline]
    #[must_use]
    pub const fn color_count(self) -> usize {
        self.color_count
    }

    /// Number of pegs in the secret code
    #[inline]
    #[must_use]
    pub const fn code_length(self) -> usize {
        self.code_length
    }

    /// Maximum number of accepted guesses
    #[inline]
    #[must_use]
    pub const fn max_guesses(self) -> usize {
        self.max_guesses
    }

    /// The active color subset: the first `color_count` palette entries
    #[inline]
    #[must_use]
    pub fn active_colors(self) -> &'static [Color] {
        // Promoted reference, so the slice borrows the palette itself rather
        // than a temporary copy of the const.
        const COLORS: &[Color; 8] = &PALETTE;
        &COLORS[..self.color_count]
    }

    /// Whether `color` is legal in this game
    #[inline]
    #[must_use]
    pub const fn allows(self, color: Color) -> bool {
        color.index() < self.color_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape_is_valid() {
        let config = Config::new(false, 8, 5, 12).unwrap();
        assert_eq!(config.color_count(), 8);
        assert_eq!(config.code_length(), 5);
        assert_eq!(config.max_guesses(), 12);
        assert!(!config.allow_duplicates());
    }

    #[test]
    fn color_count_bounds_enforced() {
        assert_eq!(
            Config::new(false, 1, 1, 12),
            Err(ConfigError::ColorCountOutOfRange(1))
        );
        assert_eq!(
            Config::new(true, 9, 5, 12),
            Err(ConfigError::ColorCountOutOfRange(9))
        );
        assert!(Config::new(true, 2, 5, 12).is_ok());
    }

    #[test]
    fn zero_fields_rejected() {
        assert_eq!(Config::new(true, 8, 0, 12), Err(ConfigError::ZeroCodeLength));
        assert_eq!(Config::new(true, 8, 5, 0), Err(ConfigError::ZeroMaxGuesses));
    }

    #[test]
    fn code_longer_than_colors_rejected_without_duplicates() {
        assert_eq!(
            Config::new(false, 3, 5, 12),
            Err(ConfigError::CodeLongerThanColors {
                code_length: 5,
                color_count: 3
            })
        );
        // Same shape is fine once duplicates are allowed
        assert!(Config::new(true, 3, 5, 12).is_ok());
    }

    #[test]
    fn active_colors_is_palette_prefix() {
        let config = Config::new(true, 4, 3, 5).unwrap();
        assert_eq!(config.active_colors(), &PALETTE[..4]);
        assert!(config.allows(PALETTE[3]));
        assert!(!config.allows(PALETTE[4]));
    }
}
