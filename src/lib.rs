//! Console Mastermind
//!
//! A code-breaking game: a secret sequence of colors is generated, the player
//! submits guesses, and each guess is answered with the number of
//! exact-position matches and color-only matches until the code is broken or
//! the guess budget runs out. Scoring is duplicate-safe: exact matches are
//! excluded before color-only matches are counted with a multiset
//! intersection.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Config, Score};
//!
//! let secret = Code::from_text("WKRGB").unwrap();
//! let attempt = Code::from_text("BGRKW").unwrap();
//!
//! let score = Score::of(&attempt, &secret).unwrap();
//! assert_eq!((score.exact, score.color_only), (1, 4));
//!
//! let config = Config::new(false, 8, 5, 12).unwrap();
//! assert_eq!(config.active_colors().len(), 8);
//! ```

// Core domain types
pub mod core;

// Game engine and turn control
pub mod game;

// Terminal output formatting
pub mod output;
