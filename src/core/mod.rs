//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod color;
mod config;
mod score;

pub use code::{Code, CodeError};
pub use color::{Color, PALETTE};
pub use config::{Config, ConfigError};
pub use score::{Score, ScoreError};
