//! Terminal output formatting
//!
//! Board rendering and per-turn messages, kept out of the game core.

mod render;

pub use render::{BoardRenderer, RenderMode, Renderer};
