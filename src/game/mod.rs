//! Game engine: state machine, secret generation, and turn control
//!
//! [`Game`] owns the secret and history and performs no I/O. [`Controller`]
//! validates raw input against the configuration and drives the state machine.

mod controller;
pub mod secret;
mod state;

pub use controller::{Controller, Rejection, TurnOutcome};
pub use state::{Game, Status};
