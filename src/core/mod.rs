//! Core engine types: players, settings, actions, turn state, RNG, errors.
//!
//! These are the building blocks the rules engine is assembled from. None of
//! them touch card locations directly.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind, ActionRecord};
pub use config::GameSettings;
pub use error::{EngineError, Result};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::{Phase, TurnState};
