//! Play-test harness.
//!
//! Runs complete games between two `Player` policies and writes a readable
//! log of every state and selected action. Each game gets its own
//! `GameInstance` and RNG, so games are independent and reproducible.

pub mod playtest;

pub use playtest::{game_id, run_game, GameSummary, PlaytestConfig, PlaytestError};
