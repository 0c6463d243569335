//! Running games.
//!
//! `GameInstance` owns every location of one game plus its turn state, and
//! is the only way to change either.

mod instance;

pub use instance::GameInstance;
