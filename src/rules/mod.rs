//! Game rules.
//!
//! - `legal`: which actions are legal in a state, and the play-pile
//!   stacking rule
//! - `engine`: the `RulesEngine` trait external players drive a game through

pub mod engine;
pub mod legal;

pub use engine::RulesEngine;
pub use legal::{can_stack, is_game_over, legal_actions};
