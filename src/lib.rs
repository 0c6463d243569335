//! # handshake-cards
//!
//! Rules engine for a two-player suited card game.
//!
//! Cards live in named locations: a shared deck, one hand per player, one
//! play pile per (suit, player), and one shared discard pile per suit. Each
//! turn the active player plays a card (onto their own play pile, which must
//! be built in non-decreasing value order, or onto a discard pile) and then
//! draws (from the deck or the top of any discard pile). The game is over
//! when the deck runs out.
//!
//! ## Design Principles
//!
//! 1. **Conservation**: every card is in exactly one location. Each move is a
//!    single removal and a single addition, and failed moves change nothing.
//!
//! 2. **Explicit randomness**: the shuffle and any random policy take a
//!    seeded `GameRng`, so games are reproducible.
//!
//! 3. **Typed moves**: `Action` is a sum type; locations are indexed by a
//!    structured `LocationId`, not by composed strings.
//!
//! ## Modules
//!
//! - `core`: settings, players, actions, turn state, RNG, errors
//! - `cards`: cards, keys, deck generation
//! - `zones`: locations and the location manager
//! - `rules`: legal-action enumeration and the `RulesEngine` trait
//! - `game`: `GameInstance`, the running game
//! - `players`: reference policies
//! - `sim`: play-test harness
//!
//! ## Example
//!
//! ```
//! use handshake_cards::{GameInstance, GameRng, GameSettings};
//!
//! let mut game = GameInstance::new(GameSettings::default(), &mut GameRng::new(1)).unwrap();
//! while !game.is_game_over() {
//!     let action = game.legal_actions().remove(0);
//!     game.submit_action(&action).unwrap();
//! }
//! assert!(game.legal_actions().is_empty());
//! assert_eq!(game.total_cards(), 60);
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod players;
pub mod rules;
pub mod sim;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionRecord, EngineError, GameRng, GameSettings, Phase, PlayerId,
    PlayerMap, Result, TurnState,
};

pub use crate::cards::{generate_deck, make_card_key, Card, CardKey};

pub use crate::zones::{make_location_key, Location, LocationId, LocationKind, LocationManager};

pub use crate::rules::{can_stack, RulesEngine};

pub use crate::game::GameInstance;

pub use crate::players::{LowestPlayer, Player, RandomPlayer};

pub use crate::sim::{run_game, GameSummary, PlaytestConfig, PlaytestError};
