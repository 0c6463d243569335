//! Card model: immutable suited cards and their canonical keys.
//!
//! ## Key Types
//!
//! - `Card`: suit + value, identified by its key
//! - `CardKey`: zero-padded string identifier (`s02-v07`, `s01-v00-h3`)
//! - `generate_deck`: the full deck for a `GameSettings`

pub mod card;

pub use card::{generate_deck, make_card_key, Card, CardKey, HANDSHAKE_VALUE};
