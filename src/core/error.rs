//! Engine error type.
//!
//! Every failure in the engine is local and synchronous. Errors are returned
//! to the caller, never retried. Most of them indicate a programming error on
//! the caller's side (submitting an action that is not in the current legal
//! list, or building a game from settings that cannot deal two hands).

use thiserror::Error;

use super::action::{Action, ActionKind};
use crate::cards::CardKey;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised by the rules engine and its data model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A location was described by a kind/suit/player combination that
    /// does not name any location.
    #[error("invalid location spec: kind={kind}, suit={suit:?}, player={player:?}")]
    InvalidLocationSpec {
        kind: String,
        suit: Option<u32>,
        player: Option<u8>,
    },

    /// The generated deck cannot cover both starting hands.
    #[error("deck of {available} cards cannot deal two hands ({required} cards needed)")]
    InsufficientDeck { required: usize, available: usize },

    /// Draw from a location with no cards.
    #[error("cannot draw from empty location {location}")]
    EmptyLocation { location: String },

    /// Extract of a key that is not present in the location.
    #[error("card {key} not found in location {location}")]
    CardNotFound { key: CardKey, location: String },

    /// Unrecognized action tag.
    #[error("invalid action type: {tag}")]
    InvalidActionType { tag: String },

    /// An action kind that targets a card was built without one.
    #[error("action {kind} requires a card")]
    MissingCard { kind: ActionKind },

    /// A settings field is out of range.
    #[error("invalid settings: {field} must be at least {min}")]
    InvalidSettings { field: &'static str, min: u32 },

    /// Checked submit rejected an action that is not currently legal.
    #[error("illegal action {action} in current state")]
    IllegalAction { action: Action },
}
