//! Moves a player can submit.
//!
//! `Action` is a sum type with one variant per move kind. Variants that move
//! a specific card carry that card; drawing from the deck carries nothing.
//! `ActionKind` is the bare tag, used for parsing the textual form
//! (`draw_deck`, `play_playpile`, ...) and for display.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{EngineError, Result};
use super::player::PlayerId;
use super::state::Phase;
use crate::cards::Card;

/// Tag of an action, without its card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    DrawDeck,
    DrawDiscard,
    PlayDiscard,
    PlayPlayPile,
}

impl ActionKind {
    /// Textual tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionKind::DrawDeck => "draw_deck",
            ActionKind::DrawDiscard => "draw_discard",
            ActionKind::PlayDiscard => "play_discard",
            ActionKind::PlayPlayPile => "play_playpile",
        }
    }

    /// Whether this kind moves a specific card.
    #[must_use]
    pub const fn needs_card(self) -> bool {
        !matches!(self, ActionKind::DrawDeck)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = EngineError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "draw_deck" => Ok(ActionKind::DrawDeck),
            "draw_discard" => Ok(ActionKind::DrawDiscard),
            "play_discard" => Ok(ActionKind::PlayDiscard),
            "play_playpile" => Ok(ActionKind::PlayPlayPile),
            _ => Err(EngineError::InvalidActionType {
                tag: tag.to_string(),
            }),
        }
    }
}

/// A move.
///
/// ```
/// use handshake_cards::cards::Card;
/// use handshake_cards::core::{Action, ActionKind};
///
/// let action = Action::from_parts("play_playpile", Some(Card::regular(1, 4))).unwrap();
/// assert_eq!(action.kind(), ActionKind::PlayPlayPile);
/// assert_eq!(action.to_string(), "play_playpile(s01-v04)");
///
/// assert!(Action::from_parts("shuffle", None).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the top card of the deck into hand.
    DrawDeck,
    /// Draw the top card of `card`'s suit discard pile into hand.
    DrawDiscard { card: Card },
    /// Move `card` from hand to its suit's discard pile.
    PlayDiscard { card: Card },
    /// Move `card` from hand to the active player's play pile for its suit.
    PlayPlayPile { card: Card },
}

impl Action {
    /// Build an action from its tag and optional card.
    ///
    /// Unknown tags fail with `InvalidActionType`; card-moving kinds without
    /// a card fail with `MissingCard`. A card given with `draw_deck` is
    /// ignored.
    pub fn from_parts(tag: &str, card: Option<Card>) -> Result<Self> {
        let kind: ActionKind = tag.parse()?;
        match (kind, card) {
            (ActionKind::DrawDeck, _) => Ok(Action::DrawDeck),
            (ActionKind::DrawDiscard, Some(card)) => Ok(Action::DrawDiscard { card }),
            (ActionKind::PlayDiscard, Some(card)) => Ok(Action::PlayDiscard { card }),
            (ActionKind::PlayPlayPile, Some(card)) => Ok(Action::PlayPlayPile { card }),
            (kind, None) => Err(EngineError::MissingCard { kind }),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::DrawDeck => ActionKind::DrawDeck,
            Action::DrawDiscard { .. } => ActionKind::DrawDiscard,
            Action::PlayDiscard { .. } => ActionKind::PlayDiscard,
            Action::PlayPlayPile { .. } => ActionKind::PlayPlayPile,
        }
    }

    /// The card this action moves, if it names one.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            Action::DrawDeck => None,
            Action::DrawDiscard { card }
            | Action::PlayDiscard { card }
            | Action::PlayPlayPile { card } => Some(card),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.card() {
            Some(card) => write!(f, "{}({})", self.kind(), card),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// An applied action with the context it was applied in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Player who submitted the action.
    pub player: PlayerId,
    /// Turn number when it was applied.
    pub turn: u32,
    /// Phase it was applied in.
    pub phase: Phase,
    /// The action.
    pub action: Action,
}
