//! Locations: named, ordered card containers.
//!
//! Every card in a game sits in exactly one location. The end of a
//! location's card list is its top: `draw` and `peek_top` work there, `add`
//! puts cards there.
//!
//! Locations are indexed by `LocationId`, a structured key over
//! (kind, suit, player). The string names (`deck`, `hand_p1`,
//! `play_s00_p2`, `discard_s03`) are derived from it for display.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::cards::{Card, CardKey};
use crate::core::error::{EngineError, Result};
use crate::core::player::PlayerId;

/// Role of a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    Deck,
    Hand,
    Play,
    Discard,
}

impl LocationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LocationKind::Deck => "deck",
            LocationKind::Hand => "hand",
            LocationKind::Play => "play",
            LocationKind::Discard => "discard",
        }
    }
}

impl FromStr for LocationKind {
    type Err = EngineError;

    fn from_str(kind: &str) -> Result<Self> {
        match kind {
            "deck" => Ok(LocationKind::Deck),
            "hand" => Ok(LocationKind::Hand),
            "play" => Ok(LocationKind::Play),
            "discard" => Ok(LocationKind::Discard),
            _ => Err(EngineError::InvalidLocationSpec {
                kind: kind.to_string(),
                suit: None,
                player: None,
            }),
        }
    }
}

/// Structured location key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationId {
    /// The shared draw pile.
    Deck,
    /// A player's hand.
    Hand(PlayerId),
    /// A player's play pile for one suit.
    Play { suit: u32, player: PlayerId },
    /// The shared discard pile for one suit.
    Discard { suit: u32 },
}

impl LocationId {
    /// Resolve a (kind, suit, player) description.
    ///
    /// `Play` needs a suit and a player, `Discard` a suit, `Hand` a player,
    /// `Deck` nothing. Extra fields are ignored. Player numbers other than
    /// 1 and 2 are rejected.
    pub fn from_spec(kind: LocationKind, suit: Option<u32>, player: Option<u8>) -> Result<Self> {
        let seat = player.and_then(PlayerId::new);
        let id = match (kind, suit, seat) {
            (LocationKind::Deck, _, _) => Some(LocationId::Deck),
            (LocationKind::Hand, _, Some(player)) => Some(LocationId::Hand(player)),
            (LocationKind::Play, Some(suit), Some(player)) => Some(LocationId::Play { suit, player }),
            (LocationKind::Discard, Some(suit), _) => Some(LocationId::Discard { suit }),
            _ => None,
        };
        id.ok_or_else(|| EngineError::InvalidLocationSpec {
            kind: kind.as_str().to_string(),
            suit,
            player,
        })
    }

    #[must_use]
    pub const fn kind(self) -> LocationKind {
        match self {
            LocationId::Deck => LocationKind::Deck,
            LocationId::Hand(_) => LocationKind::Hand,
            LocationId::Play { .. } => LocationKind::Play,
            LocationId::Discard { .. } => LocationKind::Discard,
        }
    }

    /// Stable string name.
    #[must_use]
    pub fn name(self) -> String {
        match self {
            LocationId::Deck => "deck".to_string(),
            LocationId::Hand(player) => format!("hand_p{player}"),
            LocationId::Play { suit, player } => format!("play_s{suit:02}_p{player}"),
            LocationId::Discard { suit } => format!("discard_s{suit:02}"),
        }
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// String name for a location described loosely.
///
/// ```
/// use handshake_cards::zones::make_location_key;
///
/// assert_eq!(make_location_key("play", Some(3), Some(2)).unwrap(), "play_s03_p2");
/// assert_eq!(make_location_key("discard", Some(0), None).unwrap(), "discard_s00");
/// assert!(make_location_key("hand", None, None).is_err());
/// assert!(make_location_key("graveyard", None, None).is_err());
/// ```
pub fn make_location_key(kind: &str, suit: Option<u32>, player: Option<u8>) -> Result<String> {
    let kind = kind.parse::<LocationKind>().map_err(|_| EngineError::InvalidLocationSpec {
        kind: kind.to_string(),
        suit,
        player,
    })?;
    Ok(LocationId::from_spec(kind, suit, player)?.name())
}

/// An ordered pile of cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    id: LocationId,
    cards: Vec<Card>,
}

impl Location {
    /// An empty location.
    #[must_use]
    pub fn new(id: LocationId) -> Self {
        Self { id, cards: Vec::new() }
    }

    /// A location holding `cards`, last element on top.
    #[must_use]
    pub fn with_cards(id: LocationId, cards: Vec<Card>) -> Self {
        Self { id, cards }
    }

    #[must_use]
    pub fn id(&self) -> LocationId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.id.name()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Put a card on top.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop().ok_or_else(|| EngineError::EmptyLocation {
            location: self.name(),
        })
    }

    /// Remove and return the card with `key`, keeping the order of the rest.
    pub fn extract(&mut self, key: &CardKey) -> Result<Card> {
        let pos = self
            .cards
            .iter()
            .position(|c| c.key() == key)
            .ok_or_else(|| EngineError::CardNotFound {
                key: key.clone(),
                location: self.name(),
            })?;
        Ok(self.cards.remove(pos))
    }

    /// The top card, or `None` when empty.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn contains(&self, key: &CardKey) -> bool {
        self.cards.iter().any(|c| c.key() == key)
    }

    /// Text listing of the cards, bottom to top.
    ///
    /// Compact form lists keys; verbose form lists full card records.
    /// An empty location renders as `-`.
    #[must_use]
    pub fn render(&self, show_label: bool, compact: bool) -> String {
        let body = if self.cards.is_empty() {
            "-".to_string()
        } else if compact {
            self.cards.iter().map(|c| c.key().as_str()).collect::<Vec<_>>().join(", ")
        } else {
            self.cards.iter().map(|c| format!("{c:?}")).collect::<Vec<_>>().join(", ")
        };

        if show_label {
            format!("{}: {}", self.name(), body)
        } else {
            body
        }
    }
}
