//! Cards and their canonical keys.
//!
//! A card is an immutable `(suit, value)` pair identified by a string key.
//! Value 0 marks a handshake card; each suit carries several of them,
//! told apart only by the handshake index embedded in the key. Regular
//! cards run from 2 up to the configured maximum, one per value and suit.

use serde::{Deserialize, Serialize};

use crate::core::config::GameSettings;

/// Value carried by every handshake card.
pub const HANDSHAKE_VALUE: u32 = 0;

/// Canonical card identifier, e.g. `s02-v07` or `s01-v00-h3`.
///
/// Keys are the sole mechanism for card equality and lookup.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey(String);

impl CardKey {
    /// Build the key for a card. `handshake` is the 1-based handshake index.
    #[must_use]
    pub fn new(suit: u32, value: u32, handshake: Option<u32>) -> Self {
        let mut key = format!("s{suit:02}-v{value:02}");
        if let Some(index) = handshake {
            key.push_str(&format!("-h{index}"));
        }
        Self(key)
    }

    /// The key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deterministic key for a card.
///
/// ```
/// use handshake_cards::cards::make_card_key;
///
/// assert_eq!(make_card_key(2, 7, None).as_str(), "s02-v07");
/// assert_eq!(make_card_key(1, 0, Some(3)).as_str(), "s01-v00-h3");
/// ```
#[must_use]
pub fn make_card_key(suit: u32, value: u32, handshake: Option<u32>) -> CardKey {
    CardKey::new(suit, value, handshake)
}

/// An immutable card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    key: CardKey,
    suit: u32,
    value: u32,
}

impl Card {
    /// A regular card. Value must be at least 2.
    #[must_use]
    pub fn regular(suit: u32, value: u32) -> Self {
        Self {
            key: CardKey::new(suit, value, None),
            suit,
            value,
        }
    }

    /// The `index`-th (1-based) handshake card of a suit.
    #[must_use]
    pub fn handshake(suit: u32, index: u32) -> Self {
        Self {
            key: CardKey::new(suit, HANDSHAKE_VALUE, Some(index)),
            suit,
            value: HANDSHAKE_VALUE,
        }
    }

    #[must_use]
    pub fn key(&self) -> &CardKey {
        &self.key
    }

    #[must_use]
    pub fn suit(&self) -> u32 {
        self.suit
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// True for value-0 handshake cards.
    #[must_use]
    pub fn is_handshake(&self) -> bool {
        self.value == HANDSHAKE_VALUE
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key.as_str())
    }
}

/// Generate the full, unshuffled deck for the given settings.
///
/// Per suit: `number_handshake_cards` handshake cards followed by one
/// regular card for each value in `2..=max_card_value`. Value 1 does not
/// exist; the handshake cards take its place.
#[must_use]
pub fn generate_deck(settings: &GameSettings) -> Vec<Card> {
    let mut cards = Vec::with_capacity(settings.deck_size());

    for suit in 0..settings.number_of_suits {
        for index in 1..=settings.number_handshake_cards {
            cards.push(Card::handshake(suit, index));
        }
        for value in 2..=settings.max_card_value {
            cards.push(Card::regular(suit, value));
        }
    }

    cards
}
