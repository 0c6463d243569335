//! Game settings.
//!
//! `GameSettings` parameterizes deck composition and hand size. It is plain
//! data: the engine reads it at construction time and never mutates it.
//! Settings can be built in code with the `with_*` builder methods or
//! loaded from JSON.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

fn default_name() -> String {
    "default".to_string()
}

fn default_max_card_value() -> u32 {
    10
}

fn default_number_handshake_cards() -> u32 {
    3
}

fn default_number_of_suits() -> u32 {
    5
}

fn default_hand_size() -> u32 {
    8
}

/// Deck composition and hand size.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSettings {
    /// Label used in logs. Not read by the rules.
    #[serde(default = "default_name")]
    pub name: String,

    /// Highest regular card value in each suit.
    #[serde(default = "default_max_card_value")]
    pub max_card_value: u32,

    /// Handshake cards per suit (they replace value 1).
    #[serde(default = "default_number_handshake_cards")]
    pub number_handshake_cards: u32,

    /// Number of suits.
    #[serde(default = "default_number_of_suits")]
    pub number_of_suits: u32,

    /// Cards dealt to each player at the start.
    #[serde(default = "default_hand_size")]
    pub hand_size: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            max_card_value: default_max_card_value(),
            number_handshake_cards: default_number_handshake_cards(),
            number_of_suits: default_number_of_suits(),
            hand_size: default_hand_size(),
        }
    }
}

impl GameSettings {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_max_card_value(mut self, value: u32) -> Self {
        self.max_card_value = value;
        self
    }

    #[must_use]
    pub fn with_number_handshake_cards(mut self, count: u32) -> Self {
        self.number_handshake_cards = count;
        self
    }

    #[must_use]
    pub fn with_number_of_suits(mut self, count: u32) -> Self {
        self.number_of_suits = count;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: u32) -> Self {
        self.hand_size = size;
        self
    }

    /// Total cards in the generated deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        let per_suit = self.number_handshake_cards as usize
            + (self.max_card_value as usize).saturating_sub(1);
        self.number_of_suits as usize * per_suit
    }

    /// Short fingerprint of the settings, used for labeling logs.
    ///
    /// ```
    /// use handshake_cards::core::GameSettings;
    ///
    /// assert_eq!(GameSettings::default().setting_code(), "hs8_ns5_mcv10_nhc3");
    /// ```
    #[must_use]
    pub fn setting_code(&self) -> String {
        format!(
            "hs{}_ns{}_mcv{}_nhc{}",
            self.hand_size, self.number_of_suits, self.max_card_value, self.number_handshake_cards
        )
    }

    /// Check every field is positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("max_card_value", self.max_card_value),
            ("number_handshake_cards", self.number_handshake_cards),
            ("number_of_suits", self.number_of_suits),
            ("hand_size", self.hand_size),
        ];
        for (field, value) in fields {
            if value < 1 {
                return Err(EngineError::InvalidSettings { field, min: 1 });
            }
        }
        Ok(())
    }

    /// The standard play-test sweep: these settings, then each parameter
    /// moved one step down and one step up.
    #[must_use]
    pub fn variations(&self) -> Vec<GameSettings> {
        let step = |v: u32, up: bool| if up { v + 1 } else { v.saturating_sub(1) };
        let mut out = vec![self.clone()];
        for up in [false, true] {
            out.push(self.clone().with_number_of_suits(step(self.number_of_suits, up)));
        }
        for up in [false, true] {
            out.push(self.clone().with_hand_size(step(self.hand_size, up)));
        }
        for up in [false, true] {
            out.push(self.clone().with_max_card_value(step(self.max_card_value, up)));
        }
        for up in [false, true] {
            out.push(
                self.clone()
                    .with_number_handshake_cards(step(self.number_handshake_cards, up)),
            );
        }
        out
    }
}
