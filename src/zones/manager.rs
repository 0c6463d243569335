//! Location manager: owns every location in a game and moves cards between
//! them.
//!
//! Every move is one removal from a single source followed by one addition to
//! a single destination. The destination is checked before the source is
//! touched, so a failed move leaves all locations unchanged and the total
//! card count is invariant.

use log::trace;
use rustc_hash::FxHashMap;

use super::location::{Location, LocationId};
use crate::cards::{Card, CardKey};
use crate::core::error::{EngineError, Result};
use crate::core::rng::GameRng;

/// All locations of one game, indexed by `LocationId`.
///
/// ```
/// use handshake_cards::cards::Card;
/// use handshake_cards::core::PlayerId;
/// use handshake_cards::zones::{Location, LocationId, LocationManager};
///
/// let mut manager = LocationManager::new();
/// manager.insert(Location::with_cards(LocationId::Deck, vec![Card::regular(0, 5)]));
/// manager.insert(Location::new(LocationId::Hand(PlayerId::ONE)));
///
/// manager.move_top(LocationId::Deck, LocationId::Hand(PlayerId::ONE)).unwrap();
/// assert_eq!(manager.get(LocationId::Hand(PlayerId::ONE)).unwrap().len(), 1);
/// assert!(manager.get(LocationId::Deck).unwrap().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct LocationManager {
    locations: FxHashMap<LocationId, Location>,
}

fn unknown(id: LocationId) -> EngineError {
    let (suit, player) = match id {
        LocationId::Deck => (None, None),
        LocationId::Hand(player) => (None, Some(player.number())),
        LocationId::Play { suit, player } => (Some(suit), Some(player.number())),
        LocationId::Discard { suit } => (Some(suit), None),
    };
    EngineError::InvalidLocationSpec {
        kind: id.kind().as_str().to_string(),
        suit,
        player,
    }
}

impl LocationManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location, replacing any previous one with the same id.
    pub fn insert(&mut self, location: Location) {
        self.locations.insert(location.id(), location);
    }

    #[must_use]
    pub fn contains(&self, id: LocationId) -> bool {
        self.locations.contains_key(&id)
    }

    /// Look up a location. Ids that were never registered fail with
    /// `InvalidLocationSpec`.
    pub fn get(&self, id: LocationId) -> Result<&Location> {
        self.locations.get(&id).ok_or_else(|| unknown(id))
    }

    pub fn get_mut(&mut self, id: LocationId) -> Result<&mut Location> {
        self.locations.get_mut(&id).ok_or_else(|| unknown(id))
    }

    /// Cards of a location, bottom to top. Empty for unknown ids.
    #[must_use]
    pub fn cards(&self, id: LocationId) -> &[Card] {
        self.locations.get(&id).map_or(&[][..], Location::cards)
    }

    /// Top card of a location, if any.
    #[must_use]
    pub fn top_card(&self, id: LocationId) -> Option<&Card> {
        self.locations.get(&id)?.peek_top()
    }

    /// Number of cards in a location. Zero for unknown ids.
    #[must_use]
    pub fn size(&self, id: LocationId) -> usize {
        self.cards(id).len()
    }

    /// Move the top card of `from` onto `to`.
    pub fn move_top(&mut self, from: LocationId, to: LocationId) -> Result<()> {
        if !self.contains(to) {
            return Err(unknown(to));
        }
        let card = self.get_mut(from)?.draw()?;
        trace!("move {} {} -> {}", card, from, to);
        self.get_mut(to)?.add(card);
        Ok(())
    }

    /// Move the card with `key` from anywhere in `from` onto `to`.
    pub fn move_card(&mut self, key: &CardKey, from: LocationId, to: LocationId) -> Result<()> {
        if !self.contains(to) {
            return Err(unknown(to));
        }
        let card = self.get_mut(from)?.extract(key)?;
        trace!("move {} {} -> {}", card, from, to);
        self.get_mut(to)?.add(card);
        Ok(())
    }

    /// Shuffle one location in place.
    pub fn shuffle(&mut self, id: LocationId, rng: &mut GameRng) -> Result<()> {
        let location = self.get_mut(id)?;
        let mut cards = location.cards().to_vec();
        rng.shuffle(&mut cards);
        *location = Location::with_cards(id, cards);
        Ok(())
    }

    /// Number of registered locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Total cards across all locations.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.values().map(Location::len).sum()
    }

    /// Locations in a stable order (deck, hands, play piles, discards).
    #[must_use]
    pub fn iter_sorted(&self) -> Vec<&Location> {
        let mut out: Vec<_> = self.locations.values().collect();
        out.sort_by_key(|l| l.id());
        out
    }

    /// Every card in every location.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.locations.values().flat_map(|l| l.cards().iter())
    }
}
