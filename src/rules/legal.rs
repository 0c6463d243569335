//! Legal-action enumeration.
//!
//! Legality depends only on the phase, the active player, and location
//! contents. Enumeration order is fixed (suits ascending in the draw phase,
//! hand order in the play phase) so identical states produce identical lists.

use crate::cards::Card;
use crate::core::action::Action;
use crate::core::config::GameSettings;
use crate::core::player::PlayerId;
use crate::core::state::{Phase, TurnState};
use crate::zones::{LocationId, LocationManager};

/// Whether `card` may go on a play pile whose current top is `top`.
///
/// Play piles are built in non-decreasing value order; ties are allowed and
/// an empty pile accepts anything.
#[must_use]
pub fn can_stack(top: Option<&Card>, card: &Card) -> bool {
    top.map_or(true, |top| top.value() <= card.value())
}

/// The game is over once the deck is empty.
#[must_use]
pub fn is_game_over(locations: &LocationManager) -> bool {
    locations.size(LocationId::Deck) == 0
}

/// All actions the active player may submit.
#[must_use]
pub fn legal_actions(
    settings: &GameSettings,
    turn: &TurnState,
    locations: &LocationManager,
) -> Vec<Action> {
    if is_game_over(locations) {
        return Vec::new();
    }

    match turn.phase {
        Phase::Draw => draw_actions(settings, locations),
        Phase::Play => play_actions(turn.active_player, locations),
    }
}

fn draw_actions(settings: &GameSettings, locations: &LocationManager) -> Vec<Action> {
    let mut actions = vec![Action::DrawDeck];
    for suit in 0..settings.number_of_suits {
        if let Some(top) = locations.top_card(LocationId::Discard { suit }) {
            actions.push(Action::DrawDiscard { card: top.clone() });
        }
    }
    actions
}

fn play_actions(player: PlayerId, locations: &LocationManager) -> Vec<Action> {
    let hand = locations.cards(LocationId::Hand(player));
    let mut actions = Vec::with_capacity(hand.len() * 2);

    for card in hand {
        actions.push(Action::PlayDiscard { card: card.clone() });

        let pile = LocationId::Play {
            suit: card.suit(),
            player,
        };
        if can_stack(locations.top_card(pile), card) {
            actions.push(Action::PlayPlayPile { card: card.clone() });
        }
    }

    actions
}
