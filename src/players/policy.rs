//! Reference player policies.
//!
//! Policies only see a game through `RulesEngine`: they read the legal
//! actions and pick one. Playing strength is not a goal; these exist to
//! drive the engine in play-tests.

use crate::core::{Action, GameRng, Phase};
use crate::rules::RulesEngine;

/// A seat at the table.
pub trait Player {
    /// Display name, used in logs.
    fn name(&self) -> &str;

    /// Pick the next action. `None` when nothing is legal.
    fn select_action(&mut self, game: &dyn RulesEngine) -> Option<Action>;
}

/// Uniformly random among legal actions.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "RandomPlayer"
    }

    fn select_action(&mut self, game: &dyn RulesEngine) -> Option<Action> {
        let actions = game.legal_actions();
        self.rng.choose(&actions).cloned()
    }
}

/// Always draws from the deck; plays the lowest card it can put on a play
/// pile, otherwise discards the first card in hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestPlayer;

impl LowestPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Player for LowestPlayer {
    fn name(&self) -> &str {
        "LowestPlayer"
    }

    fn select_action(&mut self, game: &dyn RulesEngine) -> Option<Action> {
        let actions = game.legal_actions();
        if actions.is_empty() {
            return None;
        }

        match game.turn_state().phase {
            Phase::Draw => Some(Action::DrawDeck),
            Phase::Play => {
                let mut iter = actions.into_iter();
                let mut selected = iter.next()?;
                for action in iter {
                    let lower = match (&action, selected.card()) {
                        (Action::PlayPlayPile { card }, Some(current)) => card.value() < current.value(),
                        _ => false,
                    };
                    if lower {
                        selected = action;
                    }
                }
                Some(selected)
            }
        }
    }
}
