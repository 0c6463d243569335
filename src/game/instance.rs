//! A single game: all locations, turn state, and action history.
//!
//! `GameInstance` is the only owner of its locations. Everything outside
//! reads through accessors and changes state only by submitting actions.

use im::Vector;
use log::{debug, info, warn};

use crate::cards::{generate_deck, Card};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::GameSettings;
use crate::core::error::{EngineError, Result};
use crate::core::player::{PlayerId, PLAYER_COUNT};
use crate::core::rng::GameRng;
use crate::core::state::{Phase, TurnState};
use crate::rules::{self, RulesEngine};
use crate::zones::{Location, LocationId, LocationManager};

/// One game in progress.
///
/// ```
/// use handshake_cards::core::{GameRng, GameSettings, Phase};
/// use handshake_cards::game::GameInstance;
///
/// let mut game = GameInstance::new(GameSettings::default(), &mut GameRng::new(42)).unwrap();
/// assert_eq!(game.deck_size(), 44);
///
/// let action = game.legal_actions()[0].clone();
/// game.submit_action(&action).unwrap();
/// assert_eq!(game.phase(), Phase::Draw);
/// ```
#[derive(Clone, Debug)]
pub struct GameInstance {
    settings: GameSettings,
    locations: LocationManager,
    turn: TurnState,
    history: Vector<ActionRecord>,
}

impl GameInstance {
    /// Set up a new game.
    ///
    /// Generates and shuffles the deck with `rng`, deals `hand_size` cards
    /// to each player, and creates empty play piles (per suit and player)
    /// and discard piles (per suit). Fails with `InsufficientDeck` when the
    /// deck cannot cover both hands.
    pub fn new(settings: GameSettings, rng: &mut GameRng) -> Result<Self> {
        settings.validate()?;

        let available = settings.deck_size();
        let required = PLAYER_COUNT * settings.hand_size as usize;
        if available < required {
            return Err(EngineError::InsufficientDeck {
                required,
                available,
            });
        }

        let mut locations = LocationManager::new();
        locations.insert(Location::with_cards(LocationId::Deck, generate_deck(&settings)));
        locations.shuffle(LocationId::Deck, rng)?;

        for player in PlayerId::all() {
            let hand = LocationId::Hand(player);
            locations.insert(Location::new(hand));
            for _ in 0..settings.hand_size {
                locations.move_top(LocationId::Deck, hand)?;
            }

            for suit in 0..settings.number_of_suits {
                locations.insert(Location::new(LocationId::Play { suit, player }));
            }
        }

        for suit in 0..settings.number_of_suits {
            locations.insert(Location::new(LocationId::Discard { suit }));
        }

        info!(
            "new game {} ({}): {} cards, {} left in deck",
            settings.name,
            settings.setting_code(),
            available,
            locations.size(LocationId::Deck)
        );

        Ok(Self {
            settings,
            locations,
            turn: TurnState::new(),
            history: Vector::new(),
        })
    }

    /// Set up a new game from a seed.
    pub fn with_seed(settings: GameSettings, seed: u64) -> Result<Self> {
        Self::new(settings, &mut GameRng::new(seed))
    }

    // === Queries ===

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.turn.active_player
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.locations.size(LocationId::Deck)
    }

    /// True once the deck is empty.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        rules::is_game_over(&self.locations)
    }

    #[must_use]
    pub fn locations(&self) -> &LocationManager {
        &self.locations
    }

    pub fn location(&self, id: LocationId) -> Result<&Location> {
        self.locations.get(id)
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        self.locations.cards(LocationId::Hand(player))
    }

    #[must_use]
    pub fn play_pile(&self, suit: u32, player: PlayerId) -> &[Card] {
        self.locations.cards(LocationId::Play { suit, player })
    }

    #[must_use]
    pub fn discard_pile(&self, suit: u32) -> &[Card] {
        self.locations.cards(LocationId::Discard { suit })
    }

    /// Cards across all locations. Constant for the life of the game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.total_cards()
    }

    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.locations.all_cards()
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Actions the active player may submit now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        rules::legal_actions(&self.settings, &self.turn, &self.locations)
    }

    // === Mutation ===

    /// Step the phase machine without moving any cards.
    pub fn advance_phase(&mut self) {
        self.turn.advance_phase();
    }

    /// Apply a legal action.
    ///
    /// Actions not present in `legal_actions()` are rejected with
    /// `IllegalAction` and leave the game untouched.
    pub fn submit_action(&mut self, action: &Action) -> Result<()> {
        if !self.legal_actions().contains(action) {
            warn!(
                "rejected {} from player {} in {} phase",
                action, self.turn.active_player, self.turn.phase
            );
            return Err(EngineError::IllegalAction {
                action: action.clone(),
            });
        }
        self.submit_action_unchecked(action)
    }

    /// Apply an action without checking it against the legal list.
    ///
    /// Only the location operations can fail here (`EmptyLocation`,
    /// `CardNotFound`). A move that breaks the stacking rule but is
    /// otherwise possible goes through.
    pub fn submit_action_unchecked(&mut self, action: &Action) -> Result<()> {
        self.apply_move(action)?;

        debug!(
            "turn {} player {} {}: {}",
            self.turn.turn, self.turn.active_player, self.turn.phase, action
        );
        self.history.push_back(ActionRecord {
            player: self.turn.active_player,
            turn: self.turn.turn,
            phase: self.turn.phase,
            action: action.clone(),
        });

        self.advance_phase();
        Ok(())
    }

    fn apply_move(&mut self, action: &Action) -> Result<()> {
        let player = self.turn.active_player;
        let hand = LocationId::Hand(player);

        match action {
            Action::DrawDeck => self.locations.move_top(LocationId::Deck, hand),
            Action::DrawDiscard { card } => {
                let pile = LocationId::Discard { suit: card.suit() };
                let top_matches = self
                    .locations
                    .get(pile)?
                    .peek_top()
                    .map(|top| top.key() == card.key());
                match top_matches {
                    Some(true) => self.locations.move_top(pile, hand),
                    Some(false) => Err(EngineError::CardNotFound {
                        key: card.key().clone(),
                        location: pile.name(),
                    }),
                    None => Err(EngineError::EmptyLocation {
                        location: pile.name(),
                    }),
                }
            }
            Action::PlayDiscard { card } => {
                let pile = LocationId::Discard { suit: card.suit() };
                self.locations.move_card(card.key(), hand, pile)
            }
            Action::PlayPlayPile { card } => {
                let pile = LocationId::Play {
                    suit: card.suit(),
                    player,
                };
                self.locations.move_card(card.key(), hand, pile)
            }
        }
    }

    // === Rendering ===

    /// One-line summary: turn, phase, active player, deck size.
    #[must_use]
    pub fn info_line(&self) -> String {
        format!(
            "Turn: {}, Phase: {}, Active Player: {}, Deck Size: {}",
            self.turn.turn,
            self.turn.phase,
            self.turn.active_player,
            self.deck_size()
        )
    }

    fn render_location(&self, id: LocationId) -> String {
        self.locations
            .get(id)
            .map_or_else(|_| format!("{id}: ?"), |l| l.render(true, true))
    }
}

impl std::fmt::Display for GameInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<<-- GAME STATE -->>")?;
        writeln!(f, "{}", self.info_line())?;

        writeln!(f, "<<-- HANDS -->>")?;
        for player in PlayerId::all() {
            writeln!(f, "{}", self.render_location(LocationId::Hand(player)))?;
        }

        writeln!(f, "<<-- PLAY PILES -->>")?;
        for suit in 0..self.settings.number_of_suits {
            writeln!(
                f,
                "s{:02} ({}) ({}) ({})",
                suit,
                self.render_location(LocationId::Play { suit, player: PlayerId::ONE }),
                self.render_location(LocationId::Play { suit, player: PlayerId::TWO }),
                self.render_location(LocationId::Discard { suit }),
            )?;
        }

        writeln!(f, "<<-- LEGAL ACTIONS -->>")?;
        let actions: Vec<_> = self.legal_actions().iter().map(Action::to_string).collect();
        writeln!(f, "[{}]", actions.join(", "))
    }
}

impl RulesEngine for GameInstance {
    fn turn_state(&self) -> TurnState {
        self.turn
    }

    fn legal_actions(&self) -> Vec<Action> {
        GameInstance::legal_actions(self)
    }

    fn submit_action(&mut self, action: &Action) -> Result<()> {
        GameInstance::submit_action(self, action)
    }

    fn is_game_over(&self) -> bool {
        GameInstance::is_game_over(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn game(seed: u64) -> GameInstance {
        GameInstance::with_seed(GameSettings::default(), seed).unwrap()
    }

    /// Pull a specific card into a location, bypassing the rules.
    fn place(game: &mut GameInstance, card: &Card, to: LocationId) {
        let from = game
            .locations
            .iter_sorted()
            .into_iter()
            .find(|l| l.contains(card.key()))
            .map(|l| l.id())
            .unwrap();
        game.locations.move_card(card.key(), from, to).unwrap();
    }

    #[test]
    fn test_initial_layout() {
        let game = game(42);

        assert_eq!(game.total_cards(), 60);
        assert_eq!(game.deck_size(), 44);
        assert_eq!(game.hand(PlayerId::ONE).len(), 8);
        assert_eq!(game.hand(PlayerId::TWO).len(), 8);
        // deck + 2 hands + 5 suits * (2 play piles + 1 discard)
        assert_eq!(game.locations().len(), 1 + 2 + 15);
        for suit in 0..5 {
            assert!(game.discard_pile(suit).is_empty());
            assert!(game.play_pile(suit, PlayerId::ONE).is_empty());
            assert!(game.play_pile(suit, PlayerId::TWO).is_empty());
        }
        assert_eq!(game.turn_state(), TurnState::new());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_same_seed_same_deal() {
        assert_eq!(game(7).hand(PlayerId::ONE), game(7).hand(PlayerId::ONE));
        assert_ne!(game(7).hand(PlayerId::ONE), game(8).hand(PlayerId::ONE));
    }

    #[test]
    fn test_insufficient_deck() {
        let settings = GameSettings::default()
            .with_number_of_suits(1)
            .with_max_card_value(3)
            .with_number_handshake_cards(1)
            .with_hand_size(2);

        assert_eq!(
            GameInstance::with_seed(settings, 1).unwrap_err(),
            EngineError::InsufficientDeck {
                required: 4,
                available: 3
            }
        );
    }

    #[test]
    fn test_exact_deck_starts_over() {
        let settings = GameSettings::default()
            .with_number_of_suits(1)
            .with_max_card_value(4)
            .with_number_handshake_cards(1)
            .with_hand_size(2);
        let game = GameInstance::with_seed(settings, 1).unwrap();

        assert!(game.is_game_over());
        assert!(game.legal_actions().is_empty());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = GameSettings::default().with_hand_size(0);
        assert!(matches!(
            GameInstance::with_seed(settings, 1),
            Err(EngineError::InvalidSettings { field: "hand_size", .. })
        ));
    }

    #[test]
    fn test_play_discard_then_draw_discard() {
        let mut game = game(42);
        let card = game.hand(PlayerId::ONE)[0].clone();

        game.submit_action(&Action::PlayDiscard { card: card.clone() }).unwrap();
        assert_eq!(game.discard_pile(card.suit()), &[card.clone()]);
        assert_eq!(game.phase(), Phase::Draw);

        let draw = Action::DrawDiscard { card: card.clone() };
        assert!(game.legal_actions().contains(&draw));
        game.submit_action(&draw).unwrap();

        assert!(game.discard_pile(card.suit()).is_empty());
        assert_eq!(game.hand(PlayerId::ONE).last(), Some(&card));
        assert_eq!(game.active_player(), PlayerId::TWO);
        assert_eq!(game.total_cards(), 60);
    }

    #[test]
    fn test_play_playpile_moves_to_own_pile() {
        let mut game = game(42);
        let card = game.hand(PlayerId::ONE)[3].clone();

        game.submit_action(&Action::PlayPlayPile { card: card.clone() }).unwrap();

        assert_eq!(game.play_pile(card.suit(), PlayerId::ONE), &[card.clone()]);
        assert!(game.play_pile(card.suit(), PlayerId::TWO).is_empty());
        assert_eq!(game.hand(PlayerId::ONE).len(), 7);
    }

    #[test]
    fn test_draw_deck_takes_top() {
        let mut game = game(42);
        game.advance_phase();
        let top = game.locations().top_card(LocationId::Deck).cloned().unwrap();

        game.submit_action(&Action::DrawDeck).unwrap();

        assert_eq!(game.hand(PlayerId::ONE).last(), Some(&top));
        assert_eq!(game.deck_size(), 43);
    }

    #[test]
    fn test_checked_submit_rejects_illegal() {
        let mut game = game(42);

        // draw in the play phase
        let err = game.submit_action(&Action::DrawDeck).unwrap_err();
        assert_eq!(err, EngineError::IllegalAction { action: Action::DrawDeck });
        assert_eq!(game.phase(), Phase::Play);
        assert_eq!(game.deck_size(), 44);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_checked_submit_rejects_stacking_violation() {
        let mut game = game(5);
        let high = Card::regular(0, 9);
        let low = Card::regular(0, 3);
        place(&mut game, &high, LocationId::Play { suit: 0, player: PlayerId::ONE });
        place(&mut game, &low, LocationId::Hand(PlayerId::ONE));

        let action = Action::PlayPlayPile { card: low.clone() };
        assert!(matches!(
            game.submit_action(&action),
            Err(EngineError::IllegalAction { .. })
        ));

        // the permissive path lets it through
        game.submit_action_unchecked(&action).unwrap();
        assert_eq!(game.play_pile(0, PlayerId::ONE), &[high, low]);
        assert_eq!(game.total_cards(), 60);
    }

    #[test]
    fn test_unchecked_surfaces_location_errors() {
        let mut game = game(42);
        let absent = game.locations().top_card(LocationId::Deck).cloned().unwrap();

        let err = game
            .submit_action_unchecked(&Action::PlayDiscard { card: absent.clone() })
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::CardNotFound {
                key: absent.key().clone(),
                location: "hand_p1".to_string()
            }
        );

        let err = game
            .submit_action_unchecked(&Action::DrawDiscard { card: absent })
            .unwrap_err();
        assert!(matches!(err, EngineError::EmptyLocation { .. }));

        // failed submits do not advance the phase
        assert_eq!(game.phase(), Phase::Play);
        assert_eq!(game.total_cards(), 60);
    }

    #[test]
    fn test_draw_discard_must_match_top() {
        let mut game = game(11);
        let under = Card::regular(2, 4);
        let top = Card::regular(2, 6);
        place(&mut game, &under, LocationId::Discard { suit: 2 });
        place(&mut game, &top, LocationId::Discard { suit: 2 });
        game.advance_phase();

        let err = game
            .submit_action_unchecked(&Action::DrawDiscard { card: under.clone() })
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::CardNotFound {
                key: under.key().clone(),
                location: "discard_s02".to_string()
            }
        );
        assert_eq!(game.discard_pile(2), &[under, top]);
    }

    #[test]
    fn test_history_records_context() {
        let mut game = game(42);
        let card = game.hand(PlayerId::ONE)[0].clone();
        game.submit_action(&Action::PlayDiscard { card: card.clone() }).unwrap();
        game.submit_action(&Action::DrawDeck).unwrap();

        let history: Vec<_> = game.history().iter().cloned().collect();
        assert_eq!(
            history,
            vec![
                ActionRecord {
                    player: PlayerId::ONE,
                    turn: 1,
                    phase: Phase::Play,
                    action: Action::PlayDiscard { card },
                },
                ActionRecord {
                    player: PlayerId::ONE,
                    turn: 1,
                    phase: Phase::Draw,
                    action: Action::DrawDeck,
                },
            ]
        );
    }

    #[test]
    fn test_all_cards_unique() {
        let game = game(3);
        let keys: HashSet<_> = game.all_cards().map(|c| c.key().clone()).collect();
        assert_eq!(keys.len(), game.total_cards());
    }

    #[test]
    fn test_display_snapshot() {
        let game = game(42);
        let text = game.to_string();

        assert!(text.starts_with("<<-- GAME STATE -->>\n"));
        assert!(text.contains("Turn: 1, Phase: play, Active Player: 1, Deck Size: 44"));
        assert!(text.contains("hand_p1: "));
        assert!(text.contains("s04 (play_s04_p1: -) (play_s04_p2: -) (discard_s04: -)"));
        assert!(text.contains("<<-- LEGAL ACTIONS -->>\n[play_discard("));
    }
}
