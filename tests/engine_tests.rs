//! End-to-end engine tests.
//!
//! These drive `GameInstance` through its public API only and check the
//! game-level guarantees: card conservation, the phase cycle, legal-action
//! soundness, play-pile ordering, and game-over gating.

use std::collections::HashSet;

use handshake_cards::cards::{generate_deck, make_card_key, Card, CardKey};
use handshake_cards::core::{Action, EngineError, GameRng, GameSettings, Phase, PlayerId};
use handshake_cards::game::GameInstance;
use handshake_cards::players::{LowestPlayer, Player, RandomPlayer};
use handshake_cards::rules::RulesEngine;
use handshake_cards::zones::{make_location_key, LocationId};

fn sorted_keys<'a>(cards: impl Iterator<Item = &'a Card>) -> Vec<CardKey> {
    let mut keys: Vec<_> = cards.map(|c| c.key().clone()).collect();
    keys.sort();
    keys
}

fn play_pile_is_monotonic(pile: &[Card]) -> bool {
    pile.windows(2).all(|w| w[0].value() <= w[1].value())
}

/// The worked scenario: default settings, 60 cards, 44 left after the deal,
/// 16 legal actions for a fresh hand of 8.
#[test]
fn test_default_scenario() {
    let settings = GameSettings::default()
        .with_max_card_value(10)
        .with_number_handshake_cards(3)
        .with_number_of_suits(5)
        .with_hand_size(8);
    assert_eq!(settings.deck_size(), 60);

    let game = GameInstance::new(settings, &mut GameRng::new(2024)).unwrap();
    assert_eq!(game.deck_size(), 44);

    let actions = game.legal_actions();
    assert_eq!(actions.len(), 16);

    let discards = actions
        .iter()
        .filter(|a| matches!(a, Action::PlayDiscard { .. }))
        .count();
    let plays = actions
        .iter()
        .filter(|a| matches!(a, Action::PlayPlayPile { .. }))
        .count();
    assert_eq!(discards, 8);
    assert_eq!(plays, 8);

    // hand order is preserved, discard before play for each card
    let hand = game.hand(PlayerId::ONE);
    for (i, card) in hand.iter().enumerate() {
        assert_eq!(actions[2 * i], Action::PlayDiscard { card: card.clone() });
        assert_eq!(actions[2 * i + 1], Action::PlayPlayPile { card: card.clone() });
    }
}

#[test]
fn test_key_derivation() {
    assert_eq!(make_card_key(2, 7, None).as_str(), "s02-v07");
    assert_eq!(make_card_key(1, 0, Some(3)).as_str(), "s01-v00-h3");

    assert_eq!(make_location_key("deck", None, None).unwrap(), "deck");
    assert_eq!(make_location_key("hand", None, Some(2)).unwrap(), "hand_p2");
    assert_eq!(make_location_key("play", Some(0), Some(1)).unwrap(), "play_s00_p1");
    assert!(matches!(
        make_location_key("play", Some(0), None),
        Err(EngineError::InvalidLocationSpec { .. })
    ));
}

#[test]
fn test_generated_keys_unique() {
    for settings in GameSettings::default().variations() {
        let deck = generate_deck(&settings);
        let keys: HashSet<_> = deck.iter().map(Card::key).collect();

        let expected = settings.number_of_suits
            * (settings.number_handshake_cards + settings.max_card_value - 1);
        assert_eq!(deck.len(), expected as usize);
        assert_eq!(keys.len(), deck.len());
    }
}

#[test]
fn test_phase_cycle() {
    let mut game = GameInstance::with_seed(GameSettings::default(), 9).unwrap();
    let start = (game.phase(), game.active_player(), game.turn());
    assert_eq!(start, (Phase::Play, PlayerId::ONE, 1));

    let mut seen = Vec::new();
    for _ in 0..4 {
        let action = game.legal_actions().remove(0);
        game.submit_action(&action).unwrap();
        seen.push((game.phase(), game.active_player(), game.turn()));
    }

    assert_eq!(
        seen,
        vec![
            (Phase::Draw, PlayerId::ONE, 1),
            (Phase::Play, PlayerId::TWO, 1),
            (Phase::Draw, PlayerId::TWO, 1),
            (Phase::Play, PlayerId::ONE, 2),
        ]
    );
}

#[test]
fn test_full_random_game_invariants() {
    let settings = GameSettings::default();
    let full_deck = sorted_keys(generate_deck(&settings).iter());

    for seed in 0..10 {
        let mut game = GameInstance::with_seed(settings.clone(), seed).unwrap();
        let mut policy = RandomPlayer::new(GameRng::new(seed + 1000));
        let mut steps = 0;

        while !game.is_game_over() && steps < 10_000 {
            let legal = game.legal_actions();
            assert!(!legal.is_empty());

            let action = policy.select_action(&game).unwrap();
            game.submit_action(&action).unwrap();
            steps += 1;

            assert_eq!(game.total_cards(), 60);
            if let Action::PlayPlayPile { card } = &action {
                for player in PlayerId::all() {
                    assert!(play_pile_is_monotonic(game.play_pile(card.suit(), player)));
                }
            }
        }

        assert!(game.is_game_over());
        assert_eq!(sorted_keys(game.all_cards()), full_deck);
        assert_eq!(game.history().len(), steps);
    }
}

#[test]
fn test_every_legal_action_applies() {
    let mut game = GameInstance::with_seed(GameSettings::default(), 77).unwrap();
    let mut policy = RandomPlayer::new(GameRng::new(3));

    for _ in 0..40 {
        if game.is_game_over() {
            break;
        }
        for action in game.legal_actions() {
            let mut copy = game.clone();
            copy.submit_action(&action)
                .unwrap_or_else(|e| panic!("{action} failed: {e}"));
            assert_eq!(copy.total_cards(), game.total_cards());
        }
        let action = policy.select_action(&game).unwrap();
        game.submit_action(&action).unwrap();
    }
}

#[test]
fn test_game_over_gating() {
    let mut game = GameInstance::with_seed(GameSettings::default(), 4).unwrap();
    let mut player = LowestPlayer::new();

    while !game.is_game_over() {
        let action = player.select_action(&game).unwrap();
        game.submit_action(&action).unwrap();
    }

    assert_eq!(game.deck_size(), 0);
    assert!(game.legal_actions().is_empty());
    assert!(RulesEngine::is_game_over(&game));
    assert_eq!(player.select_action(&game), None);

    // still empty after stepping into the other phase
    game.advance_phase();
    assert!(game.legal_actions().is_empty());
    assert!(matches!(
        game.submit_action_unchecked(&Action::DrawDeck),
        Err(EngineError::EmptyLocation { .. })
    ));
}

#[test]
fn test_discard_draw_offers_top_per_suit() {
    let mut game = GameInstance::with_seed(GameSettings::default(), 13).unwrap();

    // player 1 discards, draws from deck; player 2 discards
    let first = game.hand(PlayerId::ONE)[0].clone();
    game.submit_action(&Action::PlayDiscard { card: first.clone() }).unwrap();
    game.submit_action(&Action::DrawDeck).unwrap();
    let second = game.hand(PlayerId::TWO)[0].clone();
    game.submit_action(&Action::PlayDiscard { card: second.clone() }).unwrap();

    let actions = game.legal_actions();
    assert_eq!(actions[0], Action::DrawDeck);

    let mut expected_suits: Vec<u32> = if first.suit() == second.suit() {
        vec![first.suit()]
    } else {
        vec![first.suit(), second.suit()]
    };
    expected_suits.sort_unstable();
    let offered: Vec<u32> = actions[1..]
        .iter()
        .map(|a| match a {
            Action::DrawDiscard { card } => card.suit(),
            other => panic!("unexpected {other}"),
        })
        .collect();
    assert_eq!(offered, expected_suits);

    // only the top card of a shared suit is offered
    if first.suit() == second.suit() {
        assert_eq!(actions[1], Action::DrawDiscard { card: second });
    }
}

#[test]
fn test_independent_games() {
    let mut master = GameRng::new(99);
    let mut a = GameInstance::new(GameSettings::default(), &mut master.fork()).unwrap();
    let b = GameInstance::new(GameSettings::default(), &mut master.fork()).unwrap();
    let b_hand = b.hand(PlayerId::ONE).to_vec();

    let action = a.legal_actions().remove(0);
    a.submit_action(&action).unwrap();

    assert_eq!(b.hand(PlayerId::ONE), b_hand.as_slice());
    assert_eq!(b.location(LocationId::Deck).unwrap().len(), 44);
    assert_eq!(b.phase(), Phase::Play);
}

#[test]
fn test_action_from_parts() {
    let card = Card::regular(2, 7);
    let action = Action::from_parts("draw_discard", Some(card.clone())).unwrap();
    assert_eq!(action, Action::DrawDiscard { card });

    assert_eq!(
        Action::from_parts("play_hand", None),
        Err(EngineError::InvalidActionType {
            tag: "play_hand".to_string()
        })
    );
}
