//! Play-test loop: run one game between two policies and write a text log.

use std::io::Write;

use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::core::{EngineError, GameRng, GameSettings, PlayerId, PlayerMap};
use crate::game::GameInstance;
use crate::players::Player;

/// Play-test failures.
#[derive(Debug, Error)]
pub enum PlaytestError {
    #[error("failed to write game log: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("player {player} had no action on turn {turn}")]
    Stalled { player: PlayerId, turn: u32 },
}

/// Configuration for a play-test run.
#[derive(Clone, Debug)]
pub struct PlaytestConfig {
    /// Stop once the turn counter reaches this value.
    pub turn_limit: u32,

    /// Seed for the deck shuffle.
    pub seed: u64,
}

impl Default for PlaytestConfig {
    fn default() -> Self {
        Self {
            turn_limit: 100,
            seed: 0,
        }
    }
}

impl PlaytestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = limit;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Outcome of one play-test game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub game_id: String,
    pub setting_code: String,
    /// Turn counter when the loop stopped.
    pub turns: u32,
    /// Actions applied.
    pub actions: usize,
    /// Whether the deck ran out (as opposed to hitting the turn limit).
    pub finished: bool,
    pub deck_remaining: usize,
    /// Cards on each player's play piles, all suits together.
    pub play_pile_cards: PlayerMap<usize>,
}

/// Log-friendly game id.
#[must_use]
pub fn game_id(settings: &GameSettings, seed: u64) -> String {
    format!("game_{}_seed{}", settings.setting_code(), seed)
}

/// Run one game to completion or to the turn limit, logging every state
/// and selected action to `out`.
pub fn run_game(
    game_id: &str,
    settings: GameSettings,
    player_1: &mut dyn Player,
    player_2: &mut dyn Player,
    config: &PlaytestConfig,
    out: &mut dyn Write,
) -> Result<GameSummary, PlaytestError> {
    let mut game = GameInstance::new(settings.clone(), &mut GameRng::new(config.seed))?;

    writeln!(out, "Game ID: {game_id}")?;
    writeln!(out, "Game Settings: {settings:?}")?;
    writeln!(out, "Player 1: {}", player_1.name())?;
    writeln!(out, "Player 2: {}", player_2.name())?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out)?;

    while !game.is_game_over() && game.turn() < config.turn_limit {
        let active = game.active_player();
        let player: &mut dyn Player = if active == PlayerId::ONE {
            &mut *player_1
        } else {
            &mut *player_2
        };

        let action = player.select_action(&game).ok_or(PlaytestError::Stalled {
            player: active,
            turn: game.turn(),
        })?;

        write!(out, "{game}")?;
        writeln!(out, "<< SELECTED ACTION >>")?;
        writeln!(out, "{action}")?;
        writeln!(out)?;

        game.submit_action(&action)?;
    }

    writeln!(out, "<< FINAL GAME STATE >>")?;
    write!(out, "{game}")?;

    let play_pile_cards: PlayerMap<usize> = PlayerMap::new(|player| {
        (0..settings.number_of_suits)
            .map(|suit| game.play_pile(suit, player).len())
            .sum()
    });

    let summary = GameSummary {
        game_id: game_id.to_string(),
        setting_code: settings.setting_code(),
        turns: game.turn(),
        actions: game.history().len(),
        finished: game.is_game_over(),
        deck_remaining: game.deck_size(),
        play_pile_cards,
    };

    info!(
        "{}: {} actions over {} turns, finished={}",
        summary.game_id, summary.actions, summary.turns, summary.finished
    );

    Ok(summary)
}
