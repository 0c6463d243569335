//! Turn progression: turn counter, active player, and phase.
//!
//! Each player's turn has two phases, `Play` then `Draw`. The machine cycles
//!
//! ```text
//! (play, 1) -> (draw, 1) -> (play, 2) -> (draw, 2) -> (play, 1) -> ...
//! ```
//!
//! A turn is one full round: the counter goes up when player 2's draw
//! hands play back to player 1. The machine never halts on its own;
//! game-over is decided by the caller.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Sub-turn stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Move one card from hand to a play pile or a discard pile.
    Play,
    /// Take one card from the deck or a discard pile.
    Draw,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Play => "play",
            Phase::Draw => "draw",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn, active player, and phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    /// Round number (starts at 1).
    pub turn: u32,
    /// Player whose move it is.
    pub active_player: PlayerId,
    /// Current phase.
    pub phase: Phase,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState {
    /// Initial state: turn 1, player 1, play phase.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            turn: 1,
            active_player: PlayerId::ONE,
            phase: Phase::Play,
        }
    }

    /// Step to the next phase, handing over to the other player after a draw.
    pub fn advance_phase(&mut self) {
        match self.phase {
            Phase::Play => self.phase = Phase::Draw,
            Phase::Draw => {
                self.active_player = self.active_player.other();
                self.phase = Phase::Play;
                if self.active_player == PlayerId::ONE {
                    self.turn += 1;
                }
            }
        }
    }
}
