//! Rules engine trait.
//!
//! The interface external collaborators (player policies, simulators, UIs)
//! drive a game through. It is object safe so policies can take
//! `&dyn RulesEngine`.

use crate::core::action::Action;
use crate::core::error::Result;
use crate::core::state::TurnState;

/// Public surface of a running game.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty once the game is over
/// - `submit_action`: applies one move then advances the phase
/// - `is_game_over`: the engine never stops on its own; callers poll this
pub trait RulesEngine {
    /// Turn number, active player and phase.
    fn turn_state(&self) -> TurnState;

    /// Every action the active player may submit now, in a stable order.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply an action and advance the phase.
    fn submit_action(&mut self, action: &Action) -> Result<()>;

    /// Whether play has ended.
    fn is_game_over(&self) -> bool;
}
