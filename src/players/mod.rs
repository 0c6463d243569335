//! Player policies that drive a game through `RulesEngine`.

pub mod policy;

pub use policy::{LowestPlayer, Player, RandomPlayer};
