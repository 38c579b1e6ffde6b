//! Automated guessers
//!
//! Strategies that play against the adversarial judge.

mod engine;
pub mod minimax;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
