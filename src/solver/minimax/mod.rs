//! Minimax guessing against the adversarial judge
//!
//! The judge always keeps its largest group, so a guess's worst case is also
//! its only outcome.

mod calculator;
mod selector;

pub use calculator::adversarial_outcome;
pub use selector::select_best_guess;
