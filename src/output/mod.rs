//! Terminal output formatting
//!
//! Display utilities for CLI results and pattern rendering.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
pub use formatters::PatternStyle;
