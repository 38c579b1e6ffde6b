//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, GroupSummary, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_game};
