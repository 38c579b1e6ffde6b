//! Interactive TUI for playing Absurdle

mod app;
mod rendering;

pub use app::{App, run_tui};
