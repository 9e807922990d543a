//! PokeInfo library - exposes modules for testing
//!
//! - cli: command-line surface and config resolution
//! - presenter: lookup result to display state
//! - tui_state: form state
//! - tui: ratatui front end
//! - lookup: headless lookup

pub mod cli;
pub mod lookup;
pub mod presenter;
pub mod tui;
pub mod tui_state;
