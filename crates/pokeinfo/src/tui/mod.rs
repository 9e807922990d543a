//! TUI Module - Lookup form
//!
//! - event_loop: terminal setup and the main loop
//! - input: key handling
//! - layout: panel rectangles
//! - render: drawing
//! - utils: overlays and helpers

mod event_loop;
mod input;
pub mod layout;
pub mod render;
mod utils;

pub use event_loop::{apply_message, run, spawn_fetch, TuiMessage};
pub use input::{handle_key, KeyAction};
