//! TUI State Management - Central state for the lookup form
//!
//! All TUI rendering comes from this state struct. The event loop is the only writer.

use crate::presenter::InfoPanel;
use chrono::Local;
use pokeinfo_common::{FetchError, PokeInfoConfig, PokemonRecord, Query};

/// Spinner frames shown while a lookup is in flight
pub const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Result of pressing Enter / "Get Info"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// Input is locked (lookup in flight or notice open)
    Ignored,
    /// Rejected locally; the panel already shows the failure
    Rejected,
    /// Start a lookup for this raw input
    Start(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Query text box
    pub input: String,

    /// Cursor position in chars
    pub cursor_pos: usize,

    /// Info + Stats display
    pub panel: InfoPanel,

    /// Lookup in flight; input and submit are disabled
    pub is_fetching: bool,

    /// Raw input of the in-flight (or last) lookup
    pub pending_query: Option<String>,

    pub spinner_frame: usize,

    pub show_help: bool,

    /// Wall-clock time of the last successful lookup
    pub last_success: Option<String>,

    pub base_url: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&PokeInfoConfig::default())
    }
}

impl AppState {
    pub fn new(config: &PokeInfoConfig) -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
            panel: InfoPanel::from_config(config),
            is_fetching: false,
            pending_query: None,
            spinner_frame: 0,
            show_help: false,
            last_success: None,
            base_url: config.base_url.clone(),
        }
    }

    /// Whether keystrokes may edit the query
    pub fn input_enabled(&self) -> bool {
        !self.is_fetching && self.panel.notice.is_none()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.input_enabled() {
            return;
        }
        let at = self.byte_index(self.cursor_pos);
        self.input.insert(at, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if !self.input_enabled() || self.cursor_pos == 0 {
            return;
        }
        let at = self.byte_index(self.cursor_pos - 1);
        self.input.remove(at);
        self.cursor_pos -= 1;
    }

    pub fn delete(&mut self) {
        if !self.input_enabled() || self.cursor_pos >= self.char_len() {
            return;
        }
        let at = self.byte_index(self.cursor_pos);
        self.input.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    pub fn clear_input(&mut self) {
        if !self.input_enabled() {
            return;
        }
        self.input.clear();
        self.cursor_pos = 0;
    }

    /// Handle a submit. Invalid queries fail here without going async.
    pub fn submit(&mut self) -> Submit {
        if !self.input_enabled() {
            return Submit::Ignored;
        }

        let raw = self.input.clone();
        if let Err(err) = Query::parse(&raw) {
            tracing::warn!("Error: {}", err);
            self.pending_query = Some(raw.clone());
            self.panel.render(&Err(err), &raw);
            return Submit::Rejected;
        }

        self.is_fetching = true;
        self.spinner_frame = 0;
        self.pending_query = Some(raw.clone());
        Submit::Start(raw)
    }

    /// Apply the result of the in-flight lookup and unlock input
    pub fn finish_fetch(&mut self, query: &str, result: &Result<PokemonRecord, FetchError>) {
        self.is_fetching = false;
        self.panel.render(result, query);
        if result.is_ok() {
            self.last_success = Some(Local::now().format("%H:%M:%S").to_string());
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.panel.dismiss_notice();
    }

    /// Advance the spinner while a lookup is in flight
    pub fn tick(&mut self) {
        if self.is_fetching {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> AppState {
        let mut state = AppState::default();
        for c in text.chars() {
            state.insert_char(c);
        }
        state
    }

    #[test]
    fn test_editing() {
        let mut state = typed("pikchu");
        state.move_left();
        state.move_left();
        state.move_left();
        state.insert_char('a');
        assert_eq!(state.input, "pikachu");

        state.move_end();
        state.backspace();
        assert_eq!(state.input, "pikach");

        state.move_home();
        state.delete();
        assert_eq!(state.input, "ikach");
        assert_eq!(state.cursor_pos, 0);

        state.clear_input();
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_multibyte_input() {
        let mut state = typed("flabébé");
        state.backspace();
        assert_eq!(state.input, "flabéb");
        state.move_left();
        state.insert_char('x');
        assert_eq!(state.input, "flabéxb");
    }

    #[test]
    fn test_submit_locks_input() {
        let mut state = typed("Pikachu");
        assert_eq!(state.submit(), Submit::Start("Pikachu".to_string()));
        assert!(state.is_fetching);

        // Second submit and edits are ignored while in flight
        assert_eq!(state.submit(), Submit::Ignored);
        state.insert_char('!');
        state.backspace();
        assert_eq!(state.input, "Pikachu");
    }

    #[test]
    fn test_blank_submit_rejected_locally() {
        let mut state = typed("   ");
        assert_eq!(state.submit(), Submit::Rejected);
        assert!(!state.is_fetching);
        assert!(state.panel.notice.is_some());
        assert!(!state.input_enabled());

        state.dismiss_notice();
        assert!(state.input_enabled());
    }

    #[test]
    fn test_finish_fetch_unlocks_and_renders() {
        let mut state = typed("pikachu");
        state.submit();
        state.tick();
        assert_eq!(state.spinner_frame, 1);

        let record = PokemonRecord {
            types: vec!["electric".to_string()],
            stats: [35, 55, 40, 50, 50, 90],
            height: 4,
            weight: 60,
        };
        state.finish_fetch("pikachu", &Ok(record));

        assert!(!state.is_fetching);
        assert!(state.input_enabled());
        assert!(state.last_success.is_some());
        assert_eq!(state.panel.height_text, "Height: 4 dm");

        // Spinner stays put when idle
        state.tick();
        assert_eq!(state.spinner_frame, 1);
    }
}
