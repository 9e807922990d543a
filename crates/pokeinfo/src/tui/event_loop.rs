//! Event Loop - Main TUI entry point and event handling
//!
//! Lookups run on spawned tasks and report back over an mpsc channel, so the
//! form keeps redrawing (spinner, disabled input) while the request is in flight.

use crate::tui_state::AppState;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokeinfo_common::{FetchError, PokeInfoConfig, PokemonRecord, PokemonSource};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::input::{handle_key, KeyAction};
use super::render::draw_ui;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// TUI message types
#[derive(Debug)]
pub enum TuiMessage {
    FetchComplete {
        query: String,
        result: Result<PokemonRecord, FetchError>,
    },
}

/// Run the TUI
pub async fn run(source: Arc<dyn PokemonSource>, config: &PokeInfoConfig) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!(
            "Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).",
            e
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = AppState::new(config);
    let (tx, mut rx) = mpsc::channel(8);

    info!("TUI started against {}", config.base_url);
    let result = run_event_loop(&mut terminal, &mut state, source, tx, &mut rx).await;

    // Restore terminal (always attempt cleanup)
    let cleanup_result = restore_terminal(&mut terminal);
    info!("TUI exited");

    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run one lookup off the event loop
pub fn spawn_fetch(source: Arc<dyn PokemonSource>, query: String, tx: mpsc::Sender<TuiMessage>) {
    tokio::spawn(async move {
        let result = source.fetch(&query).await;
        // Receiver is gone only when the TUI has quit
        let _ = tx.send(TuiMessage::FetchComplete { query, result }).await;
    });
}

/// Fold an async message into state
pub fn apply_message(state: &mut AppState, msg: TuiMessage) {
    match msg {
        TuiMessage::FetchComplete { query, result } => {
            debug!(ok = result.is_ok(), "Lookup for {:?} finished", query);
            state.finish_fetch(&query, &result);
        }
    }
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    source: Arc<dyn PokemonSource>,
    tx: mpsc::Sender<TuiMessage>,
    rx: &mut mpsc::Receiver<TuiMessage>,
) -> Result<()> {
    loop {
        state.tick();

        while let Ok(msg) = rx.try_recv() {
            apply_message(state, msg);
        }

        terminal.draw(|f| draw_ui(f, state))?;

        // crossterm polling blocks; keep it off the async workers
        let event = tokio::task::block_in_place(|| -> io::Result<Option<Event>> {
            if event::poll(POLL_INTERVAL)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })?;

        if let Some(Event::Key(key)) = event {
            match handle_key(state, key) {
                KeyAction::Quit => break,
                KeyAction::Fetch(query) => spawn_fetch(source.clone(), query, tx.clone()),
                KeyAction::None => {}
            }
        }
    }

    Ok(())
}
