//! Trace output
//!
//! The TUI owns the terminal, so it logs to a file. Headless commands log to stderr.
//! Filter comes from `RUST_LOG` (default `info`).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where trace events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Discover log file path with fallback chain
///
/// Priority:
/// 1. $XDG_STATE_HOME/pokeinfo/pokeinfo.log
/// 2. ~/.local/state/pokeinfo/pokeinfo.log
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(xdg_state) = std::env::var_os("XDG_STATE_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg_state).join("pokeinfo").join("pokeinfo.log"));
    }

    dirs::home_dir().map(|home| {
        home.join(".local")
            .join("state")
            .join("pokeinfo")
            .join("pokeinfo.log")
    })
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Open (append) the log file, creating parent directories
pub fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(target: &LogTarget) -> io::Result<()> {
    let result = match target {
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .try_init(),
    };

    result.map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
