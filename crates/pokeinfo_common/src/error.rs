//! Error types for PokeInfo.

use std::path::PathBuf;
use thiserror::Error;

/// Why a lookup produced no record.
///
/// Every variant is shown to the user as the same failure notice; the
/// variants only differ in what gets written to the trace log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("No Pokemon name specified")]
    InvalidQuery,

    #[error("Response code: {status} ({reason})")]
    NotFound { status: u16, reason: String },

    #[error("Malformed response body: {0}")]
    Malformed(String),

    #[error("Network error: {0}")]
    Transport(String),
}

impl FetchError {
    /// True when the query was rejected locally and never hit the network
    pub fn is_invalid_query(&self) -> bool {
        matches!(self, FetchError::InvalidQuery)
    }

    /// HTTP status code, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::NotFound { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
