//! PokeInfo Common - Lookup, data model and configuration shared by the pokeinfo front ends
//!
//! - query: input normalization
//! - record: decoded Pokémon record and stat positions
//! - client: PokeAPI HTTP client
//! - config: TOML configuration with CLI/env overrides
//! - logging: tracing subscriber setup

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod record;

pub use client::{PokeApiClient, PokemonSource, DEFAULT_BASE_URL};
pub use config::PokeInfoConfig;
pub use error::{ConfigError, FetchError};
pub use query::Query;
pub use record::{PokemonRecord, StatKind, STAT_COUNT};
