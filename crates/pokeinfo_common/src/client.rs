//! PokeAPI Client - Single GET per lookup against `/pokemon/{name}`
//!
//! No retries and no caching. Failures are logged with status and reason,
//! then returned as a `FetchError`.

use crate::config::PokeInfoConfig;
use crate::error::FetchError;
use crate::query::Query;
use crate::record::PokemonRecord;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Public PokeAPI pokemon resource
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Anything that can turn raw user input into a record
#[async_trait]
pub trait PokemonSource: Send + Sync {
    async fn fetch(&self, raw: &str) -> Result<PokemonRecord, FetchError>;
}

/// HTTP-backed source
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl PokeApiClient {
    /// Client with the HTTP library's default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let base_url = parse_base_url(&base_url.into())?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { base_url, http })
    }

    pub fn from_config(config: &PokeInfoConfig) -> Result<Self, FetchError> {
        Self::with_timeout(config.base_url.clone(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `<base-url>/<query>` with the query percent-encoded as one path segment
    pub fn request_url(&self, query: &Query) -> Url {
        let mut url = self.base_url.clone();
        // Checked in parse_base_url
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(query.as_str());
        }
        url
    }

    async fn get(&self, query: &Query) -> Result<PokemonRecord, FetchError> {
        let url = self.request_url(query);
        debug!("GET {}", url);

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!("Request for {} failed: {}", query, e);
            FetchError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
            warn!(
                status = status.as_u16(),
                "Getting information for {} failed: Response code: {} ({})",
                query.display_name(),
                status.as_u16(),
                reason
            );
            return Err(FetchError::NotFound {
                status: status.as_u16(),
                reason,
            });
        }

        let body = response.text().await.map_err(|e| {
            warn!("Reading body for {} failed: {}", query, e);
            FetchError::Transport(e.to_string())
        })?;

        PokemonRecord::from_json(&body).map_err(|e| {
            warn!("Response for {} could not be decoded: {}", query, e);
            e
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| FetchError::Transport(format!("Invalid base URL {:?}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::Transport(format!(
            "Base URL {:?} cannot take a path",
            raw
        )));
    }
    Ok(url)
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    async fn fetch(&self, raw: &str) -> Result<PokemonRecord, FetchError> {
        let query = Query::parse(raw).map_err(|e| {
            warn!("Error: {}", e);
            e
        })?;

        info!("Getting information for {}...", query.display_name());
        let record = self.get(&query).await?;
        info!(
            types = record.types.len(),
            "Getting information for {}...success",
            query.display_name()
        );
        Ok(record)
    }
}
