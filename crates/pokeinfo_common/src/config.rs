//! PokeInfo Configuration
//!
//! Config file: ~/.config/pokeinfo/config.toml (optional)
//!
//! Precedence, highest first: CLI flag, `POKEINFO_BASE_URL`, config file, defaults.

use crate::client::DEFAULT_BASE_URL;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment override for the API base URL
pub const BASE_URL_ENV: &str = "POKEINFO_BASE_URL";

/// Default indicator maximum (stat gauges are 0-100)
pub const DEFAULT_STAT_MAX: u32 = 100;

/// Separator placed between type names
pub const DEFAULT_TYPE_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokeInfoConfig {
    /// Base URL of the `/pokemon` resource
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound of every stat indicator
    #[serde(default = "default_stat_max")]
    pub stat_max: u32,

    #[serde(default = "default_type_separator")]
    pub type_separator: String,

    /// Request timeout; unset means the HTTP client's default
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Trace log destination for the TUI
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_stat_max() -> u32 {
    DEFAULT_STAT_MAX
}

fn default_type_separator() -> String {
    DEFAULT_TYPE_SEPARATOR.to_string()
}

impl Default for PokeInfoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            stat_max: default_stat_max(),
            type_separator: default_type_separator(),
            timeout_secs: None,
            log_file: None,
        }
    }
}

impl PokeInfoConfig {
    /// Default user config path: ~/.config/pokeinfo/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pokeinfo").join("config.toml"))
    }

    /// Parse TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: PokeInfoConfig = toml::from_str(contents)?;
        if config.stat_max == 0 {
            config.stat_max = DEFAULT_STAT_MAX;
        }
        Ok(config)
    }

    /// Load from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the user config is read if
    /// present, otherwise defaults are returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::user_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Apply environment overrides using the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply environment overrides from an arbitrary lookup
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PokeInfoConfig::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2/pokemon");
        assert_eq!(config.stat_max, 100);
        assert_eq!(config.type_separator, ", ");
        assert_eq!(config.timeout(), None);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = PokeInfoConfig::from_toml("stat_max = 255\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.stat_max, 255);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.type_separator, DEFAULT_TYPE_SEPARATOR);
    }

    #[test]
    fn test_zero_stat_max_falls_back() {
        let config = PokeInfoConfig::from_toml("stat_max = 0").unwrap();
        assert_eq!(config.stat_max, DEFAULT_STAT_MAX);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(matches!(
            PokeInfoConfig::from_toml("stat_max = \"lots\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://localhost:9000/pokemon\"").unwrap();
        writeln!(file, "type_separator = \" / \"").unwrap();

        let config = PokeInfoConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/pokemon");
        assert_eq!(config.type_separator, " / ");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            PokeInfoConfig::load(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_env_override() {
        let mut config = PokeInfoConfig::default();
        config.apply_env_with(|key| {
            (key == BASE_URL_ENV).then(|| " http://mirror.local/api/v2/pokemon ".to_string())
        });
        assert_eq!(config.base_url, "http://mirror.local/api/v2/pokemon");

        // Blank values are ignored
        config.apply_env_with(|_| Some("  ".to_string()));
        assert_eq!(config.base_url, "http://mirror.local/api/v2/pokemon");
    }
}
