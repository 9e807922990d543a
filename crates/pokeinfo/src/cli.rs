//! CLI - Command-line surface and config resolution

use clap::{Parser, Subcommand};
use pokeinfo_common::{ConfigError, PokeInfoConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pokeinfo")]
#[command(about = "Pokemon Information - look up types, base stats, height and weight", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the pokemon resource (overrides config and POKEINFO_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Config file (default: ~/.config/pokeinfo/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Trace log file for the TUI
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Maximum value of the stat indicators
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub stat_max: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive lookup form (default)
    Tui,

    /// Look up one Pokemon and print its info
    Lookup {
        /// Pokemon name or Pokedex number
        name: String,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }

    /// Config file, then environment, then flags
    pub fn resolve_config(&self) -> Result<PokeInfoConfig, ConfigError> {
        let mut config = PokeInfoConfig::load(self.config.as_deref())?;
        config.apply_env();
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut PokeInfoConfig) {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(max) = self.stat_max {
            config.stat_max = max;
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["pokeinfo"]).unwrap();
        assert_eq!(cli.command(), Commands::Tui);
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn test_lookup_with_global_flags() {
        let cli = Cli::try_parse_from([
            "pokeinfo",
            "lookup",
            "Pikachu",
            "--base-url",
            "http://localhost:8080/pokemon",
            "--stat-max",
            "255",
        ])
        .unwrap();

        assert_eq!(
            cli.command(),
            Commands::Lookup {
                name: "Pikachu".to_string()
            }
        );

        let mut config = PokeInfoConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.base_url, "http://localhost:8080/pokemon");
        assert_eq!(config.stat_max, 255);
    }

    #[test]
    fn test_zero_stat_max_rejected() {
        assert!(Cli::try_parse_from(["pokeinfo", "--stat-max", "0"]).is_err());
    }

    #[test]
    fn test_lookup_requires_name() {
        assert!(Cli::try_parse_from(["pokeinfo", "lookup"]).is_err());
    }
}
