//! Solver configuration loaded from TOML.

use crate::error::SolverError;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::{Algorithm, Searcher};
use tracing::{debug, info, instrument};

/// Configuration for the solver front end.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Search algorithm (`alpha-beta` or `plain`).
    #[serde(default)]
    algorithm: Algorithm,

    /// Tracing filter used when `RUST_LOG` is unset (e.g. `"debug"`).
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl SolverConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(algorithm = %config.algorithm, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, SolverError> {
        match path {
            Some(path) => Ok(Self::from_file(path)?),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the algorithm when a command-line override is given.
    pub fn with_algorithm(mut self, algorithm: Option<Algorithm>) -> Self {
        if let Some(algorithm) = algorithm {
            self.algorithm = algorithm;
        }
        self
    }

    /// Builds the searcher this configuration describes.
    pub fn searcher(&self) -> Searcher {
        Searcher::new(self.algorithm)
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: SolverConfig = toml::from_str("").unwrap();
        assert_eq!(config, SolverConfig::default());
        assert_eq!(config.algorithm(), &Algorithm::AlphaBeta);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_parse_plain_algorithm() {
        let config: SolverConfig =
            toml::from_str("algorithm = \"plain\"\nlog_filter = \"debug\"").unwrap();
        assert_eq!(config.searcher().algorithm(), Algorithm::Plain);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_override_wins() {
        let config = SolverConfig::default().with_algorithm(Some(Algorithm::Plain));
        assert_eq!(config.algorithm(), &Algorithm::Plain);
        let config = config.with_algorithm(None);
        assert_eq!(config.algorithm(), &Algorithm::Plain);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(toml::from_str::<SolverConfig>("algorithm = \"mcts\"").is_err());
    }
}
