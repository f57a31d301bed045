use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

/// Main configuration structure for cleardns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolution behavior (upstream server, retry bounds, cache)
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. cleardns.toml in current directory
    /// 3. /etc/cleardns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("cleardns.toml").exists() {
            Self::from_file("cleardns.toml")?
        } else if std::path::Path::new("/etc/cleardns/config.toml").exists() {
            Self::from_file("/etc/cleardns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.upstream_server {
            self.resolver.upstream_server = server;
        }
        if let Some(timeout) = overrides.receive_timeout {
            self.resolver.receive_timeout = timeout;
        }
        if let Some(rounds) = overrides.max_rounds {
            self.resolver.max_rounds = rounds;
        }
        if let Some(waits) = overrides.wait_per_round {
            self.resolver.wait_per_round = waits;
        }
        if let Some(enabled) = overrides.cache_enabled {
            self.resolver.cache_enabled = enabled;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .resolver
            .upstream_server
            .parse::<std::net::SocketAddr>()
            .is_err()
        {
            return Err(ConfigError::Validation(format!(
                "Invalid upstream server address '{}'",
                self.resolver.upstream_server
            )));
        }

        if self.resolver.receive_timeout == 0 {
            return Err(ConfigError::Validation(
                "Receive timeout cannot be 0".to_string(),
            ));
        }

        if self.resolver.max_rounds == 0 {
            return Err(ConfigError::Validation(
                "At least one query round is required".to_string(),
            ));
        }

        if self.resolver.wait_per_round == 0 {
            return Err(ConfigError::Validation(
                "At least one receive per round is required".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub upstream_server: Option<String>,
    pub receive_timeout: Option<u64>,
    pub max_rounds: Option<u32>,
    pub wait_per_round: Option<u32>,
    pub cache_enabled: Option<bool>,
    pub log_level: Option<String>,
}
