//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `plantmon.toml` in the working directory, or at the path named by
//! `PLANTMON_CONFIG`. Every field has a default so the file is optional.
//! Environment variables take precedence over file values.

use std::path::PathBuf;

use plantmon_domain::card::RawCardConfig;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "plantmon.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Card configuration, validated when handed to the card service.
    pub card: RawCardConfig,
    /// State snapshot settings.
    pub snapshot: SnapshotConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where to read entity states from.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// JSON state dump (`/api/states` array or id-keyed object).
    pub path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `PLANTMON_CONFIG` or `plantmon.toml` (if
    /// present) then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("PLANTMON_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PLANTMON_SNAPSHOT") {
            self.snapshot.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("PLANTMON_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.snapshot.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "snapshot path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("states.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "plantmon=info,plantmon_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantmon_domain::card::CardConfig;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.snapshot.path, PathBuf::from("states.json"));
        assert_eq!(config.logging.filter, "plantmon=info,plantmon_app=info");
        assert!(config.card.plants.is_none());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.snapshot.path, PathBuf::from("states.json"));
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [card]
            title = 'Balcony'
            show_stats = false

            [[card.plants]]
            name = 'Basil'
            moisture_entity = 'sensor.basil_moisture'
            battery_entity = 'sensor.basil_battery'
            irrigation_switch = 'switch.balcony_pump'

            [[card.plants]]
            name = 'Mint'
            location = 'Kitchen'
            moisture_entity = 'sensor.mint_moisture'

            [snapshot]
            path = '/var/lib/plantmon/states.json'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.card.title.as_deref(), Some("Balcony"));
        assert_eq!(config.card.plants.as_ref().map(Vec::len), Some(2));
        assert_eq!(
            config.snapshot.path,
            PathBuf::from("/var/lib/plantmon/states.json")
        );
        assert_eq!(config.logging.filter, "debug");

        let card = CardConfig::try_from(config.card).unwrap();
        assert!(!card.show_stats);
        assert!(card.plants[0].can_irrigate());
        assert_eq!(card.plants[1].location.as_deref(), Some("Kitchen"));
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.snapshot.path, PathBuf::from("states.json"));
    }

    #[test]
    fn should_reject_empty_snapshot_path() {
        let mut config = Config::default();
        config.snapshot.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_snapshot_path() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [logging]
            filter = 'plantmon=debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "plantmon=debug");
        assert_eq!(config.snapshot.path, PathBuf::from("states.json"));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
