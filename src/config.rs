//! Application configuration
//!
//! Loaded from a TOML file; every section has workable defaults so the
//! engine runs with no file at all. The `[scheduling]` section carries
//! the two process-wide constants of the engine: the default slot
//! duration and the maximum advance-booking window.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Scheduling constants consumed by the reservation service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SchedulingConfig {
    /// Slot length in minutes when a request names no duration.
    pub slot_duration_minutes: u32,
    /// How far ahead a slot may start, in calendar months.
    pub max_advance_months: u32,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            slot_duration_minutes: 90,
            max_advance_months: 12,
        }
    }
}

/// Database connection settings for the SeaORM adapter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Database URL (e.g., "sqlite://./tablebook.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./tablebook.db?mode=rwc".to_string(),
        }
    }
}

/// Logging settings consumed by the embedding application when it
/// installs a subscriber; the library itself only emits events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub scheduling: SchedulingConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file. A missing file yields the
    /// defaults; a present but malformed or invalid file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration back out, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scheduling.slot_duration_minutes == 0 {
            return Err(ConfigError::Invalid(
                "scheduling.slot_duration_minutes must be positive".into(),
            ));
        }
        if self.scheduling.slot_duration_minutes > 24 * 60 {
            return Err(ConfigError::Invalid(
                "scheduling.slot_duration_minutes cannot exceed a day".into(),
            ));
        }
        if self.scheduling.max_advance_months == 0 {
            return Err(ConfigError::Invalid(
                "scheduling.max_advance_months must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Default location of the config file, under the platform config dir.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tablebook")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.scheduling.slot_duration_minutes, 90);
        assert_eq!(config.scheduling.max_advance_months, 12);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [scheduling]
            slot_duration_minutes = 120
            "#,
        )
        .unwrap();
        assert_eq!(config.scheduling.slot_duration_minutes, 120);
        assert_eq!(config.scheduling.max_advance_months, 12);
        assert_eq!(config.database, DatabaseSettings::default());
    }

    #[test]
    fn zero_slot_duration_is_invalid() {
        let mut config = AppConfig::default();
        config.scheduling.slot_duration_minutes = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_advance_window_is_invalid() {
        let mut config = AppConfig::default();
        config.scheduling.max_advance_months = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("tablebook-no-such-config.toml");
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = std::env::temp_dir().join(format!("tablebook-cfg-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.scheduling.max_advance_months = 6;
        config.database.url = "sqlite::memory:".into();
        config.save(&path).unwrap();

        let back = AppConfig::load(&path).unwrap();
        assert_eq!(back, config);

        std::fs::remove_dir_all(&dir).ok();
    }
}
