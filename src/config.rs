//! Configuration for event source registration
//!
//! Handles TOML configuration parsing and validation

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::DEFAULT_SOURCE_NAME;
use crate::error::Error;
use crate::models::SourceName;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrarConfig {
    #[serde(default)]
    pub event_log: EventLogSettings,
}

/// `[event_log]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogSettings {
    /// Application name registered as the event source
    #[serde(default = "default_source")]
    pub source: String,
    /// Most verbose level forwarded to the Event Log
    #[serde(default = "default_level")]
    pub level: LevelFilter,
}

impl Default for EventLogSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            level: default_level(),
        }
    }
}

fn default_source() -> String {
    DEFAULT_SOURCE_NAME.to_string()
}

fn default_level() -> LevelFilter {
    LevelFilter::Info
}

impl RegistrarConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    pub fn validate(&self) -> crate::Result<()> {
        SourceName::new(self.event_log.source.as_str())
            .map_err(|e| Error::Config(format!("event_log.source: {}", e)))?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = RegistrarConfig::default();
        assert_eq!(config.event_log.source, DEFAULT_SOURCE_NAME);
        assert_eq!(config.event_log.level, LevelFilter::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = RegistrarConfig::from_toml_str(
            r#"
[event_log]
source = "Rroonga"
level = "warn"
"#,
        )
        .unwrap();
        assert_eq!(config.event_log.source, "Rroonga");
        assert_eq!(config.event_log.level, LevelFilter::Warn);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = RegistrarConfig::from_toml_str("").unwrap();
        assert_eq!(config.event_log.source, DEFAULT_SOURCE_NAME);

        let config = RegistrarConfig::from_toml_str("[event_log]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.event_log.source, DEFAULT_SOURCE_NAME);
        assert_eq!(config.event_log.level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let err = RegistrarConfig::from_toml_str("[event_log]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_source_rejected() {
        let err = RegistrarConfig::from_toml_str("[event_log]\nsource = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("event_log.source"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("eventlog.toml");
        fs::write(&path, "[event_log]\nsource = \"Rroonga\"\nlevel = \"error\"\n").unwrap();

        let config = RegistrarConfig::load_from_file(&path).unwrap();
        assert_eq!(config.event_log.source, "Rroonga");
        assert_eq!(config.event_log.level, LevelFilter::Error);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = RegistrarConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_toml_round_trip_keeps_source() {
        let mut config = RegistrarConfig::default();
        config.event_log.source = "Rroonga".to_string();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("source = \"Rroonga\""));
        assert_eq!(RegistrarConfig::from_toml_str(&text).unwrap().event_log.source, "Rroonga");
    }
}
