//! Data models module
//!
//! Defines core data structures:
//! - SourceName: Validated event source identifier
//! - EventType: Event Log severity derived from a log record level
//! - RegistrationReport: Outcome of a registration, for CLI output
//! - PlatformStatus: Whether the host can register event sources

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_SOURCE_NAME_LEN;
use crate::error::{Error, Result};

/// Application name registered as an event source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SourceName(String);

impl SourceName {
    /// Surrounding whitespace is dropped, so `" Rroonga "` and `"Rroonga"`
    /// name the same source.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        let name = if trimmed.len() == name.len() {
            name
        } else {
            trimmed.to_string()
        };
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "event source name must not be empty".to_string(),
            ));
        }
        if name.contains('\0') {
            return Err(Error::InvalidArgument(format!(
                "event source name must not contain NUL: {:?}",
                name
            )));
        }
        let len = name.encode_utf16().count();
        if len > MAX_SOURCE_NAME_LEN {
            return Err(Error::InvalidArgument(format!(
                "event source name is {} characters long (maximum {})",
                len, MAX_SOURCE_NAME_LEN
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Event Log severity. Discriminants match the `EVENTLOG_*_TYPE` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u16)]
pub enum EventType {
    Error = 0x0001,
    Warning = 0x0002,
    Information = 0x0004,
}

impl EventType {
    pub fn as_raw(self) -> u16 {
        self as u16
    }
}

impl From<log::Level> for EventType {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => EventType::Error,
            log::Level::Warn => EventType::Warning,
            log::Level::Info | log::Level::Debug | log::Level::Trace => EventType::Information,
        }
    }
}

/// Result of a successful registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationReport {
    /// Registered event source
    pub source: String,
    /// Always true for a report that was produced
    pub registered: bool,
    /// Host operating system
    pub platform: String,
    /// Most verbose level forwarded to the Event Log
    pub level: String,
    /// Test message written after registration, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Registration capability of the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStatus {
    pub platform: String,
    pub supported: bool,
}
