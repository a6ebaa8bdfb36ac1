//! Event source registration
//!
//! The host's capability is decided once: Windows gets [`SupportedRegistrar`],
//! every other platform gets [`UnsupportedRegistrar`]. Callers go through
//! [`platform`] (or the crate-level [`crate::register`]) and never branch on
//! the operating system themselves.

#[cfg(windows)]
pub mod windows;

use std::sync::OnceLock;

use crate::config::RegistrarConfig;
use crate::constants::REGISTER_OPERATION;
use crate::error::{Error, Result};
use crate::logger::EventLogger;

/// Capability to register an application as a system event-log source
pub trait Registrar: Send + Sync {
    /// Register `name` and route this process's log records to it
    fn register(&self, name: &str) -> Result<()>;

    fn is_supported(&self) -> bool;
}

/// Registrar backed by the Windows Event Log
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SupportedRegistrar;

#[cfg(windows)]
impl Registrar for SupportedRegistrar {
    fn register(&self, name: &str) -> Result<()> {
        let source = crate::models::SourceName::new(name)?;
        let logger = EventLogger::global()?;
        let event_source = windows::EventSource::open(source)?;

        // Dropping the previous sink closes its handle
        drop(logger.install(Box::new(event_source)));
        log::debug!("registered event log source {}", name);
        Ok(())
    }

    fn is_supported(&self) -> bool {
        true
    }
}

/// Registrar for hosts without an event log; every call fails
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedRegistrar;

impl Registrar for UnsupportedRegistrar {
    fn register(&self, _name: &str) -> Result<()> {
        Err(Error::FunctionNotImplemented {
            operation: REGISTER_OPERATION,
        })
    }

    fn is_supported(&self) -> bool {
        false
    }
}

/// Registrar for the running host
pub fn platform() -> &'static dyn Registrar {
    static PLATFORM: OnceLock<Box<dyn Registrar>> = OnceLock::new();
    PLATFORM.get_or_init(detect).as_ref()
}

#[cfg(windows)]
fn detect() -> Box<dyn Registrar> {
    Box::new(SupportedRegistrar)
}

#[cfg(not(windows))]
fn detect() -> Box<dyn Registrar> {
    Box::new(UnsupportedRegistrar)
}

/// Register the configured source and apply the configured level
pub fn register_with(registrar: &dyn Registrar, config: &RegistrarConfig) -> Result<()> {
    registrar.register(&config.event_log.source)?;
    EventLogger::global()?.set_max_level(config.event_log.level);
    Ok(())
}
