//! eventlog-registrar - Windows Event Log source registration
//!
//! Registers an application name as an event source and forwards this
//! process's `log` records to it. Hosts without the Windows Event Log report
//! [`Error::FunctionNotImplemented`].

pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod models;
pub mod registrar;

pub use config::RegistrarConfig;
pub use error::{Error, Result, ReturnCode};
pub use logger::{EventLogger, EventSink};
pub use models::{EventType, SourceName};
#[cfg(windows)]
pub use registrar::SupportedRegistrar;
pub use registrar::{platform, Registrar, UnsupportedRegistrar};

/// Register `name` as an event source on this host
pub fn register(name: &str) -> Result<()> {
    platform().register(name)
}
