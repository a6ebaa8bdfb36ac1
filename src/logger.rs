//! Process-wide logger that forwards `log` records to an event sink
//!
//! The logger is installed into the `log` facade once. Registering an event
//! source swaps the sink behind it, so a process can re-register (or change
//! source) without touching the facade again.

use log::{LevelFilter, Log, Metadata, Record};
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Error, Result};
use crate::models::{EventType, SourceName};

/// Destination for formatted log records
pub trait EventSink: Send + Sync {
    /// Source the events are reported under
    fn source(&self) -> &SourceName;

    /// Write one event
    fn report(&self, event_type: EventType, message: &str) -> Result<()>;
}

struct LoggerState {
    sink: Option<Box<dyn EventSink>>,
    max_level: LevelFilter,
}

/// `log` backend routing records to the active [`EventSink`]
pub struct EventLogger {
    state: RwLock<LoggerState>,
}

static GLOBAL: OnceLock<EventLogger> = OnceLock::new();
static INSTALLED: OnceLock<bool> = OnceLock::new();

impl EventLogger {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LoggerState {
                sink: None,
                max_level: LevelFilter::Info,
            }),
        }
    }

    /// The process logger, installed into the `log` facade on first call
    pub fn global() -> Result<&'static EventLogger> {
        let logger = GLOBAL.get_or_init(EventLogger::new);
        let installed = *INSTALLED.get_or_init(|| match log::set_logger(logger) {
            Ok(()) => {
                log::set_max_level(logger.max_level());
                true
            }
            Err(_) => false,
        });

        if installed {
            Ok(logger)
        } else {
            Err(Error::LoggerConflict)
        }
    }

    /// Replace the active sink, handing back the previous one
    pub fn install(&self, sink: Box<dyn EventSink>) -> Option<Box<dyn EventSink>> {
        self.write_state().sink.replace(sink)
    }

    /// Detach the active sink. Records are discarded until the next install.
    pub fn uninstall(&self) -> Option<Box<dyn EventSink>> {
        self.write_state().sink.take()
    }

    /// Write one event to the active sink regardless of the max level
    pub fn write_event(&self, event_type: EventType, message: &str) -> Result<()> {
        let state = self.read_state();
        match state.sink.as_ref() {
            Some(sink) => sink.report(event_type, message),
            None => Err(Error::InvalidArgument(
                "no event source is registered".to_string(),
            )),
        }
    }

    pub fn active_source(&self) -> Option<SourceName> {
        self.read_state().sink.as_ref().map(|sink| sink.source().clone())
    }

    pub fn max_level(&self) -> LevelFilter {
        self.read_state().max_level
    }

    pub fn set_max_level(&self, level: LevelFilter) {
        self.write_state().max_level = level;
        if self.is_facade_logger() {
            log::set_max_level(level);
        }
    }

    fn is_facade_logger(&self) -> bool {
        INSTALLED.get() == Some(&true)
            && GLOBAL.get().is_some_and(|global| std::ptr::eq(global, self))
    }

    fn read_state(&self) -> RwLockReadGuard<'_, LoggerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, LoggerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for EventLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let state = self.read_state();
        state.sink.is_some() && metadata.level() <= state.max_level
    }

    fn log(&self, record: &Record) {
        // One guard for the whole call; re-acquiring a read lock can deadlock
        // behind a queued writer.
        let state = self.read_state();
        if record.level() > state.max_level {
            return;
        }
        if let Some(sink) = state.sink.as_ref() {
            let message = format_record(record);
            // Nowhere to report a failure to report
            let _ = sink.report(EventType::from(record.level()), &message);
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    if record.target().is_empty() {
        record.args().to_string()
    } else {
        format!("[{}] {}", record.target(), record.args())
    }
}
