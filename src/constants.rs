//! Global constants for eventlog-registrar
//!
//! Centralized location for application-wide constants

/// Event source used when neither the command line nor a config file names one
pub const DEFAULT_SOURCE_NAME: &str = "eventlog-registrar";

/// Longest source name the Event Log accepts, in UTF-16 code units
pub const MAX_SOURCE_NAME_LEN: usize = 256;

/// Category reported with every event (no message-table categories are installed)
pub const EVENT_CATEGORY: u16 = 0;

/// Event identifier reported with every event
pub const EVENT_ID: u32 = 0;

/// Operation name carried by `FunctionNotImplemented` for source registration
pub const REGISTER_OPERATION: &str = "register";
