//! Error types for event source registration
//!
//! Every error maps onto a numeric [`ReturnCode`] so callers that speak the
//! native status-code convention can translate without string matching.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Status codes of the native logging library for the statuses this crate produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ReturnCode {
    Success = 0,
    UnknownError = -1,
    OperationNotPermitted = -2,
    PermissionDenied = -14,
    InvalidArgument = -22,
    NoMemoryAvailable = -35,
    FunctionNotImplemented = -38,
}

impl ReturnCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn from_i32(code: i32) -> Option<Self> {
        let rc = match code {
            0 => Self::Success,
            -1 => Self::UnknownError,
            -2 => Self::OperationNotPermitted,
            -14 => Self::PermissionDenied,
            -22 => Self::InvalidArgument,
            -35 => Self::NoMemoryAvailable,
            -38 => Self::FunctionNotImplemented,
            _ => return None,
        };
        Some(rc)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// The host has no facility for this operation
    #[error("function not implemented: {operation}")]
    FunctionNotImplemented { operation: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("no memory available")]
    NoMemoryAvailable,

    /// Another `log` backend was installed before ours
    #[error("a different logger is already installed for this process")]
    LoggerConflict,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Os(#[from] io::Error),
}

impl Error {
    pub fn return_code(&self) -> ReturnCode {
        match self {
            Error::FunctionNotImplemented { .. } => ReturnCode::FunctionNotImplemented,
            Error::InvalidArgument(_) | Error::Config(_) => ReturnCode::InvalidArgument,
            Error::PermissionDenied(_) => ReturnCode::PermissionDenied,
            Error::NoMemoryAvailable => ReturnCode::NoMemoryAvailable,
            Error::LoggerConflict => ReturnCode::OperationNotPermitted,
            Error::Os(_) => ReturnCode::UnknownError,
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Error::FunctionNotImplemented { .. })
    }
}
