//! Output formatting module
//!
//! Human-readable and JSON rendering of command results

use anyhow::Result;
use serde::Serialize;

use eventlog_registrar::models::{PlatformStatus, RegistrationReport};

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn format_registration(report: &RegistrationReport) -> String {
    let mut text = format!(
        "Registered event source '{}' on {} (level: {})",
        report.source, report.platform, report.level
    );
    if let Some(message) = &report.message {
        text.push_str(&format!("\nWrote test event: {}", message));
    }
    text
}

pub fn format_status(status: &PlatformStatus) -> String {
    if status.supported {
        format!("Event source registration: supported ({})", status.platform)
    } else {
        format!("Event source registration: not implemented on {}", status.platform)
    }
}
