#![forbid(unsafe_code)]

mod cli;
mod output;

use anyhow::{Context, Result};
use eventlog_registrar::config::RegistrarConfig;
use eventlog_registrar::logger::EventLogger;
use eventlog_registrar::models::{EventType, PlatformStatus, RegistrationReport, SourceName};
use eventlog_registrar::registrar;

use cli::{CliCommand, RegisterOptions};

fn main() -> Result<()> {
    match cli::parse_args()? {
        CliCommand::Register(opts) => run_register(opts),
        CliCommand::Status { json_output } => run_status(json_output),
    }
}

fn run_register(opts: RegisterOptions) -> Result<()> {
    let mut config = match &opts.config {
        Some(path) => RegistrarConfig::load_from_file(path)?,
        None => RegistrarConfig::default(),
    };
    if let Some(name) = opts.name {
        config.event_log.source = name;
    }
    if let Some(level) = opts.level {
        config.event_log.level = level;
    }

    registrar::register_with(registrar::platform(), &config).with_context(|| {
        format!("Failed to register event source '{}'", config.event_log.source)
    })?;

    if let Some(message) = &opts.message {
        EventLogger::global()?
            .write_event(EventType::Information, message)
            .context("Failed to write test event")?;
    }

    let report = RegistrationReport {
        source: SourceName::new(config.event_log.source.as_str())?.to_string(),
        registered: true,
        platform: std::env::consts::OS.to_string(),
        level: config.event_log.level.to_string(),
        message: opts.message,
    };

    if opts.json_output {
        output::print_json(&report)
    } else {
        println!("{}", output::format_registration(&report));
        Ok(())
    }
}

fn run_status(json_output: bool) -> Result<()> {
    let status = PlatformStatus {
        platform: std::env::consts::OS.to_string(),
        supported: registrar::platform().is_supported(),
    };

    if json_output {
        output::print_json(&status)
    } else {
        println!("{}", output::format_status(&status));
        Ok(())
    }
}
