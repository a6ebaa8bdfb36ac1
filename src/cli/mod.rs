//! CLI argument parsing and validation module
//!
//! Handles command-line interface using clap:
//! - `register`: register an event source, from arguments or a TOML config
//! - `status`: report whether this host can register event sources

use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// Options for the `register` subcommand
#[derive(Debug, Clone)]
pub struct RegisterOptions {
    pub name: Option<String>,
    pub config: Option<PathBuf>,
    pub level: Option<LevelFilter>,
    pub message: Option<String>,
    pub json_output: bool,
}

#[derive(Debug, Clone)]
pub enum CliCommand {
    Register(RegisterOptions),
    Status { json_output: bool },
}

fn build_command() -> Command {
    let json_arg = Arg::new("json")
        .short('j')
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue);

    Command::new("eventlog-registrar")
        .version(env!("EVENTLOG_REGISTRAR_VERSION"))
        .about("Register an application as a Windows Event Log source")
        .long_about("Registers an application name as a Windows Event Log source and routes log records to it. Other platforms report that the function is not implemented.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("register")
                .about("Register an event source")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .help("Application name to register (overrides the config file)")
                        .required_unless_present("config"),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("PATH")
                        .help("TOML configuration file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("level")
                        .short('l')
                        .long("level")
                        .value_name("LEVEL")
                        .help("Most verbose level to forward: off, error, warn, info, debug, trace")
                        .value_parser(parse_level),
                )
                .arg(
                    Arg::new("message")
                        .short('m')
                        .long("message")
                        .value_name("TEXT")
                        .help("Write one informational event after registering"),
                )
                .arg(json_arg.clone()),
        )
        .subcommand(
            Command::new("status")
                .about("Show whether this host supports event source registration")
                .arg(json_arg),
        )
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(value).map_err(|_| format!("unknown log level '{}'", value))
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliCommand> {
    command_from_matches(&build_command().get_matches())
}

fn command_from_matches(matches: &ArgMatches) -> Result<CliCommand> {
    match matches.subcommand() {
        Some(("register", sub)) => Ok(CliCommand::Register(RegisterOptions {
            name: sub.get_one::<String>("name").cloned(),
            config: sub.get_one::<PathBuf>("config").cloned(),
            level: sub.get_one::<LevelFilter>("level").copied(),
            message: sub.get_one::<String>("message").cloned(),
            json_output: sub.get_flag("json"),
        })),
        Some(("status", sub)) => Ok(CliCommand::Status {
            json_output: sub.get_flag("json"),
        }),
        Some((other, _)) => Err(anyhow!("Unknown command: {}", other)),
        None => Err(anyhow!("No command given")),
    }
}
