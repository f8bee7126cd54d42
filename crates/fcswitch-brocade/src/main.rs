//! brocadectl - query a Brocade switch and print the parsed result as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fcswitch_brocade::config::DEFAULT_CONFIG_PATH;
use fcswitch_brocade::{BrocadeSwitch, ClientConfig};
use fcswitch_common::{Fid, ShellRunner};

#[derive(Debug, Parser)]
#[command(name = "brocadectl", version, about = "Read zoning and fabric state from a Brocade switch")]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Logical switch to query (overrides the configured fid)
    #[arg(long, global = true)]
    fid: Option<Fid>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Aliases and their member WWNs
    Aliases {
        #[arg(default_value = "*")]
        pattern: String,
    },
    /// Zones and their members
    Zones {
        #[arg(default_value = "*")]
        pattern: String,
    },
    /// Fabric member table
    Fabric {
        #[arg(long)]
        membership: bool,
        #[arg(long)]
        chassis: bool,
    },
    /// switchShow fields and port rows
    SwitchShow,
    /// Switch name
    SwitchName,
    /// Firmware version
    Version,
    /// Check whether a WWN is logged in to the fabric
    Nodefind { wwn: String },
    /// Effective zoning configuration name
    ActiveConfig,
    /// Every WWN with its aliases
    WwnMap,
    /// Aliases containing a WWN
    WwnAliases { wwn: String },
    /// Zones containing an alias
    AliasZones { alias: String },
    /// Whether the switch is a director-class chassis
    Director,
}

/// Initializes tracing/logging subsystem
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli, config: ClientConfig) -> Result<()> {
    let switch: BrocadeSwitch<ShellRunner> =
        BrocadeSwitch::new(config.runner()).with_default_fid(config.switch.fid);
    let fid = cli.fid;

    match cli.command {
        Command::Aliases { pattern } => print_json(&switch.ali_show(&pattern, fid)?),
        Command::Zones { pattern } => print_json(&switch.zone_show(&pattern, fid)?),
        Command::Fabric { membership, chassis } => {
            print_json(&switch.fabric_show(membership, chassis, fid)?)
        }
        Command::SwitchShow => print_json(&switch.switch_show(fid)?),
        Command::SwitchName => print_json(&switch.switch_name(fid)?),
        Command::Version => print_json(&switch.version()?),
        Command::Nodefind { wwn } => print_json(&switch.is_wwn_on_fabric(&wwn, fid)?),
        Command::ActiveConfig => print_json(&switch.get_current_active_config_name(fid)?),
        Command::WwnMap => print_json(&switch.wwn_alias_map(fid)?),
        Command::WwnAliases { wwn } => print_json(&switch.get_wwn_aliases(&wwn, fid)?),
        Command::AliasZones { alias } => print_json(&switch.get_alias_zones(&alias, fid)?),
        Command::Director => print_json(&switch.is_director(fid)?),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match ClientConfig::load(&cli.config) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("brocadectl: {e}");
            return ExitCode::FAILURE;
        }
    };
    let found = loaded.is_some();
    let config = loaded.unwrap_or_default();

    if let Err(e) = init_logging(&config.logging.level) {
        eprintln!("brocadectl: {e:#}");
        return ExitCode::FAILURE;
    }

    if !found {
        info!(path = %cli.config.display(), "Config file not found, using defaults");
    }

    info!(program = %config.transport.program, "Starting brocadectl");

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
