//! CLI command modules
//!
//! Each subcommand has its own module with argument definitions and handlers.

pub mod chains;
pub mod config;
pub mod probe;
pub mod status;
pub mod tvl;

use chainpulse::{ConfigFile, ProbeConfig, ProbeSettings};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "chainpulse")]
#[command(
    version,
    about = "Chain metadata and RPC endpoint health snapshots"
)]
#[command(after_help = r#"EXAMPLES:
    # List known chains
    chainpulse chains list

    # Probe a chain's public RPC endpoints (collapsed preview)
    chainpulse status ethereum

    # Probe everything and export as JSON
    chainpulse status polygon --all --output json

    # Probe explicit URLs with a short timeout
    chainpulse probe https://eth.drpc.org https://polygon-rpc.com --timeout 2

    # Token locked-value table
    chainpulse tvl ethereum

CONFIG FILE:
    Default: ~/.config/chainpulse/config.toml (override with --config)
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(long, env = "CHAINPULSE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chain registry (list, show)
    Chains {
        #[command(subcommand)]
        action: chains::ChainCommands,
    },

    /// Probe a chain's public RPC endpoints
    Status(status::StatusArgs),

    /// Probe explicit endpoint URLs
    Probe(probe::ProbeArgs),

    /// Token locked-value table for a chain
    Tvl(tvl::TvlArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: config::ConfigCommands,
    },
}

/// Load the config file named on the command line, or the default one.
/// A missing default config is fine; a missing explicit path is an error.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ConfigFile> {
    match path {
        Some(p) => Ok(ConfigFile::load(p)?),
        None => match ConfigFile::load_default()? {
            Some(config) => Ok(config),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(ConfigFile::default())
            }
        },
    }
}

/// Probe settings from the config file with command-line overrides applied
pub(crate) fn probe_config(
    settings: &ProbeSettings,
    timeout_secs: Option<u64>,
    concurrency: Option<usize>,
) -> ProbeConfig {
    ProbeConfig {
        timeout: Duration::from_secs(timeout_secs.unwrap_or(settings.timeout_secs)),
        concurrency: concurrency.unwrap_or(settings.concurrency),
    }
}
