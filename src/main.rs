//! chainpulse CLI - chain metadata and RPC endpoint health snapshots

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::new(filter))
        .init();

    let config_path = cli.config.as_deref();

    match &cli.command {
        Commands::Chains { action } => cli::chains::handle(action, config_path).await,
        Commands::Status(args) => cli::status::handle(args, config_path, cli.quiet).await,
        Commands::Probe(args) => cli::probe::handle(args, config_path, cli.quiet).await,
        Commands::Tvl(args) => cli::tvl::handle(args, config_path).await,
        Commands::Config { action } => cli::config::handle(action, config_path).await,
    }
}
