//! Chain registry commands

use chainpulse::Registry;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ChainCommands {
    /// List all known chains
    List {
        /// Output format (pretty, json)
        #[arg(long, short, default_value = "pretty")]
        output: String,
    },

    /// Show one chain's metadata and endpoints
    Show {
        /// Chain name or id
        chain: String,
    },
}

pub async fn handle(action: &ChainCommands, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let registry = Registry::with_config(&config);

    match action {
        ChainCommands::List { output } => {
            if output == "json" {
                println!("{}", serde_json::to_string_pretty(registry.all())?);
            } else {
                println!(
                    "{:<12} {:>9} {:>6}  {}",
                    "Name", "Chain ID", "RPCs", "Explorer"
                );
                println!("{}", "─".repeat(64));
                for chain in registry.all() {
                    println!(
                        "{:<12} {:>9} {:>6}  {}",
                        chain.name,
                        chain.id,
                        chain.public_rpcs.len(),
                        chain.explorer.as_deref().unwrap_or("-")
                    );
                }
            }
        }

        ChainCommands::Show { chain } => {
            let chain = registry.find(chain)?;

            println!("{} ({})", chain.display_name, chain.name);
            println!("{}", "─".repeat(40));
            println!("Chain ID: {}", chain.id);
            if let Some(explorer) = &chain.explorer {
                println!("Explorer: {}", explorer);
            }

            if chain.public_rpcs.is_empty() {
                println!("No public RPC endpoints known");
            } else {
                println!("Public RPCs:");
                for (i, url) in chain.public_rpcs.iter().enumerate() {
                    println!("  {}. {}", i + 1, url);
                }
            }

            if !chain.tokens.is_empty() {
                println!("Tracked tokens:");
                for token in &chain.tokens {
                    println!("  {} @ {}", token.symbol, token.price);
                }
            }
        }
    }

    Ok(())
}
