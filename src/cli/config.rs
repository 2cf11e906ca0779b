//! Configuration management commands

use chainpulse::ConfigFile;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a commented config template
    Init,

    /// Show config file path
    Path,

    /// Show current config
    Show,
}

pub async fn handle(action: &ConfigCommands, config_path: Option<&Path>) -> anyhow::Result<()> {
    let path = config_path
        .map(|p| p.to_path_buf())
        .unwrap_or_else(ConfigFile::default_path);

    match action {
        ConfigCommands::Init => {
            if path.exists() {
                println!("Config file already exists at: {}", path.display());
                return Ok(());
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, ConfigFile::template())?;
            println!("Wrote config template to: {}", path.display());
        }

        ConfigCommands::Path => {
            println!("{}", path.display());
        }

        ConfigCommands::Show => {
            if path.exists() {
                let content = std::fs::read_to_string(&path)?;
                println!("# {}\n", path.display());
                println!("{}", content);
            } else {
                println!("No config file found at: {}", path.display());
                println!("\nCreate one with:");
                println!("  chainpulse config init");
            }
        }
    }

    Ok(())
}
