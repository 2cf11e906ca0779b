//! Token locked-value table command

use chainpulse::{create_writer, tvl_rows, write_tvl_rows, OutputFormat, Registry};
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct TvlArgs {
    /// Chain name or id
    pub chain: String,

    /// Output format (pretty, json, csv)
    #[arg(long, short, default_value = "pretty")]
    pub output: String,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn handle(args: &TvlArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let registry = Registry::with_config(&config);
    let chain = registry.find(&args.chain)?;

    let format: OutputFormat = args.output.parse()?;
    let rows = tvl_rows(chain);

    if rows.is_empty() {
        println!(
            "No tokens tracked for {}. Add [[chains.tokens]] entries to the config file.",
            chain.display_name
        );
        return Ok(());
    }

    let mut out = create_writer(args.file.as_deref())?;
    write_tvl_rows(&mut *out, &rows, format)?;
    out.flush()?;

    Ok(())
}
