//! Chain endpoint status command

use chainpulse::{
    create_writer, panel, write_probe_results, HttpProber, OutputFormat, Panel, Registry,
    StatusBoard, ViewState,
};
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

#[derive(Args)]
pub struct StatusArgs {
    /// Chain name or id
    pub chain: String,

    /// Show all endpoints instead of the collapsed preview
    #[arg(long)]
    pub all: bool,

    /// Rows shown when collapsed (default from config)
    #[arg(long)]
    pub preview: Option<usize>,

    /// Per-probe timeout in seconds (default from config)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Max probes in flight, 0 = all at once (default from config)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Output format (pretty, json, csv)
    #[arg(long, short, default_value = "pretty")]
    pub output: String,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn handle(args: &StatusArgs, config_path: Option<&Path>, quiet: bool) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let registry = Registry::with_config(&config);
    let chain = registry.find(&args.chain)?;

    let format: OutputFormat = args.output.parse()?;
    let preview = args.preview.unwrap_or(config.probe.preview_size);
    let probe_config = super::probe_config(&config.probe, args.timeout, args.concurrency);

    if !quiet {
        eprintln!(
            "Probing {} endpoints for {}...",
            chain.public_rpcs.len(),
            chain.display_name
        );
    }

    let board = StatusBoard::new(Arc::new(HttpProber::new()?), probe_config);

    let started = Instant::now();
    board.refresh(&chain.public_rpcs).await;
    let elapsed = started.elapsed();

    let (results, loading) = board.snapshot();
    let view = ViewState { expanded: args.all };

    match panel(&results, loading, view, preview) {
        Panel::Loading => {
            // Cannot happen after an awaited refresh
            println!("Probing in progress");
        }
        Panel::Empty => {
            println!(
                "No public RPC endpoints known for {}",
                chain.display_name
            );
        }
        Panel::Rows { rows, show_toggle } => {
            let mut out = create_writer(args.file.as_deref())?;
            write_probe_results(&mut *out, rows, format)?;

            if format == OutputFormat::Pretty && show_toggle && !view.expanded {
                writeln!(
                    out,
                    "... and {} more (use --all to show)",
                    results.len() - rows.len()
                )?;
            }
            out.flush()?;
        }
    }

    if !quiet {
        let up = results.iter().filter(|r| r.reachable).count();
        eprintln!(
            "{}/{} endpoints reachable in {:.2}s",
            up,
            results.len(),
            elapsed.as_secs_f64()
        );
    }

    Ok(())
}
