//! Probe explicit endpoint URLs

use chainpulse::{create_writer, probe_all, write_probe_results, HttpProber, OutputFormat};
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Args)]
pub struct ProbeArgs {
    /// Endpoint URLs to probe, in display order
    #[arg(required = true)]
    pub urls: Vec<String>,

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

pub async fn handle(args: &ProbeArgs, config_path: Option<&Path>, quiet: bool) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let format: OutputFormat = args.output.parse()?;
    let probe_config = super::probe_config(&config.probe, args.timeout, args.concurrency);

    if !quiet {
        eprintln!("Probing {} endpoints...", args.urls.len());
    }

    let prober = HttpProber::new()?;

    let started = Instant::now();
    let results = probe_all(&prober, &args.urls, &probe_config).await;
    let elapsed = started.elapsed();

    let mut out = create_writer(args.file.as_deref())?;
    write_probe_results(&mut *out, &results, format)?;
    out.flush()?;

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
