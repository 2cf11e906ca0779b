//! Output writers for probe results and locked-value tables

use crate::error::{OutputError, Result};
use crate::rpc::ProbeResult;
use crate::tvl::TvlRow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(OutputError::UnsupportedFormat(other.to_string()).into()),
        }
    }
}

/// Open a buffered writer over a file, or stdout when no path is given
pub fn create_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    let output: Box<dyn Write + Send> = if let Some(p) = path {
        let file = File::create(p)
            .map_err(|e| OutputError::FileCreate(format!("{}: {}", p.display(), e)))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    Ok(output)
}

/// Write probe results in the requested format
pub fn write_probe_results(
    out: &mut dyn Write,
    results: &[ProbeResult],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Pretty => write_probe_table(out, results),
        OutputFormat::Json => write_probe_json(out, results),
        OutputFormat::Csv => write_probe_csv(out, results),
    }
}

fn write_probe_table(out: &mut dyn Write, results: &[ProbeResult]) -> Result<()> {
    writeln!(out, "{:<54} {:<8} {:>9}", "Endpoint", "Status", "Latency")?;
    writeln!(out, "{}", "─".repeat(73))?;

    for result in results {
        let status = if result.reachable { "✓ up" } else { "✗ down" };
        let latency = result
            .latency
            .map(|d| format!("{}ms", d.as_millis()))
            .unwrap_or_else(|| "-".to_string());
        writeln!(out, "{:<54} {:<8} {:>9}", result.endpoint, status, latency)?;
    }

    Ok(())
}

fn write_probe_json(out: &mut dyn Write, results: &[ProbeResult]) -> Result<()> {
    let rows: Vec<serde_json::Value> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "endpoint": r.endpoint,
                "reachable": r.reachable,
                "latency_ms": r.latency.map(|d| d.as_millis() as u64),
            })
        })
        .collect();

    writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
    Ok(())
}

fn write_probe_csv(out: &mut dyn Write, results: &[ProbeResult]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["endpoint", "reachable", "latency_ms"])
        .map_err(OutputError::from)?;

    for result in results {
        let latency = result
            .latency
            .map(|d| d.as_millis().to_string())
            .unwrap_or_default();
        writer
            .write_record([
                result.endpoint.as_str(),
                if result.reachable { "true" } else { "false" },
                latency.as_str(),
            ])
            .map_err(OutputError::from)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write locked-value rows in the requested format
pub fn write_tvl_rows(out: &mut dyn Write, rows: &[TvlRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Pretty => write_tvl_table(out, rows),
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(rows)?)?;
            Ok(())
        }
        OutputFormat::Csv => write_tvl_csv(out, rows),
    }
}

fn write_tvl_table(out: &mut dyn Write, rows: &[TvlRow]) -> Result<()> {
    writeln!(
        out,
        "{:<10} {:<20} {:>14} {:>18}",
        "Token", "Chain", "Price", "Value Locked"
    )?;
    writeln!(out, "{}", "─".repeat(65))?;

    for row in rows {
        writeln!(
            out,
            "{:<10} {:<20} {:>14.2} {:>18.2}",
            row.symbol, row.chain, row.price, row.locked
        )?;
    }

    Ok(())
}

fn write_tvl_csv(out: &mut dyn Write, rows: &[TvlRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["symbol", "chain", "price", "locked"])
        .map_err(OutputError::from)?;

    for row in rows {
        let price = row.price.to_string();
        let locked = row.locked.to_string();
        writer
            .write_record([
                row.symbol.as_str(),
                row.chain.as_str(),
                price.as_str(),
                locked.as_str(),
            ])
            .map_err(OutputError::from)?;
    }

    writer.flush()?;
    Ok(())
}
