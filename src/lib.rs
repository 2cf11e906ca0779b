//! chainpulse - chain metadata and RPC endpoint health snapshots
//!
//! A Rust library and CLI that probes a chain's public RPC endpoints
//! concurrently (one bounded liveness check per endpoint, no retries) and
//! aggregates the outcomes into an ordered result set with a collapsible
//! preview view. Also carries a built-in chain registry and token
//! locked-value tables.
//!
//! # Example
//!
//! ```rust,no_run
//! use chainpulse::{probe_all, HttpProber, ProbeConfig, Registry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = Registry::builtin();
//!     let chain = registry.find("ethereum")?;
//!
//!     let prober = HttpProber::new()?;
//!     let results = probe_all(&prober, &chain.public_rpcs, &ProbeConfig::default()).await;
//!
//!     for result in &results {
//!         println!("{} reachable={}", result.endpoint, result.reachable);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod registry;
pub mod rpc;
pub mod tvl;
pub mod view;

// Re-exports for convenience
pub use config::{ChainInfo, ConfigFile, ProbeSettings, TokenEntry};
pub use error::{ConfigError, Error, OutputError, ProbeError, Result};
pub use output::{create_writer, write_probe_results, write_tvl_rows, OutputFormat};
pub use registry::Registry;
pub use rpc::{probe_all, HttpProber, ProbeConfig, ProbeResult, Prober, StatusBoard};
pub use tvl::{tvl_rows, TvlRow};
pub use view::{panel, show_toggle, visible, Panel, ViewState};
