//! Endpoint probing: transport, aggregation engine, shared snapshot

mod board;
mod engine;
mod prober;

pub use board::StatusBoard;
pub use engine::{probe_all, ProbeConfig, ProbeResult};
pub use prober::{HttpProber, Prober};
