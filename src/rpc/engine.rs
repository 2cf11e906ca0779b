//! Endpoint health-check aggregation engine

use crate::rpc::Prober;
use futures::stream::{self, StreamExt};
use std::time::{Duration, Instant};

/// Outcome of one liveness probe
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// Endpoint that was probed
    pub endpoint: String,
    /// True if the probe succeeded within its timeout
    pub reachable: bool,
    /// Round-trip time, present only for reachable endpoints
    pub latency: Option<Duration>,
}

/// Probe engine settings
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Per-probe timeout
    pub timeout: Duration,
    /// Max probes in flight (0 = all at once)
    pub concurrency: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            concurrency: 0,
        }
    }
}

impl ProbeConfig {
    fn effective_concurrency(&self, total: usize) -> usize {
        if self.concurrency == 0 {
            total
        } else {
            self.concurrency
        }
    }
}

/// Probe every endpoint concurrently and collect one result per input.
///
/// Results come back in input order regardless of completion order. A
/// probe that errors or exceeds the timeout yields `reachable = false`;
/// individual failures never fail the call as a whole. Duplicate inputs
/// are probed independently. An empty input resolves immediately.
pub async fn probe_all(
    prober: &dyn Prober,
    endpoints: &[String],
    config: &ProbeConfig,
) -> Vec<ProbeResult> {
    if endpoints.is_empty() {
        return Vec::new();
    }

    let limit = config.effective_concurrency(endpoints.len());
    let timeout = config.timeout;

    tracing::info!(
        "Probing {} endpoints ({} in flight, {}ms timeout)",
        endpoints.len(),
        limit,
        timeout.as_millis()
    );

    stream::iter(endpoints.iter().cloned())
        .map(|endpoint| async move { probe_one(prober, endpoint, timeout).await })
        .buffered(limit)
        .collect()
        .await
}

/// Run one probe under the per-probe timeout
async fn probe_one(prober: &dyn Prober, endpoint: String, timeout: Duration) -> ProbeResult {
    let started = Instant::now();

    match tokio::time::timeout(timeout, prober.probe(&endpoint)).await {
        Ok(Ok(())) => {
            let latency = started.elapsed();
            tracing::debug!("Probe ok for {} in {}ms", endpoint, latency.as_millis());
            ProbeResult {
                endpoint,
                reachable: true,
                latency: Some(latency),
            }
        }
        Ok(Err(e)) => {
            tracing::debug!("Probe failed for {}: {}", endpoint, e);
            ProbeResult {
                endpoint,
                reachable: false,
                latency: None,
            }
        }
        Err(_) => {
            tracing::debug!(
                "Probe timed out for {} after {}ms",
                endpoint,
                timeout.as_millis()
            );
            ProbeResult {
                endpoint,
                reachable: false,
                latency: None,
            }
        }
    }
}
