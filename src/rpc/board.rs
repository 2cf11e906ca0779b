//! Shared probe snapshot with stale-response suppression

use crate::rpc::{probe_all, ProbeConfig, ProbeResult, Prober};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

/// Caller-visible probe state for one endpoint list at a time.
///
/// Every refresh is tagged with a generation number; its results are
/// committed only if no newer refresh has started since, so overlapping
/// invocations settle as last-write-wins by invocation, never by probe.
/// The snapshot changes atomically per invocation.
pub struct StatusBoard {
    prober: Arc<dyn Prober>,
    config: ProbeConfig,
    generation: AtomicU64,
    state: Mutex<BoardState>,
    task: Mutex<Option<JoinHandle<()>>>,
}

#[derive(Default)]
struct BoardState {
    results: Vec<ProbeResult>,
    loading: bool,
}

impl StatusBoard {
    pub fn new(prober: Arc<dyn Prober>, config: ProbeConfig) -> Self {
        Self {
            prober,
            config,
            generation: AtomicU64::new(0),
            state: Mutex::new(BoardState::default()),
            task: Mutex::new(None),
        }
    }

    /// Probe `endpoints` and commit the outcome unless a newer refresh
    /// started in the meantime. Returns this invocation's own results
    /// either way; only the shared snapshot is protected from staleness.
    pub async fn refresh(&self, endpoints: &[String]) -> Vec<ProbeResult> {
        let generation = self.begin();
        let results = probe_all(self.prober.as_ref(), endpoints, &self.config).await;
        self.commit(generation, results.clone());
        results
    }

    /// Background variant of `refresh`. Aborts the previous background
    /// task before starting; the generation gate still protects against
    /// an already-completed racer.
    pub fn spawn_refresh(self: &Arc<Self>, endpoints: Vec<String>) {
        let mut task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = task.take() {
            handle.abort();
        }

        let generation = self.begin();
        let board = Arc::clone(self);
        *task = Some(tokio::spawn(async move {
            let results = probe_all(board.prober.as_ref(), &endpoints, &board.config).await;
            board.commit(generation, results);
        }));
    }

    /// Current results plus the loading flag, read together
    pub fn snapshot(&self) -> (Vec<ProbeResult>, bool) {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        (state.results.clone(), state.loading)
    }

    /// Start a new generation: bump the counter, clear the snapshot and
    /// mark it loading. Any invocation begun earlier is now stale.
    fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.results.clear();
        state.loading = true;
        generation
    }

    /// Publish results if `generation` is still the latest one issued.
    /// The check happens under the state lock, so a commit and a newer
    /// `begin` cannot interleave.
    fn commit(&self, generation: u64, results: Vec<ProbeResult>) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Discarding stale results from probe generation {}", generation);
            return false;
        }

        state.results = results;
        state.loading = false;
        true
    }
}

impl Drop for StatusBoard {
    fn drop(&mut self) {
        if let Ok(mut task) = self.task.lock() {
            if let Some(handle) = task.take() {
                handle.abort();
            }
        }
    }
}
