//! Spawns backend requests on background threads with result channels.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tokio::runtime::Runtime;

use crate::core::backend::{BackendClient, BackendError};
use crate::core::transcript::Turn;

/// Receiver side of a query in progress.
pub struct PendingQuery {
    pub result_rx: mpsc::Receiver<QueryOutcome>,
}

/// Final result of a query plus how long the backend took.
pub struct QueryOutcome {
    pub result: Result<String, BackendError>,
    pub elapsed: Duration,
}

/// Spawn a query on a background thread. The transcript must already
/// include the just-appended user turn.
pub fn spawn_query(
    rt: &Arc<Runtime>,
    backend: Arc<BackendClient>,
    prompt: String,
    transcript: Vec<Turn>,
) -> PendingQuery {
    let (result_tx, result_rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);

    thread::spawn(move || {
        let started = Instant::now();
        let result = rt_clone.block_on(backend.query(&prompt, &transcript));
        let _ = result_tx.send(QueryOutcome {
            result,
            elapsed: started.elapsed(),
        });
    });

    PendingQuery { result_rx }
}

/// Spawn the startup status probe. The receiver yields the served model
/// name, or the error text to display in its place.
pub fn spawn_status_probe(
    rt: &Arc<Runtime>,
    backend: Arc<BackendClient>,
) -> mpsc::Receiver<Result<String, String>> {
    let (tx, rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);

    thread::spawn(move || {
        let result = rt_clone
            .block_on(backend.status())
            .map_err(|e| e.to_string());
        let _ = tx.send(result);
    });

    rx
}
