//! Timer worker for the simulated scan.
//!
//! The UI loop sends `ScanRequest`s and drains `ScanCompleted` events; the
//! widget itself stays on the UI side and is never shared. At most one timer
//! task is alive: a new `Start` or a `Cancel` aborts the in-flight one.

use rand::Rng;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::catalog::pick_receipt;
use crate::receipt::ExtractedReceipt;
use crate::widget::PendingScan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanRequest {
    /// Schedule the delay for a fresh upload
    Start(PendingScan),
    /// Drop whatever is in flight (widget was cleared)
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCompleted {
    pub scan: PendingScan,
    pub receipt: ExtractedReceipt,
}

pub async fn run_worker<R>(
    mut rx: mpsc::UnboundedReceiver<ScanRequest>,
    tx: mpsc::UnboundedSender<ScanCompleted>,
    delay: Duration,
    mut rng: R,
) where
    R: Rng + Send + 'static,
{
    let mut current: Option<JoinHandle<()>> = None;

    while let Some(req) = rx.recv().await {
        // cancel in-flight
        if let Some(h) = current.take() {
            h.abort();
        }

        let scan = match req {
            ScanRequest::Start(scan) => scan,
            ScanRequest::Cancel => {
                log::debug!("scan worker: cancel");
                continue;
            }
        };

        // Drawn now, revealed when the delay elapses.
        let receipt = pick_receipt(&mut rng).clone();
        let tx2 = tx.clone();
        log::debug!(
            "scan worker: generation {} scheduled in {}ms",
            scan.generation,
            delay.as_millis()
        );
        current = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx2.send(ScanCompleted { scan, receipt });
        }));
    }

    if let Some(h) = current.take() {
        h.abort();
    }
}

/// Handle to a spawned worker. Dropping it stops the worker.
pub struct ScanWorker {
    requests: mpsc::UnboundedSender<ScanRequest>,
    events: mpsc::UnboundedReceiver<ScanCompleted>,
}

impl ScanWorker {
    /// Spawn the worker on the current tokio runtime.
    pub fn spawn<R>(delay: Duration, rng: R) -> Self
    where
        R: Rng + Send + 'static,
    {
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (ev_tx, ev_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(req_rx, ev_tx, delay, rng));
        Self {
            requests: req_tx,
            events: ev_rx,
        }
    }

    pub fn start(&self, scan: PendingScan) {
        let _ = self.requests.send(ScanRequest::Start(scan));
    }

    pub fn cancel(&self) {
        let _ = self.requests.send(ScanRequest::Cancel);
    }

    /// Non-blocking poll, for a synchronous UI loop
    pub fn try_next(&mut self) -> Option<ScanCompleted> {
        self.events.try_recv().ok()
    }

    /// Wait for the next completion
    pub async fn next(&mut self) -> Option<ScanCompleted> {
        self.events.recv().await
    }
}
