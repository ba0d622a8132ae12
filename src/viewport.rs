use std::future::Future;
use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::{BumpClient, FetchError};
use crate::constants::{FETCH_RESULT_BUFFER, SRID_WGS84, VIEWPORT_EVENT_BUFFER};
use crate::types::{BoundingBox, BumpView, RoadBump};
use crate::utils::{normalize_lat_value, normalize_lon_value, now_ms};

pub type FetchOutcome = Result<Vec<RoadBump>, FetchError>;

/// Viewport-driven fetch loop: every map settle event dispatches one fetch
/// for the new bounds, and the response replaces the published view
/// wholesale. Requests carry a monotonic sequence number; a completion older
/// than the latest dispatched request is discarded, so overlapping fetches
/// cannot publish stale data out of order.
pub struct ViewportController {
    events: mpsc::Sender<BoundingBox>,
    view: Arc<RwLock<BumpView>>,
    worker: JoinHandle<()>,
}

impl ViewportController {
    pub fn spawn<F, Fut>(fetch: F) -> Self
    where
        F: Fn(BoundingBox) -> Fut + Send + 'static,
        Fut: Future<Output = FetchOutcome> + Send + 'static,
    {
        let (events_tx, events_rx) = mpsc::channel(VIEWPORT_EVENT_BUFFER);
        let view = Arc::new(RwLock::new(BumpView::default()));

        let worker_view = view.clone();
        let worker = tokio::spawn(async move {
            fetch_loop(events_rx, worker_view, fetch).await;
        });

        Self {
            events: events_tx,
            view,
            worker,
        }
    }

    pub fn with_client(client: BumpClient) -> Self {
        Self::spawn(move |bounds| {
            let client = client.clone();
            async move { client.fetch_bumps(&bounds).await }
        })
    }

    pub async fn viewport_changed(&self, bounds: BoundingBox) {
        // Send only fails once the worker is gone; nothing left to notify.
        let _ = self.events.send(bounds).await;
    }

    pub async fn view(&self) -> BumpView {
        self.view.read().await.clone()
    }

    pub async fn close(self) {
        drop(self.events);
        let _ = self.worker.await;
    }
}

async fn fetch_loop<F, Fut>(
    mut events: mpsc::Receiver<BoundingBox>,
    view: Arc<RwLock<BumpView>>,
    fetch: F,
) where
    F: Fn(BoundingBox) -> Fut + Send + 'static,
    Fut: Future<Output = FetchOutcome> + Send + 'static,
{
    let (results_tx, mut results) = mpsc::channel::<(u64, FetchOutcome)>(FETCH_RESULT_BUFFER);
    let mut latest_seq = 0u64;

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(bounds) = event else { break };
                latest_seq += 1;
                let seq = latest_seq;
                let request = fetch(bounds);
                let results_tx = results_tx.clone();
                tokio::spawn(async move {
                    let outcome = request.await;
                    let _ = results_tx.send((seq, outcome)).await;
                });
            }
            completion = results.recv() => {
                // results_tx is still held here, so recv cannot return None.
                let Some((seq, outcome)) = completion else { break };
                if seq < latest_seq {
                    debug!("Discarding stale bump fetch (seq {seq} < {latest_seq})");
                    continue;
                }
                apply_completion(&view, seq, outcome).await;
            }
        }
    }
}

async fn apply_completion(view: &Arc<RwLock<BumpView>>, seq: u64, outcome: FetchOutcome) {
    let mut state = view.write().await;
    match outcome {
        Ok(bumps) => {
            let bumps = sanitize_bumps(bumps);
            debug!("Applying bump fetch seq {seq} ({} bumps)", bumps.len());
            *state = BumpView {
                bumps,
                seq,
                fetched_at_ms: now_ms(),
                last_error: None,
            };
        }
        Err(error) => {
            // Keep the previous bump set; the error is surfaced, not fatal.
            warn!("Bump fetch failed: {error}");
            state.last_error = Some(error.to_string());
        }
    }
}

/// Drops entries the renderer cannot place: non-finite or negative factors,
/// coordinates outside lat/lon range, or points in a foreign SRID.
pub fn sanitize_bumps(mut bumps: Vec<RoadBump>) -> Vec<RoadBump> {
    bumps.retain(|bump| {
        bump.bumpiness_factor.is_finite()
            && bump.bumpiness_factor >= 0.0
            && bump.location.srid == SRID_WGS84
            && normalize_lat_value(bump.location.lat()).is_some()
            && normalize_lon_value(bump.location.lon()).is_some()
    });
    bumps
}
