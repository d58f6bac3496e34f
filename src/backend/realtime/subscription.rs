/**
 * Marker Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) subscription handler
 * for the `/events` endpoint. Every connected client receives the complete
 * marker collection on connect, then again after every accepted mutation.
 *
 * # Server-Sent Events (SSE)
 *
 * This endpoint uses SSE to provide a one-way stream of events from server
 * to client. SSE is simpler than WebSockets for one-way communication and
 * works well with HTTP/2.
 *
 * # Connect-Time Snapshot
 *
 * The handler subscribes to the broadcast channel before reading the
 * current collection. A mutation that commits in between is then delivered
 * twice rather than lost, and duplicate full-state pushes are harmless.
 *
 * # Connection Management
 *
 * - Connections are kept alive using the SSE keep-alive mechanism
 * - Lagged receivers skip ahead; every push carries complete state, so
 *   missed snapshots are already stale by the time the next one arrives
 */
use crate::backend::markers::MarkerService;
use crate::shared::{MarkerCollection, MARKER_UPDATED};
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Handle marker subscription (GET /events)
///
/// This endpoint provides the live marker feed using Server-Sent Events.
/// Each event is named `marker-updated` and its data is the complete
/// marker collection as a JSON array.
///
/// # Returns
///
/// Server-Sent Events stream; the first event is the current collection,
/// every subsequent event reflects an accepted mutation
///
/// # Example Request
///
/// ```http
/// GET /events HTTP/1.1
/// Accept: text/event-stream
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
/// Cache-Control: no-cache
///
/// event: marker-updated
/// data: [{"id":"m1","lat":40.7128,"lng":-74.006}]
/// ```
pub async fn handle_marker_subscription(
    State(markers): State<Arc<MarkerService>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    tracing::info!("[Realtime] Subscription request received");

    // Subscribe before loading the snapshot so a mutation committing in
    // between is delivered rather than lost
    let broadcast_rx = markers.subscribe();
    let snapshot = markers.fetch_all().await;

    tracing::info!(
        "[Realtime] Subscription active, sending snapshot of {} markers",
        snapshot.len()
    );

    let stream = stream::unfold(
        (Some(snapshot), broadcast_rx),
        move |(pending, mut rx)| async move {
            // The connect-time snapshot goes out before any live push
            if let Some(collection) = pending {
                match collection_event(&collection) {
                    Ok(event) => return Some((Ok(event), (None, rx))),
                    Err(e) => {
                        tracing::error!("[Realtime] Failed to serialize snapshot: {:?}", e);
                    }
                }
            }

            // Loop until we get a snapshot that serializes, or the channel closes
            loop {
                match rx.recv().await {
                    Ok(collection) => match collection_event(&collection) {
                        Ok(event) => return Some((Ok(event), (None, rx))),
                        Err(e) => {
                            tracing::error!("[Realtime] Failed to serialize snapshot: {:?}", e);
                            continue;
                        }
                    },
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Each push is full state, so the skipped ones are already stale
                        tracing::warn!("[Realtime] Receiver lagged, skipped {} snapshots", skipped);
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::warn!("[Realtime] Broadcast channel closed, ending stream");
                        return None;
                    }
                }
            }
        },
    );

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Build a named SSE event carrying the collection as a JSON array
fn collection_event(collection: &MarkerCollection) -> Result<Event, serde_json::Error> {
    let data = serde_json::to_string(collection)?;
    Ok(Event::default().event(MARKER_UPDATED).data(data))
}
