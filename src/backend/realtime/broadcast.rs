/**
 * Marker Collection Broadcasting
 *
 * This module provides utilities for pushing marker state to all
 * subscribers. It includes the broadcast type definition and the broadcast
 * helper function.
 *
 * # Broadcasting
 *
 * Snapshots are broadcast using `tokio::sync::broadcast`, which provides
 * a multi-producer, multi-consumer channel. All subscribers receive
 * a copy of each snapshot.
 *
 * # Full-State Pushes
 *
 * Every push carries the complete marker collection, never a delta. This
 * makes each push self-contained: a subscriber that misses one push is
 * fully caught up by the next one.
 */
use crate::shared::MarkerCollection;
use tokio::sync::broadcast;

/// Marker snapshot broadcast channel
///
/// This type represents a broadcast channel for full-collection snapshots.
/// It can be cloned and shared across multiple handlers to allow
/// broadcasting from anywhere in the application.
pub type MarkerBroadcast = broadcast::Sender<MarkerCollection>;

/// Push a marker collection snapshot to all subscribers
///
/// This is fire-and-forget: a send with no subscribers is not an error,
/// it just means nobody is watching the map right now.
///
/// # Arguments
///
/// * `broadcast_tx` - The broadcast sender
/// * `collection` - The complete marker collection to push
///
/// # Returns
///
/// Number of active subscribers that received the snapshot (0 if none)
pub fn broadcast_collection(
    broadcast_tx: &MarkerBroadcast,
    collection: MarkerCollection,
) -> usize {
    match broadcast_tx.send(collection) {
        Ok(subscriber_count) => {
            tracing::info!(
                "[Realtime] Snapshot broadcast to {} subscribers",
                subscriber_count
            );
            subscriber_count
        }
        Err(_) => {
            // No subscribers, that's okay
            tracing::debug!("[Realtime] No subscribers to receive snapshot");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Marker;

    #[tokio::test]
    async fn test_broadcast_with_subscriber() {
        let (tx, mut rx) = broadcast::channel::<MarkerCollection>(16);

        let collection = vec![Marker::new("m1".to_string(), 1.0, 2.0)];
        let count = broadcast_collection(&tx, collection.clone());

        assert_eq!(count, 1);
        assert_eq!(rx.recv().await.unwrap(), collection);
    }

    #[tokio::test]
    async fn test_broadcast_no_subscribers() {
        let (tx, rx) = broadcast::channel::<MarkerCollection>(16);
        drop(rx);

        let count = broadcast_collection(&tx, Vec::new());

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_broadcast_reaches_every_subscriber() {
        let (tx, _) = broadcast::channel::<MarkerCollection>(16);
        let mut sub1 = tx.subscribe();
        let mut sub2 = tx.subscribe();
        let mut sub3 = tx.subscribe();

        let collection = vec![Marker::new("m1".to_string(), 1.0, 2.0)];
        let count = broadcast_collection(&tx, collection.clone());

        assert_eq!(count, 3);
        assert_eq!(sub1.recv().await.unwrap(), collection);
        assert_eq!(sub2.recv().await.unwrap(), collection);
        assert_eq!(sub3.recv().await.unwrap(), collection);
    }

    #[tokio::test]
    async fn test_late_subscriber_misses_earlier_pushes() {
        let (tx, _first) = broadcast::channel::<MarkerCollection>(16);

        broadcast_collection(&tx, vec![Marker::new("m1".to_string(), 1.0, 2.0)]);

        let mut late = tx.subscribe();
        let next = vec![Marker::new("m2".to_string(), 3.0, 4.0)];
        broadcast_collection(&tx, next.clone());

        assert_eq!(late.recv().await.unwrap(), next);
    }
}
