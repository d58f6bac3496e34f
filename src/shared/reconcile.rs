/**
 * Snapshot Reconciliation
 *
 * This module helps clients apply a pushed `marker-updated` snapshot to
 * their local view. Every push carries the complete collection, and a naive
 * client would clear its map and rebuild every marker on each push, which
 * flickers visibly. Reconciling by id instead touches only the markers that
 * actually changed.
 *
 * The server never calls this; it lives in `shared` so any Rust client of
 * the push stream can use it.
 */
use crate::shared::Marker;
use std::collections::{HashMap, HashSet};

/// Which marker ids changed while applying a snapshot.
///
/// The caller uses this to patch its UI incrementally: create layers for
/// `added`, refresh layers for `updated`, drop layers for `removed`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Ids present in the snapshot but not in the local view
    pub added: Vec<String>,
    /// Ids present in both, with differing content
    pub updated: Vec<String>,
    /// Ids present locally but absent from the snapshot
    pub removed: Vec<String>,
}

impl ReconcileSummary {
    /// True when the snapshot matched the local view exactly
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Apply a full-collection snapshot to a local marker map by id-diff
///
/// Markers new to the snapshot are inserted, markers whose content differs
/// are replaced, and local markers missing from the snapshot are removed.
/// Markers that are identical on both sides are left untouched.
///
/// # Arguments
/// * `local` - The client's current view, keyed by marker id
/// * `snapshot` - The complete collection from a `marker-updated` push
///
/// # Returns
/// A summary of which ids were added, updated, and removed
pub fn reconcile(local: &mut HashMap<String, Marker>, snapshot: &[Marker]) -> ReconcileSummary {
    let mut summary = ReconcileSummary::default();

    let snapshot_ids: HashSet<&str> = snapshot.iter().map(|m| m.id.as_str()).collect();

    for marker in snapshot {
        match local.get(&marker.id) {
            None => {
                summary.added.push(marker.id.clone());
                local.insert(marker.id.clone(), marker.clone());
            }
            Some(existing) if existing != marker => {
                summary.updated.push(marker.id.clone());
                local.insert(marker.id.clone(), marker.clone());
            }
            Some(_) => {}
        }
    }

    let stale: Vec<String> = local
        .keys()
        .filter(|id| !snapshot_ids.contains(id.as_str()))
        .cloned()
        .collect();
    for id in stale {
        local.remove(&id);
        summary.removed.push(id);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn marker(id: &str, lat: f64, lng: f64) -> Marker {
        Marker::new(id.to_string(), lat, lng)
    }

    #[test]
    fn test_reconcile_into_empty_view() {
        let mut local = HashMap::new();
        let snapshot = vec![marker("m1", 1.0, 2.0), marker("m2", 3.0, 4.0)];

        let summary = reconcile(&mut local, &snapshot);

        assert_eq!(summary.added.len(), 2);
        assert!(summary.updated.is_empty());
        assert!(summary.removed.is_empty());
        assert_eq!(local.len(), 2);
    }

    #[test]
    fn test_reconcile_detects_update() {
        let mut local = HashMap::new();
        local.insert("m1".to_string(), marker("m1", 1.0, 2.0));

        let snapshot = vec![marker("m1", 1.0, 9.9)];
        let summary = reconcile(&mut local, &snapshot);

        assert_eq!(summary.updated, vec!["m1".to_string()]);
        assert_eq!(local["m1"].lng, 9.9);
    }

    #[test]
    fn test_reconcile_removes_stale_markers() {
        let mut local = HashMap::new();
        local.insert("m1".to_string(), marker("m1", 1.0, 2.0));
        local.insert("m2".to_string(), marker("m2", 3.0, 4.0));

        let snapshot = vec![marker("m1", 1.0, 2.0)];
        let summary = reconcile(&mut local, &snapshot);

        assert_eq!(summary.removed, vec!["m2".to_string()]);
        assert!(!local.contains_key("m2"));
        assert_eq!(local.len(), 1);
    }

    #[test]
    fn test_reconcile_identical_snapshot_is_noop() {
        let mut local = HashMap::new();
        local.insert("m1".to_string(), marker("m1", 1.0, 2.0));

        let snapshot = vec![marker("m1", 1.0, 2.0)];
        let summary = reconcile(&mut local, &snapshot);

        assert!(summary.is_noop());
        assert_eq!(local.len(), 1);
    }

    #[test]
    fn test_reconcile_photo_change_counts_as_update() {
        let mut local = HashMap::new();
        local.insert("m1".to_string(), marker("m1", 1.0, 2.0));

        let snapshot = vec![marker("m1", 1.0, 2.0).with_photos(vec!["a.jpg".to_string()])];
        let summary = reconcile(&mut local, &snapshot);

        assert_eq!(summary.updated, vec!["m1".to_string()]);
        assert_eq!(local["m1"].photos, vec!["a.jpg".to_string()]);
    }

    #[test]
    fn test_reconcile_empty_snapshot_clears_view() {
        let mut local = HashMap::new();
        local.insert("m1".to_string(), marker("m1", 1.0, 2.0));

        let summary = reconcile(&mut local, &[]);

        assert_eq!(summary.removed, vec!["m1".to_string()]);
        assert!(local.is_empty());
    }
}
