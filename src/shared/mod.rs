//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and its clients. These types define the wire format for the
//! marker REST API and the `marker-updated` push stream.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All types are designed for serialization
//! and transmission over HTTP.

/// Marker data structure and collection alias
pub mod marker;

/// Id-diff reconciliation for applying pushed snapshots
pub mod reconcile;

/// Re-export commonly used types for convenience
pub use marker::{Marker, MarkerCollection, MARKER_UPDATED};
pub use reconcile::{reconcile, ReconcileSummary};
