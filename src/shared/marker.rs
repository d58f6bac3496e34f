/**
 * Marker Data Structures
 *
 * This module defines the Marker record and the MarkerCollection alias used
 * throughout the server, along with the name of the realtime event that
 * carries collection updates to viewers.
 *
 * The Marker struct is shared between the server and any client, allowing
 * seamless serialization over HTTP and identical interpretation on both ends.
 */
use serde::{Deserialize, Serialize};

/// Name of the realtime event that carries the full marker collection.
///
/// The server emits this event on the `/events` stream after every committed
/// mutation, and once immediately when a viewer connects. The event data is
/// always the complete collection as a JSON array, never a diff.
pub const MARKER_UPDATED: &str = "marker-updated";

/// The complete set of markers, the unit of persistence and broadcast.
///
/// Persisted as a JSON array; array order is append order. Key uniqueness
/// (at most one marker per `id`) is enforced by the upsert logic, not by
/// the container.
pub type MarkerCollection = Vec<Marker>;

/// A single map marker
///
/// Represents one point of interest placed on the shared map. The `id` is
/// chosen by the client and acts as the primary key; upserting a marker with
/// an existing `id` replaces the stored record wholesale.
///
/// # Fields
/// * `id` - Client-chosen unique identifier
/// * `lat`, `lng` - Coordinates, passed through unvalidated
/// * `icon_url` - Opaque display hint (serialized as `iconUrl`)
/// * `info` - Arbitrary caller-supplied payload (label, description, ...)
/// * `photos` - Names of attached photo blobs, in display order
///
/// # Example
/// ```rust
/// use mapmark::shared::Marker;
///
/// let marker = Marker::new("m1".to_string(), 55.67, 12.56);
/// assert!(marker.photos.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    /// Client-chosen unique identifier (primary key within the collection)
    pub id: String,
    /// Latitude, not range-checked by the server
    pub lat: f64,
    /// Longitude, not range-checked by the server
    pub lng: f64,
    /// Opaque display hint for the client, omitted from JSON when absent
    #[serde(rename = "iconUrl", default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Arbitrary caller-supplied payload, omitted from JSON when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<serde_json::Value>,
    /// Attached photo blob names, insertion order = display order.
    ///
    /// Omitted from JSON when empty so that markers without photos keep the
    /// exact wire shape clients created them with.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
}

impl Marker {
    /// Create a marker with just the required fields
    ///
    /// # Arguments
    /// * `id` - Client-chosen identifier
    /// * `lat` - Latitude
    /// * `lng` - Longitude
    pub fn new(id: String, lat: f64, lng: f64) -> Self {
        Self {
            id,
            lat,
            lng,
            icon_url: None,
            info: None,
            photos: Vec::new(),
        }
    }

    /// Set the icon URL
    pub fn with_icon_url(mut self, icon_url: String) -> Self {
        self.icon_url = Some(icon_url);
        self
    }

    /// Set the info payload
    pub fn with_info(mut self, info: serde_json::Value) -> Self {
        self.info = Some(info);
        self
    }

    /// Set the photo list
    pub fn with_photos(mut self, photos: Vec<String>) -> Self {
        self.photos = photos;
        self
    }
}
