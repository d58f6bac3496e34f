/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: opening the stores, wiring the marker service and broadcast
 * channel, and configuring the router.
 *
 * # Initialization Process
 *
 * 1. Open the marker document store (seeding an empty document)
 * 2. Open the photo blob store (creating the directory)
 * 3. Create the snapshot broadcast channel
 * 4. Build the marker service, session store, and authenticator
 * 5. Create and configure the router
 *
 * # Error Handling
 *
 * Failing to open either store is fatal; a marker server that cannot
 * persist markers has nothing to serve. Everything after that point is
 * infallible.
 */
use axum::Router;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::backend::auth::credentials::SharedCredential;
use crate::backend::auth::sessions::SessionStore;
use crate::backend::markers::MarkerService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{MarkerStore, PhotoStore, StoreResult};
use crate::shared::MarkerCollection;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Runtime configuration (paths, port, credentials)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns an error if the marker document or photo directory cannot
/// be opened
pub async fn create_app(config: &ServerConfig) -> StoreResult<Router<()>> {
    tracing::info!("[Server] Initializing marker server");

    // Step 1: Open the marker document store
    // Seeds an empty collection on first run
    let store = MarkerStore::open(&config.markers_file).await?;
    tracing::info!("[Server] Marker document at {}", store.path().display());

    // Step 2: Open the photo blob store
    let photos = PhotoStore::open(&config.pictures_dir).await?;

    // Step 3: Create the snapshot broadcast channel
    // Capacity of 16 full-collection snapshots is plenty at this scale
    let (broadcast_tx, _) = broadcast::channel::<MarkerCollection>(16);

    // Step 4: Build the marker service around the stores and channel
    let markers = Arc::new(MarkerService::new(store, photos, broadcast_tx));

    tracing::info!("[Server] Marker service and broadcast channel initialized");

    // Step 5: Create the workspace gate
    let sessions = SessionStore::new();
    let authenticator = Arc::new(SharedCredential::new(
        config.username.clone(),
        config.password.clone(),
    ));

    // Step 6: Create app state and the router
    let app_state = AppState {
        markers,
        sessions,
        authenticator,
    };

    let app = create_router(app_state, config);

    tracing::info!("[Server] Router configured");

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_create_app_seeds_stores() {
        let dir = tempdir().unwrap();
        let config = ServerConfig {
            markers_file: dir.path().join("markers.json"),
            pictures_dir: dir.path().join("pictures"),
            public_dir: dir.path().join("public"),
            ..ServerConfig::default()
        };

        create_app(&config).await.unwrap();

        assert!(config.markers_file.exists());
        assert!(config.pictures_dir.is_dir());
    }
}
