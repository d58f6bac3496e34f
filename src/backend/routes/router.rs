/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * Routes are added in a specific order to ensure proper matching:
 * 1. Real-time and session routes (SSE subscription, login, logout)
 * 2. Marker API routes (collection, photos)
 * 3. Static mounts (photo directory, session-gated workspace UI)
 * 4. Fallback handler (404)
 *
 * # Route Priority
 *
 * The static mounts are nested under their own prefixes, so they never
 * shadow the API routes. The workspace UI mount carries the session
 * middleware; everything else is public.
 */

use axum::middleware;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::backend::middleware::require_session;
use crate::backend::routes::marker_routes::configure_marker_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// This function sets up all HTTP routes for the application in the
/// following order:
///
/// 1. **Real-time Route**: SSE subscription for marker snapshots
/// 2. **Session Routes**: Login and logout
/// 3. **Marker Routes**: Collection and photo endpoints
/// 4. **Static Mounts**: Photo directory and gated workspace UI
/// 5. **Fallback Handler**: 404 errors
///
/// # Arguments
///
/// * `app_state` - Application state containing the marker service and
///   session store
/// * `config` - Runtime configuration providing the static mount paths
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## Real-time Route
///
/// - `GET /events` - SSE stream of `marker-updated` collection snapshots
///
/// ## Session Routes
///
/// - `POST /login` - Workspace login, returns a bearer token
/// - `POST /logout` - Revokes the presented bearer token
///
/// ## Marker Routes
///
/// - `GET /markers` - Fetch the full marker collection
/// - `POST /markers` - Upsert one marker by id
/// - `DELETE /markers/{id}` - Delete a marker and its photos
/// - `POST /upload/{id}` - Upload photos and attach them to a marker
/// - `DELETE /photos/{marker_id}/{photo}` - Detach and delete one photo
///
/// ## Static Mounts
///
/// Stored photos are served read-only under `/pictures`. The workspace
/// UI under `/app` requires a logged-in session.
///
/// ## Fallback
///
/// The fallback handler returns 404 for unknown routes.
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    // Start with the real-time and session routes
    let router = Router::new()
        .route(
            "/events",
            axum::routing::get({
                use crate::backend::realtime::subscription::handle_marker_subscription;
                handle_marker_subscription
            }),
        )
        .route(
            "/login",
            axum::routing::post({
                use crate::backend::auth::handlers::login;
                login
            }),
        )
        .route(
            "/logout",
            axum::routing::post({
                use crate::backend::auth::handlers::logout;
                logout
            }),
        );

    // Add marker API routes
    let router = configure_marker_routes(router);

    // Serve stored photos directly
    let router = router.nest_service("/pictures", ServeDir::new(&config.pictures_dir));

    // Workspace UI is only served to logged-in sessions
    let workspace_ui = Router::new()
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(middleware::from_fn_with_state(
            app_state.sessions.clone(),
            require_session,
        ));
    let router = router.nest("/app", workspace_ui);

    // Map clients call the API from other origins
    let router = router.layer(CorsLayer::permissive());

    // Fallback handler for 404
    let router = router.fallback(|| async {
        (axum::http::StatusCode::NOT_FOUND, "404 Not Found")
    });

    // Use AppState as router state
    router.with_state(app_state)
}
