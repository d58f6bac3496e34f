//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - A fully wired router over temporary storage
//! - An `axum_test::TestServer` wrapper around that router

// Not every test binary uses every helper
#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use mapmark::backend::server::config::ServerConfig;
use mapmark::backend::server::create_app;
use tempfile::TempDir;

/// A test server together with the configuration backing it.
///
/// The `TempDir` owns the marker document, photo directory, and
/// workspace directory; keep the struct alive for the whole test.
pub struct TestApp {
    pub server: TestServer,
    pub config: ServerConfig,
    _dir: TempDir,
}

/// Build the full application router over fresh temporary storage
///
/// The workspace directory is seeded with an `index.html` so the
/// session-gated mount has something to serve.
pub async fn build_router() -> (Router<()>, ServerConfig, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        markers_file: dir.path().join("markers.json"),
        pictures_dir: dir.path().join("pictures"),
        public_dir: dir.path().join("public"),
        ..ServerConfig::default()
    };

    std::fs::create_dir_all(&config.public_dir).unwrap();
    std::fs::write(
        config.public_dir.join("index.html"),
        "<html><body>workspace</body></html>",
    )
    .unwrap();

    let app = create_app(&config).await.unwrap();
    (app, config, dir)
}

/// Spawn a `TestServer` over fresh temporary storage
pub async fn spawn_app() -> TestApp {
    let (app, config, dir) = build_router().await;
    let server = TestServer::new(app).unwrap();
    TestApp {
        server,
        config,
        _dir: dir,
    }
}
