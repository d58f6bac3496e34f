/**
 * Server Configuration
 *
 * This module handles loading server configuration from environment
 * variables, with working defaults for local development.
 *
 * # Configuration Sources
 *
 * Every setting comes from the environment; nothing is required. The
 * shared credential pair defaults are fine for a private deployment but
 * are warned about at startup so operators notice them.
 */
use std::path::PathBuf;

/// Runtime configuration for the marker server
///
/// # Fields
///
/// * `port` - TCP port to listen on
/// * `markers_file` - Path of the persisted marker document
/// * `pictures_dir` - Directory holding photo blobs
/// * `public_dir` - Directory of gated static editor assets
/// * `username` / `password` - The shared workspace credential pair
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on
    pub port: u16,
    /// Path of the persisted marker document
    pub markers_file: PathBuf,
    /// Directory holding photo blobs
    pub pictures_dir: PathBuf,
    /// Directory of gated static editor assets
    pub public_dir: PathBuf,
    /// Shared workspace username
    pub username: String,
    /// Shared workspace password
    pub password: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            markers_file: PathBuf::from("markers.json"),
            pictures_dir: PathBuf::from("pictures"),
            public_dir: PathBuf::from("public"),
            username: "admin".to_string(),
            password: "password123".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// Recognized variables:
    /// - `SERVER_PORT` - listen port (default 3000)
    /// - `MARKERS_FILE` - marker document path (default `markers.json`)
    /// - `PICTURES_DIR` - photo blob directory (default `pictures`)
    /// - `PUBLIC_DIR` - gated static asset directory (default `public`)
    /// - `WORKSPACE_USER` / `WORKSPACE_PASSWORD` - the shared credential
    ///   pair; defaults are warned about so they do not linger unnoticed
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let markers_file = std::env::var("MARKERS_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.markers_file);

        let pictures_dir = std::env::var("PICTURES_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.pictures_dir);

        let public_dir = std::env::var("PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);

        let username = std::env::var("WORKSPACE_USER").unwrap_or_else(|_| {
            tracing::warn!("WORKSPACE_USER not set, using the default username");
            defaults.username.clone()
        });

        let password = std::env::var("WORKSPACE_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("WORKSPACE_PASSWORD not set, using the default password");
            defaults.password.clone()
        });

        Self {
            port,
            markers_file,
            pictures_dir,
            public_dir,
            username,
            password,
        }
    }
}
