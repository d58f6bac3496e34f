/**
 * Mapmark Server Entry Point
 *
 * This is the main entry point for the mapmark backend server. It
 * loads the runtime configuration, initializes tracing, and starts
 * the Axum HTTP server.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with INFO level by default
    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[Startup] Server initialization started");

    // Load configuration and create the Axum app
    let config = mapmark::backend::server::ServerConfig::from_env();
    let app = mapmark::backend::server::create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("[Startup] Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[Startup] Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
