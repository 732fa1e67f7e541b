//! Linetally Web Server
//!
//! Run with: cargo run -p linetally-web

use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Linetally web server...");

    let state = linetally_web::state::AppState::new();
    let app = linetally_web::router::build_router(state);

    let addr: SocketAddr = std::env::var("LINETALLY_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3001".to_string())
        .parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
