//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    dashboard::dashboard,
    entries::{log_inspection, log_production},
    summary::{api_comparison, api_summary},
    system::api_system,
};
use crate::sse::sse_handler;
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(dashboard))

        // SSE streaming
        .route("/api/events", get(sse_handler))

        // API endpoints
        .route("/api/production", post(log_production))
        .route("/api/inspection", post(log_inspection))
        .route("/api/summary",    get(api_summary))
        .route("/api/comparison", get(api_comparison))
        .route("/api/system",     get(api_system))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
