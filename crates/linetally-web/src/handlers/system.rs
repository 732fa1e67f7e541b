//! System status endpoint for ops checks.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub production_logs: usize,
    pub inspection_logs: usize,
    pub uptime_secs: u64,
}

/// GET /api/system — log counts and uptime.
pub async fn api_system(State(state): State<SharedState>) -> impl IntoResponse {
    let (production_logs, inspection_logs) = state.store.counts().await;
    Json(SystemStatus {
        production_logs,
        inspection_logs,
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}
