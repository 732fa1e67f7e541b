//! Log entry endpoints — hourly production counts and quality
//! inspections, as submitted by line supervisors.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use linetally_common::error::ApiError;
use linetally_common::logs::{NewInspectionLog, NewProductionLog};

use crate::state::{AppEvent, SharedState};

/// POST /api/production — log one hourly production count.
pub async fn log_production(
    State(state): State<SharedState>,
    Json(payload): Json<NewProductionLog>,
) -> Result<impl IntoResponse, ApiError> {
    let log = state.store.log_production(payload).await?;
    tracing::info!(line = %log.line, date = %log.date, hour = log.hour, "production entry");
    state.publish(AppEvent::ProductionLogged {
        line: log.line.clone(),
        date: log.date.to_string(),
        hour: log.hour,
    });
    Ok(Json(log))
}

/// POST /api/inspection — log one quality inspection result.
pub async fn log_inspection(
    State(state): State<SharedState>,
    Json(payload): Json<NewInspectionLog>,
) -> Result<impl IntoResponse, ApiError> {
    let log = state.store.log_inspection(payload).await?;
    tracing::info!(line = %log.line, date = %log.date, "inspection entry");
    state.publish(AppEvent::InspectionLogged {
        line: log.line.clone(),
        date: log.date.to_string(),
    });
    Ok(Json(log))
}
