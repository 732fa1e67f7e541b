//! Floor summary and building comparison — aggregate the period's logs
//! and run them through the ranking engine.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use linetally_common::error::ApiError;
use linetally_engine::{rank_floor_default, RankedLine};
use linetally_store::GroupBy;

use crate::state::{AppEvent, SharedState};

#[derive(Debug, Deserialize, Default)]
pub struct PeriodQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub grouped_by: &'static str,
    pub best_label: Option<String>,
    pub results: Vec<RankedLine>,
}

impl PeriodQuery {
    /// Missing bounds default to today; a reversed range is a caller bug.
    fn resolve(&self) -> Result<(NaiveDate, NaiveDate), ApiError> {
        let today = Utc::now().date_naive();
        let from = self.from.unwrap_or(today);
        let to = self.to.unwrap_or(from);
        if from > to {
            return Err(ApiError::BadRequest(format!(
                "period start {from} is after period end {to}"
            )));
        }
        Ok((from, to))
    }
}

async fn ranked_period(
    state: &SharedState,
    query: &PeriodQuery,
    group: GroupBy,
    grouped_by: &'static str,
) -> Result<RankingResponse, ApiError> {
    let (from, to) = query.resolve()?;
    let aggregates = state.store.aggregate(from, to, group).await;
    let results = rank_floor_default(&aggregates)?;
    let best_label = results.first().map(|r| r.label.clone());

    tracing::info!(
        %from, %to, grouped_by,
        lines = results.len(),
        best = best_label.as_deref().unwrap_or("-"),
        "ranking computed"
    );
    state.publish(AppEvent::SummaryComputed {
        from: from.to_string(),
        to: to.to_string(),
        best_label: best_label.clone(),
        lines: results.len(),
    });

    Ok(RankingResponse { from, to, grouped_by, best_label, results })
}

/// GET /api/summary — per-line ranking for the period.
pub async fn api_summary(
    State(state): State<SharedState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let response = ranked_period(&state, &query, GroupBy::Line, "line").await?;
    Ok(Json(response))
}

/// GET /api/comparison — buildings compete on the same scoring sheet.
pub async fn api_comparison(
    State(state): State<SharedState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let response = ranked_period(&state, &query, GroupBy::Building, "building").await?;
    Ok(Json(response))
}
