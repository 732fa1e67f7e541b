//! Dashboard handler — landing page with today's floor ranking.

use axum::extract::State;
use axum::response::Html;
use chrono::Utc;

use linetally_engine::{rank_floor_default, RankedLine};
use linetally_store::GroupBy;

use crate::state::SharedState;

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let today = Utc::now().date_naive();
    let aggregates = state.store.aggregate(today, today, GroupBy::Line).await;
    let ranking = rank_floor_default(&aggregates).unwrap_or_default();
    let (production_logs, inspection_logs) = state.store.counts().await;

    Html(render_dashboard(&today.to_string(), production_logs, inspection_logs, &ranking))
}

fn render_dashboard(
    date: &str,
    production_logs: usize,
    inspection_logs: usize,
    ranking: &[RankedLine],
) -> String {
    let rows_html: String = if ranking.is_empty() {
        r#"<tr><td colspan="8" class="text-center text-muted">No entries logged today. Supervisors post hourly counts to /api/production.</td></tr>"#.to_string()
    } else {
        ranking.iter().map(|r| {
            let status = if r.active {
                r#"<span class="badge bg-success">active</span>"#
            } else {
                r#"<span class="badge bg-secondary">idle</span>"#
            };
            format!(r#"
            <tr>
                <td><span class="rank-badge">#{}</span></td>
                <td class="fw-bold">{}</td>
                <td>{:.1}%</td>
                <td>{:.1}%</td>
                <td>{:.1}%</td>
                <td>{:.1}%</td>
                <td><code>{}</code></td>
                <td>{}</td>
            </tr>"#,
            r.place, r.label,
            r.amount_hit_rate_percent, r.efficiency_hit_rate_percent,
            r.absenteeism_percent, r.rejection_percent,
            r.total_marks, status)
        }).collect()
    };

    format!(r#"<!DOCTYPE html>
<html lang="en" data-bs-theme="dark">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Linetally — Floor Summary</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">🏭 Floor Summary</h1>
            <p class="text-muted">{} · {} production logs · {} inspections</p>
        </div>
        <div class="d-flex gap-2">
            <a href="/api/summary" class="btn btn-outline-primary btn-sm">Summary JSON</a>
            <a href="/api/comparison" class="btn btn-outline-secondary btn-sm">Buildings</a>
        </div>
    </div>

    <div class="card">
        <div class="card-body p-0">
            <table class="table table-dark table-hover mb-0">
                <thead>
                    <tr>
                        <th width="50">#</th>
                        <th>Line</th>
                        <th>Amount Hit</th>
                        <th>Efficiency</th>
                        <th>Absenteeism</th>
                        <th>Rejection</th>
                        <th>Marks</th>
                        <th>Status</th>
                    </tr>
                </thead>
                <tbody>{}</tbody>
            </table>
        </div>
    </div>
</main>
</body>
</html>"#,
    date, production_logs, inspection_logs, rows_html)
}
