//! Raw floor log entries as submitted by line supervisors.
//! One `ProductionLog` per line per hour, one `InspectionLog` per
//! quality-gate check. Aggregation into per-line period totals lives
//! in linetally-store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Production
// ---------------------------------------------------------------------------

/// Hourly production count for one line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionLog {
    pub id: Uuid,
    pub line: String,
    pub building: String,
    pub date: NaiveDate,
    /// Hour of the shift, 0..=23.
    pub hour: u8,
    pub target_qty: f64,
    pub achieved_qty: f64,
    pub eff_percent: f64,
    pub manpower_total: u32,
    pub manpower_absent: u32,
    pub logged_at: DateTime<Utc>,
}

/// Payload for `POST /api/production`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductionLog {
    pub line: String,
    pub building: String,
    pub date: NaiveDate,
    pub hour: u8,
    #[serde(default)]
    pub target_qty: f64,
    #[serde(default)]
    pub achieved_qty: f64,
    #[serde(default)]
    pub eff_percent: f64,
    #[serde(default)]
    pub manpower_total: u32,
    #[serde(default)]
    pub manpower_absent: u32,
}

// ---------------------------------------------------------------------------
// Quality inspection
// ---------------------------------------------------------------------------

/// One quality-gate inspection result for a line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionLog {
    pub id: Uuid,
    pub line: String,
    pub building: String,
    pub date: NaiveDate,
    pub inspected: u32,
    pub defects: u32,
    pub logged_at: DateTime<Utc>,
}

/// Payload for `POST /api/inspection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInspectionLog {
    pub line: String,
    pub building: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub inspected: u32,
    #[serde(default)]
    pub defects: u32,
}
