//! Per-line period aggregates: the input shape of the ranking engine.
//! Produced by linetally-store from raw hourly logs, consumed by
//! linetally-engine.

use serde::{Deserialize, Serialize};

/// Production totals for one line over the reporting period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionTotals {
    #[serde(default)]
    pub target_qty: f64,
    #[serde(default)]
    pub achieved_qty: f64,
    #[serde(default)]
    pub avg_eff_percent: f64,
}

/// Quality-gate totals for one line over the reporting period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityTotals {
    #[serde(default)]
    pub total_inspected: f64,
    #[serde(default)]
    pub defect_rate_percent: f64,
}

/// Manpower totals for one line over the reporting period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManpowerTotals {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub absent: f64,
}

/// Raw input to one ranking run: one record per line (or building,
/// when comparing buildings). `label` must be unique within a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAggregate {
    pub label: String,
    #[serde(default)]
    pub production: ProductionTotals,
    #[serde(default)]
    pub quality: QualityTotals,
    #[serde(default)]
    pub manpower: ManpowerTotals,
}
