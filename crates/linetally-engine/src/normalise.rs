//! Metric normalisation: raw per-line period totals → four bounded
//! percentage metrics. Every downstream stage assumes finite values,
//! so all coercion to 0 happens here.

use linetally_common::aggregate::LineAggregate;
use linetally_common::error::{LinetallyError, Result};

/// Normalised metrics for one line. `achieved_qty` is carried through
/// from the raw input because the placement cascade needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedLine {
    pub label: String,
    pub active: bool,
    pub amount_hit_rate_percent: f64,
    pub efficiency_hit_rate_percent: f64,
    pub absenteeism_percent: f64,
    pub rejection_percent: f64,
    pub achieved_qty: f64,
}

/// Clamp a percentage into [0, 100]. Non-finite input counts as 0.
pub fn clamp_percent(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    x.clamp(0.0, 100.0)
}

/// num/den as a clamped percentage; a non-positive denominator yields 0
/// rather than Infinity/NaN.
pub fn ratio_percent(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        clamp_percent(num / den * 100.0)
    } else {
        0.0
    }
}

fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Normalise one raw aggregate.
pub fn normalise_line(raw: &LineAggregate) -> NormalizedLine {
    let target = finite_or_zero(raw.production.target_qty);
    let achieved = finite_or_zero(raw.production.achieved_qty);
    let inspected = finite_or_zero(raw.quality.total_inspected);
    let manpower_total = finite_or_zero(raw.manpower.total);
    let manpower_absent = finite_or_zero(raw.manpower.absent);

    NormalizedLine {
        label: raw.label.clone(),
        active: target > 0.0 || achieved > 0.0 || inspected > 0.0,
        amount_hit_rate_percent: ratio_percent(achieved, target),
        efficiency_hit_rate_percent: clamp_percent(raw.production.avg_eff_percent),
        absenteeism_percent: ratio_percent(manpower_absent, manpower_total),
        rejection_percent: clamp_percent(raw.quality.defect_rate_percent),
        achieved_qty: achieved,
    }
}

/// Normalise a full run's input. Fails fast on an empty or duplicate
/// `label` — a malformed run aborts with no partial result.
pub fn normalise(lines: &[LineAggregate]) -> Result<Vec<NormalizedLine>> {
    let mut seen = std::collections::HashSet::with_capacity(lines.len());
    for line in lines {
        if line.label.trim().is_empty() {
            return Err(LinetallyError::InvalidInput(
                "aggregate record is missing its label".into(),
            ));
        }
        if !seen.insert(line.label.as_str()) {
            return Err(LinetallyError::InvalidInput(format!(
                "duplicate label in ranking input: {}",
                line.label
            )));
        }
    }
    Ok(lines.iter().map(normalise_line).collect())
}
