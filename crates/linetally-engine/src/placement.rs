//! Final placement: total marks descending, then a fixed tie-break
//! cascade down to the label, which guarantees a strict total order.
//! Places are therefore distinct consecutive integers, never shared.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::normalise::NormalizedLine;

/// A line with its per-metric marks attached, ready for placement.
#[derive(Debug, Clone)]
pub struct ScoredLine {
    pub metrics: NormalizedLine,
    pub amount_marks: u32,
    pub efficiency_marks: u32,
    pub absenteeism_marks: u32,
    pub rejection_marks: u32,
    pub total_marks: u32,
}

/// Final output record, one per input line, sorted by `place`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedLine {
    pub label: String,
    pub active: bool,
    pub amount_hit_rate_percent: f64,
    pub amount_marks: u32,
    pub efficiency_hit_rate_percent: f64,
    pub efficiency_marks: u32,
    pub absenteeism_percent: f64,
    pub absenteeism_marks: u32,
    pub rejection_percent: f64,
    pub rejection_marks: u32,
    pub total_marks: u32,
    pub place: u32,
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// The tie-break cascade. Earlier keys win; the label comparison at the
/// end makes the order strict.
fn cmp_scored(a: &ScoredLine, b: &ScoredLine) -> Ordering {
    b.total_marks
        .cmp(&a.total_marks)
        .then_with(|| cmp_f64(a.metrics.absenteeism_percent, b.metrics.absenteeism_percent))
        .then_with(|| cmp_f64(a.metrics.rejection_percent, b.metrics.rejection_percent))
        .then_with(|| {
            cmp_f64(
                b.metrics.efficiency_hit_rate_percent,
                a.metrics.efficiency_hit_rate_percent,
            )
        })
        .then_with(|| {
            cmp_f64(
                b.metrics.amount_hit_rate_percent,
                a.metrics.amount_hit_rate_percent,
            )
        })
        .then_with(|| cmp_f64(b.metrics.achieved_qty, a.metrics.achieved_qty))
        .then_with(|| a.metrics.label.cmp(&b.metrics.label))
}

/// Sort all lines (active and inactive) and assign 1-based places.
pub fn resolve_placement(mut scored: Vec<ScoredLine>) -> Vec<RankedLine> {
    scored.sort_by(cmp_scored);
    scored
        .into_iter()
        .enumerate()
        .map(|(i, s)| RankedLine {
            label: s.metrics.label,
            active: s.metrics.active,
            amount_hit_rate_percent: s.metrics.amount_hit_rate_percent,
            amount_marks: s.amount_marks,
            efficiency_hit_rate_percent: s.metrics.efficiency_hit_rate_percent,
            efficiency_marks: s.efficiency_marks,
            absenteeism_percent: s.metrics.absenteeism_percent,
            absenteeism_marks: s.absenteeism_marks,
            rejection_percent: s.metrics.rejection_percent,
            rejection_marks: s.rejection_marks,
            total_marks: s.total_marks,
            place: i as u32 + 1,
        })
        .collect()
}
