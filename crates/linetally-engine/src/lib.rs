//! linetally-engine — floor summary ranking and scoring engine.
//!
//! Pure transformation pipeline over per-line period aggregates:
//! Normalise → dense-rank four metrics → marks lookup → placement.
//! No I/O and no shared state, so concurrent API handlers can call it
//! freely.

pub mod marks;
pub mod normalise;
pub mod placement;
pub mod rank;

pub use linetally_common::aggregate::{
    LineAggregate, ManpowerTotals, ProductionTotals, QualityTotals,
};
pub use marks::{marks_for_rank, MarkRule, MarkTables};
pub use normalise::NormalizedLine;
pub use placement::{RankedLine, ScoredLine};
pub use rank::{dense_rank, Direction};

use linetally_common::error::Result;

/// Run the full ranking pipeline over one period's aggregates.
///
/// Inactive lines (no target, no output, nothing inspected) skip the
/// ranker entirely: their marks are forced to 0 and they fall to the
/// bottom of the placement unless every line is inactive.
pub fn rank_floor(lines: &[LineAggregate], tables: &MarkTables) -> Result<Vec<RankedLine>> {
    let normalized = normalise::normalise(lines)?;
    let active: Vec<&NormalizedLine> = normalized.iter().filter(|l| l.active).collect();

    let amount_ranks = dense_rank(
        &active
            .iter()
            .map(|l| (l.label.as_str(), l.amount_hit_rate_percent))
            .collect::<Vec<_>>(),
        Direction::Desc,
    );
    let efficiency_ranks = dense_rank(
        &active
            .iter()
            .map(|l| (l.label.as_str(), l.efficiency_hit_rate_percent))
            .collect::<Vec<_>>(),
        Direction::Desc,
    );
    let absenteeism_ranks = dense_rank(
        &active
            .iter()
            .map(|l| (l.label.as_str(), l.absenteeism_percent))
            .collect::<Vec<_>>(),
        Direction::Asc,
    );
    let rejection_ranks = dense_rank(
        &active
            .iter()
            .map(|l| (l.label.as_str(), l.rejection_percent))
            .collect::<Vec<_>>(),
        Direction::Asc,
    );

    let rank_of = |map: &std::collections::HashMap<String, u32>, label: &str| {
        map.get(label).copied().unwrap_or(0)
    };

    let scored: Vec<ScoredLine> = normalized
        .into_iter()
        .map(|metrics| {
            let (amount_marks, efficiency_marks, absenteeism_marks, rejection_marks) =
                if metrics.active {
                    (
                        marks_for_rank(rank_of(&amount_ranks, &metrics.label), &tables.amount),
                        marks_for_rank(
                            rank_of(&efficiency_ranks, &metrics.label),
                            &tables.efficiency,
                        ),
                        marks_for_rank(
                            rank_of(&absenteeism_ranks, &metrics.label),
                            &tables.absenteeism,
                        ),
                        marks_for_rank(
                            rank_of(&rejection_ranks, &metrics.label),
                            &tables.rejection,
                        ),
                    )
                } else {
                    (0, 0, 0, 0)
                };
            let total_marks =
                amount_marks + efficiency_marks + absenteeism_marks + rejection_marks;
            ScoredLine {
                metrics,
                amount_marks,
                efficiency_marks,
                absenteeism_marks,
                rejection_marks,
                total_marks,
            }
        })
        .collect();

    tracing::debug!(lines = scored.len(), "resolved floor ranking");
    Ok(placement::resolve_placement(scored))
}

/// `rank_floor` with the stock scoring sheet.
pub fn rank_floor_default(lines: &[LineAggregate]) -> Result<Vec<RankedLine>> {
    rank_floor(lines, &MarkTables::default())
}
