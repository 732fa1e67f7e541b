//! linetally-store — in-memory floor log store and period aggregation.
//!
//! Holds the raw hourly production and inspection logs and rolls them
//! up into per-line (or per-building) [`LineAggregate`] records for the
//! ranking engine. Persistence is deliberately process-local; handlers
//! share one store behind `Arc`.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use linetally_common::aggregate::{
    LineAggregate, ManpowerTotals, ProductionTotals, QualityTotals,
};
use linetally_common::error::{LinetallyError, Result};
use linetally_common::logs::{InspectionLog, NewInspectionLog, NewProductionLog, ProductionLog};

/// How a period aggregation groups the raw logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Line,
    Building,
}

#[derive(Default)]
struct StoreInner {
    production: Vec<ProductionLog>,
    inspections: Vec<InspectionLog>,
}

/// Shared floor log store.
#[derive(Default)]
pub struct FloorStore {
    inner: RwLock<StoreInner>,
}

impl FloorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one hourly production log. Rejects impossible payloads
    /// (hour out of range, absent > total) with `EntryRejected`.
    pub async fn log_production(&self, new: NewProductionLog) -> Result<ProductionLog> {
        if new.line.trim().is_empty() {
            return Err(LinetallyError::EntryRejected("line must not be empty".into()));
        }
        // building becomes the aggregate label when comparing buildings,
        // so it gets the same ingest check as line
        if new.building.trim().is_empty() {
            return Err(LinetallyError::EntryRejected("building must not be empty".into()));
        }
        if new.hour > 23 {
            return Err(LinetallyError::EntryRejected(format!(
                "hour {} out of range 0..=23",
                new.hour
            )));
        }
        if new.manpower_absent > new.manpower_total {
            return Err(LinetallyError::EntryRejected(format!(
                "absent {} exceeds manpower {}",
                new.manpower_absent, new.manpower_total
            )));
        }

        let log = ProductionLog {
            id: Uuid::new_v4(),
            line: new.line,
            building: new.building,
            date: new.date,
            hour: new.hour,
            target_qty: new.target_qty,
            achieved_qty: new.achieved_qty,
            eff_percent: new.eff_percent,
            manpower_total: new.manpower_total,
            manpower_absent: new.manpower_absent,
            logged_at: Utc::now(),
        };
        tracing::debug!(line = %log.line, date = %log.date, hour = log.hour, "production logged");
        self.inner.write().await.production.push(log.clone());
        Ok(log)
    }

    /// Append one quality inspection log.
    pub async fn log_inspection(&self, new: NewInspectionLog) -> Result<InspectionLog> {
        if new.line.trim().is_empty() {
            return Err(LinetallyError::EntryRejected("line must not be empty".into()));
        }
        if new.building.trim().is_empty() {
            return Err(LinetallyError::EntryRejected("building must not be empty".into()));
        }
        if new.defects > new.inspected {
            return Err(LinetallyError::EntryRejected(format!(
                "defects {} exceed inspected {}",
                new.defects, new.inspected
            )));
        }

        let log = InspectionLog {
            id: Uuid::new_v4(),
            line: new.line,
            building: new.building,
            date: new.date,
            inspected: new.inspected,
            defects: new.defects,
            logged_at: Utc::now(),
        };
        tracing::debug!(line = %log.line, date = %log.date, "inspection logged");
        self.inner.write().await.inspections.push(log.clone());
        Ok(log)
    }

    /// Roll the logs in `[from, to]` up into one aggregate per group.
    ///
    /// Targets, achieved quantities, inspected counts and defects are
    /// summed; efficiency is the mean over reported hours; manpower is
    /// taken from each line's latest report in the range, then summed
    /// per group (a building groups several lines).
    pub async fn aggregate(&self, from: NaiveDate, to: NaiveDate, group: GroupBy) -> Vec<LineAggregate> {
        #[derive(Default)]
        struct Acc {
            target: f64,
            achieved: f64,
            eff_sum: f64,
            eff_hours: u32,
            inspected: u64,
            defects: u64,
            // line → (date, hour, total, absent), latest report wins
            manpower: BTreeMap<String, (NaiveDate, u8, u32, u32)>,
        }

        let inner = self.inner.read().await;
        let mut groups: BTreeMap<String, Acc> = BTreeMap::new();
        let key = |line: &str, building: &str| match group {
            GroupBy::Line => line.to_string(),
            GroupBy::Building => building.to_string(),
        };

        for log in &inner.production {
            if log.date < from || log.date > to {
                continue;
            }
            let acc = groups.entry(key(&log.line, &log.building)).or_default();
            acc.target += log.target_qty;
            acc.achieved += log.achieved_qty;
            acc.eff_sum += log.eff_percent;
            acc.eff_hours += 1;
            let slot = acc
                .manpower
                .entry(log.line.clone())
                .or_insert((log.date, log.hour, log.manpower_total, log.manpower_absent));
            if (log.date, log.hour) >= (slot.0, slot.1) {
                *slot = (log.date, log.hour, log.manpower_total, log.manpower_absent);
            }
        }

        for log in &inner.inspections {
            if log.date < from || log.date > to {
                continue;
            }
            let acc = groups.entry(key(&log.line, &log.building)).or_default();
            acc.inspected += log.inspected as u64;
            acc.defects += log.defects as u64;
        }

        groups
            .into_iter()
            .map(|(label, acc)| {
                let (manpower_total, manpower_absent) = acc
                    .manpower
                    .values()
                    .fold((0u32, 0u32), |(t, a), &(_, _, total, absent)| {
                        (t + total, a + absent)
                    });
                let defect_rate = if acc.inspected > 0 {
                    acc.defects as f64 / acc.inspected as f64 * 100.0
                } else {
                    0.0
                };
                let avg_eff = if acc.eff_hours > 0 {
                    acc.eff_sum / acc.eff_hours as f64
                } else {
                    0.0
                };
                LineAggregate {
                    label,
                    production: ProductionTotals {
                        target_qty: acc.target,
                        achieved_qty: acc.achieved,
                        avg_eff_percent: avg_eff,
                    },
                    quality: QualityTotals {
                        total_inspected: acc.inspected as f64,
                        defect_rate_percent: defect_rate,
                    },
                    manpower: ManpowerTotals {
                        total: manpower_total as f64,
                        absent: manpower_absent as f64,
                    },
                }
            })
            .collect()
    }

    /// (production logs, inspection logs) currently held.
    pub async fn counts(&self) -> (usize, usize) {
        let inner = self.inner.read().await;
        (inner.production.len(), inner.inspections.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linetally_test_utils::{inspection_payload, production_payload, report_date};

    #[tokio::test]
    async fn aggregates_hourly_logs_per_line() {
        let store = FloorStore::new();
        let date = report_date();

        for hour in 8..12 {
            store
                .log_production(production_payload("Line-1", "B1", date, hour))
                .await
                .unwrap();
        }
        store
            .log_inspection(inspection_payload("Line-1", "B1", date))
            .await
            .unwrap();

        let aggs = store.aggregate(date, date, GroupBy::Line).await;
        assert_eq!(aggs.len(), 1);
        let agg = &aggs[0];
        assert_eq!(agg.label, "Line-1");
        assert_eq!(agg.production.target_qty, 500.0); // 4 × 125
        assert_eq!(agg.production.achieved_qty, 472.0); // 4 × 118
        assert_eq!(agg.production.avg_eff_percent, 82.0);
        assert_eq!(agg.quality.total_inspected, 500.0);
        assert_eq!(agg.quality.defect_rate_percent, 2.0);
        // manpower from the latest hourly report, not summed over hours
        assert_eq!(agg.manpower.total, 40.0);
        assert_eq!(agg.manpower.absent, 2.0);
    }

    #[tokio::test]
    async fn grouping_by_building_sums_lines() {
        let store = FloorStore::new();
        let date = report_date();

        store
            .log_production(production_payload("Line-1", "B1", date, 8))
            .await
            .unwrap();
        store
            .log_production(production_payload("Line-2", "B1", date, 8))
            .await
            .unwrap();
        store
            .log_production(production_payload("Line-9", "B2", date, 8))
            .await
            .unwrap();

        let aggs = store.aggregate(date, date, GroupBy::Building).await;
        assert_eq!(aggs.len(), 2);
        let b1 = aggs.iter().find(|a| a.label == "B1").unwrap();
        assert_eq!(b1.production.target_qty, 250.0);
        assert_eq!(b1.manpower.total, 80.0); // two lines' crews
    }

    #[tokio::test]
    async fn date_range_filters_logs() {
        let store = FloorStore::new();
        let date = report_date();
        let next = date.succ_opt().unwrap();

        store
            .log_production(production_payload("Line-1", "B1", date, 8))
            .await
            .unwrap();
        store
            .log_production(production_payload("Line-1", "B1", next, 8))
            .await
            .unwrap();

        let aggs = store.aggregate(next, next, GroupBy::Line).await;
        assert_eq!(aggs.len(), 1);
        assert_eq!(aggs[0].production.target_qty, 125.0);
    }

    #[tokio::test]
    async fn rejects_impossible_payloads() {
        let store = FloorStore::new();
        let date = report_date();

        let mut bad_hour = production_payload("Line-1", "B1", date, 24);
        bad_hour.hour = 24;
        assert!(store.log_production(bad_hour).await.is_err());

        let mut bad_crew = production_payload("Line-1", "B1", date, 8);
        bad_crew.manpower_absent = 50;
        assert!(store.log_production(bad_crew).await.is_err());

        let mut bad_inspection = inspection_payload("Line-1", "B1", date);
        bad_inspection.defects = 501;
        assert!(store.log_inspection(bad_inspection).await.is_err());
    }

    #[tokio::test]
    async fn rejects_empty_building() {
        let store = FloorStore::new();
        let date = report_date();

        assert!(store
            .log_production(production_payload("Line-1", "", date, 8))
            .await
            .is_err());
        assert!(store
            .log_inspection(inspection_payload("Line-1", "   ", date))
            .await
            .is_err());
        // nothing slipped in to poison a later building aggregation
        assert_eq!(store.counts().await, (0, 0));
    }
}
