//! linetally-test-utils — fixture builders shared by workspace tests.

use chrono::NaiveDate;
use linetally_common::aggregate::{
    LineAggregate, ManpowerTotals, ProductionTotals, QualityTotals,
};
use linetally_common::logs::{NewInspectionLog, NewProductionLog};

pub use pretty_assertions::{assert_eq, assert_ne};

/// Builder for a [`LineAggregate`] fixture. All totals start at zero,
/// so an unconfigured builder yields an inactive line.
#[derive(Debug, Clone)]
pub struct LineAggregateBuilder {
    inner: LineAggregate,
}

pub fn line_aggregate(label: &str) -> LineAggregateBuilder {
    LineAggregateBuilder {
        inner: LineAggregate {
            label: label.to_string(),
            production: ProductionTotals::default(),
            quality: QualityTotals::default(),
            manpower: ManpowerTotals::default(),
        },
    }
}

impl LineAggregateBuilder {
    pub fn production(mut self, target: f64, achieved: f64, avg_eff: f64) -> Self {
        self.inner.production = ProductionTotals {
            target_qty: target,
            achieved_qty: achieved,
            avg_eff_percent: avg_eff,
        };
        self
    }

    pub fn quality(mut self, inspected: f64, defect_rate: f64) -> Self {
        self.inner.quality = QualityTotals {
            total_inspected: inspected,
            defect_rate_percent: defect_rate,
        };
        self
    }

    pub fn manpower(mut self, total: f64, absent: f64) -> Self {
        self.inner.manpower = ManpowerTotals { total, absent };
        self
    }

    pub fn build(self) -> LineAggregate {
        self.inner
    }
}

/// A canned hourly production payload for store/web tests.
pub fn production_payload(line: &str, building: &str, date: NaiveDate, hour: u8) -> NewProductionLog {
    NewProductionLog {
        line: line.to_string(),
        building: building.to_string(),
        date,
        hour,
        target_qty: 125.0,
        achieved_qty: 118.0,
        eff_percent: 82.0,
        manpower_total: 40,
        manpower_absent: 2,
    }
}

/// A canned inspection payload for store/web tests.
pub fn inspection_payload(line: &str, building: &str, date: NaiveDate) -> NewInspectionLog {
    NewInspectionLog {
        line: line.to_string(),
        building: building.to_string(),
        date,
        inspected: 500,
        defects: 10,
    }
}

/// 2026-08-03, an arbitrary fixed reporting day used across tests.
pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
}
