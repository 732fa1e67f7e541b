//! linetally-common — Shared types and errors used across all Linetally crates.

pub mod aggregate;
pub mod error;
pub mod logs;

// Re-export commonly used types
pub use aggregate::{LineAggregate, ManpowerTotals, ProductionTotals, QualityTotals};
pub use error::{ApiError, LinetallyError, Result};
pub use logs::{InspectionLog, NewInspectionLog, NewProductionLog, ProductionLog};
