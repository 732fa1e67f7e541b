//! HTTP handlers for all web routes.

pub mod dashboard;
pub mod entries;
pub mod summary;
pub mod system;
