//! HTTP handlers for all web routes.

pub mod charts;
pub mod dashboard;
pub mod summary;
