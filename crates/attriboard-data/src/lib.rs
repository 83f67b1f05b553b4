//! attriboard-data — Dataset loading for the attrition dashboard.
//!
//! Reads the healthcare employee CSV once at startup into an immutable
//! [`DataContext`]. Everything downstream (aggregations, chart builders,
//! web handlers) borrows the context; nothing mutates it after load.

pub mod context;
pub mod record;

pub use context::DataContext;
pub use record::EmployeeRecord;
