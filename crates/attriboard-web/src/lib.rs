//! attriboard-web — Web server for the attrition dashboard.
//! Provides:
//!   - The single dashboard page (summary cards, chart tabs, the
//!     department-filtered tenure histogram)
//!   - JSON chart endpoints backing the reactive filter
//!   - TOML configuration and tracing setup

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
