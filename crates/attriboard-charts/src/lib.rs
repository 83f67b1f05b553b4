//! attriboard-charts — Aggregations and chart specifications for the
//! attrition dashboard.
//!
//! Everything here is a pure function of the loaded [`DataContext`]: the
//! aggregation layer produces small summary tables, the builders map those
//! to Plotly-compatible [`Figure`] values, and [`tenure_histogram`] is the
//! one reactive entry point (department selection → histogram). No I/O, no
//! shared mutable state; identical inputs serialize to identical JSON.
//!
//! [`DataContext`]: attriboard_data::DataContext

pub mod aggregate;
pub mod builders;
pub mod controller;
pub mod figure;

pub use builders::{
    department_attrition_bar, education_field_attrition_bar, gender_attrition_pie,
    overtime_attrition_bar,
};
pub use controller::tenure_histogram;
pub use figure::{Figure, Layout, Trace};

/// The two-tone palette every chart draws from.
pub const PALETTE_DARK: &str = "#618685";
pub const PALETTE_LIGHT: &str = "#80ced6";
