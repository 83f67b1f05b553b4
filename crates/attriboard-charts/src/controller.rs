//! The one reactive computation on the dashboard: department selection →
//! tenure histogram.

use tracing::debug;

use attriboard_data::DataContext;

use crate::figure::{Axis, Figure, Layout, Marker, Title, Trace};
use crate::PALETTE_DARK;

/// Fixed histogram bin count.
pub const TENURE_BIN_COUNT: u32 = 20;

const CHART_HEIGHT: u32 = 700;

/// Build the tenure histogram for one department.
///
/// Pure and synchronous: one figure out per call, nothing else touched.
/// A department with no matching rows (possible only for values outside
/// the dropdown's domain) yields a structurally complete figure with empty
/// data arrays rather than an error.
///
/// The figure is a 20-bin histogram of years-at-company with a box-plot
/// marginal above it on a secondary y-domain, the layout plotly-express
/// emits for `marginal="box"`.
pub fn tenure_histogram(department: &str, ctx: &DataContext) -> Figure {
    let tenure = ctx.tenure_for_department(department);
    debug!(department, rows = tenure.len(), "computed tenure histogram");

    Figure {
        data: vec![
            Trace::Histogram {
                x: tenure.clone(),
                nbinsx: TENURE_BIN_COUNT,
                marker: Some(Marker::single(PALETTE_DARK)),
                xaxis: Some("x".to_string()),
                yaxis: Some("y".to_string()),
            },
            Trace::Box {
                x: tenure,
                marker: Some(Marker::single(PALETTE_DARK)),
                xaxis: Some("x".to_string()),
                yaxis: Some("y2".to_string()),
            },
        ],
        layout: Layout {
            title: Some(Title::new(format!(
                "Length of Service Distribution in {department} Department"
            ))),
            xaxis: Some(Axis::titled("Years At Company (years)")),
            yaxis: Some(Axis::titled("count").with_domain(0.0, 0.74)),
            yaxis2: Some(Axis::default().with_domain(0.78, 1.0)),
            showlegend: Some(false),
            height: Some(CHART_HEIGHT),
            ..Layout::default()
        },
    }
}
