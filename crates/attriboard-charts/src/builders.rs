//! Static chart builders for the dashboard's tab panel.
//!
//! Each builder takes the loaded context and returns a complete figure with
//! the dashboard palette and titles baked in.

use attriboard_data::DataContext;

use crate::aggregate::{
    attrition_by_gender, attrition_by_overtime, department_attrition_counts,
    education_field_attrition_counts, AttritionSum, GroupCount,
};
use crate::figure::{Axis, Figure, Layout, Marker, Title, Trace};
use crate::{PALETTE_DARK, PALETTE_LIGHT};

const CHART_HEIGHT: u32 = 700;

/// Grouped bar of employee counts per (Department, Attrition).
pub fn department_attrition_bar(ctx: &DataContext) -> Figure {
    grouped_attrition_bar(
        department_attrition_counts(ctx),
        "Total Attrition employees in each Department",
        "Department",
        "No of Employee",
    )
}

/// Grouped bar of employee counts per (EducationField, Attrition).
pub fn education_field_attrition_bar(ctx: &DataContext) -> Figure {
    grouped_attrition_bar(
        education_field_attrition_counts(ctx),
        "Total Attrition employees in each Education Field",
        "Education Field",
        "Total of Employee",
    )
}

/// Bar of leaver counts per overtime flag, one palette color per bar.
pub fn overtime_attrition_bar(ctx: &DataContext) -> Figure {
    let summary = attrition_by_overtime(ctx);
    let palette = bar_palette(summary.len());
    Figure {
        data: vec![Trace::Bar {
            x: summary.iter().map(|s| s.key.clone()).collect(),
            y: summary.iter().map(|s| s.leavers).collect(),
            name: None,
            marker: Some(Marker::per_point(palette)),
        }],
        layout: Layout {
            title: Some(Title::new("Relation between Attrition and Overtime")),
            xaxis: Some(Axis::titled("Overtime")),
            yaxis: Some(Axis::titled("Count")),
            showlegend: Some(false),
            height: Some(CHART_HEIGHT),
            ..Layout::default()
        },
    }
}

/// Pie of leaver counts per gender, Male dark / Female light.
pub fn gender_attrition_pie(ctx: &DataContext) -> Figure {
    let summary = attrition_by_gender(ctx);
    let slice_colors = summary
        .iter()
        .map(|s| gender_color(&s.key).to_string())
        .collect();
    Figure {
        data: vec![Trace::Pie {
            labels: summary.iter().map(|s: &AttritionSum| s.key.clone()).collect(),
            values: summary.iter().map(|s| s.leavers).collect(),
            marker: Some(Marker::pie_slices(slice_colors)),
        }],
        layout: Layout {
            title: Some(Title::new("The Percentage of Employee Attrition per Gender")),
            ..Layout::default()
        },
    }
}

fn gender_color(gender: &str) -> &'static str {
    match gender {
        "Male" => PALETTE_DARK,
        _ => PALETTE_LIGHT,
    }
}

fn bar_palette(n: usize) -> Vec<String> {
    [PALETTE_DARK, PALETTE_LIGHT]
        .iter()
        .cycle()
        .take(n)
        .map(|c| c.to_string())
        .collect()
}

/// Build a grouped bar chart from (key, attrition, count) rows: one trace
/// per attrition label, categories in the order the summary lists them.
fn grouped_attrition_bar(
    rows: Vec<GroupCount>,
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Figure {
    let mut categories: Vec<String> = Vec::new();
    let mut series: Vec<String> = Vec::new();
    for row in &rows {
        if !categories.contains(&row.key) {
            categories.push(row.key.clone());
        }
        if !series.contains(&row.attrition) {
            series.push(row.attrition.clone());
        }
    }

    let data = series
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let y = categories
                .iter()
                .map(|cat| {
                    rows.iter()
                        .find(|r| &r.key == cat && &r.attrition == label)
                        .map(|r| r.count)
                        .unwrap_or(0)
                })
                .collect();
            Trace::Bar {
                x: categories.clone(),
                y,
                name: Some(label.clone()),
                marker: Some(Marker::single(if i == 0 { PALETTE_DARK } else { PALETTE_LIGHT })),
            }
        })
        .collect();

    Figure {
        data,
        layout: Layout {
            title: Some(Title::new(title)),
            xaxis: Some(Axis::titled(x_label)),
            yaxis: Some(Axis::titled(y_label)),
            barmode: Some("group".to_string()),
            showlegend: Some(false),
            height: Some(CHART_HEIGHT),
            ..Layout::default()
        },
    }
}
