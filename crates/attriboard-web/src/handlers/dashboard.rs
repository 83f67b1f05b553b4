//! Dashboard handler — the single page of the application.
//!
//! The page is static apart from the department dropdown: initial figures
//! are embedded as JSON and rendered client-side by Plotly; the dropdown's
//! change handler (static/js/dashboard.js) re-fetches only the tenure
//! histogram from /api/charts/tenure.

use axum::{extract::State, response::Html};

use attriboard_charts::{
    department_attrition_bar, education_field_attrition_bar, gender_attrition_pie,
    overtime_attrition_bar, tenure_histogram,
};

use crate::handlers::summary::INFORMATION_TEXT;
use crate::state::SharedState;

/// Navigation HTML shared by the page.
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let ctx = &state.ctx;

    let department_options: String = ctx
        .departments()
        .iter()
        .map(|dept| {
            let selected = if *dept == state.default_department { " selected" } else { "" };
            format!(r#"<option value="{dept}"{selected}>{dept}</option>"#)
        })
        .collect();

    Html(render_dashboard(
        &state.config.dashboard.title,
        ctx.headcount(),
        ctx.attrition_count(),
        &department_options,
        &department_attrition_bar(ctx).to_json(),
        &education_field_attrition_bar(ctx).to_json(),
        &overtime_attrition_bar(ctx).to_json(),
        &gender_attrition_pie(ctx).to_json(),
        &tenure_histogram(&state.default_department, ctx).to_json(),
    ))
}

#[allow(clippy::too_many_arguments)]
fn render_dashboard(
    title: &str,
    headcount: usize,
    attrition_count: usize,
    department_options: &str,
    department_fig: &str,
    education_fig: &str,
    overtime_fig: &str,
    gender_fig: &str,
    tenure_fig: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/css/main.css">
    <script src="https://cdn.plot.ly/plotly-2.35.0.min.js"></script>
</head>
<body>
{nav}
<main class="main-content">

    <!-- Summary cards -->
    <div class="card-row">
        <div class="card card-info">
            <div class="card-header">Information</div>
            <div class="card-body"><p>{info}</p></div>
        </div>
        <div class="card card-employee">
            <div class="card-header">Total Employee</div>
            <div class="card-body"><h1>{headcount}</h1></div>
        </div>
        <div class="card card-attrition">
            <div class="card-header">Number of employees Attrition</div>
            <div class="card-body"><h1 class="attrition-value">{attrition_count}</h1></div>
        </div>
    </div>

    <div class="chart-row">
        <!-- Tabbed static charts -->
        <div class="chart-panel">
            <div class="tab-bar">
                <button class="tab-button active" data-target="plot-department">Each Department</button>
                <button class="tab-button" data-target="plot-education">Education Field</button>
                <button class="tab-button" data-target="plot-overtime">Overtime</button>
                <button class="tab-button" data-target="plot-gender">Gender</button>
            </div>
            <div id="plot-department" class="tab-pane active"></div>
            <div id="plot-education" class="tab-pane"></div>
            <div id="plot-overtime" class="tab-pane"></div>
            <div id="plot-gender" class="tab-pane"></div>
        </div>

        <!-- Department filter + tenure histogram -->
        <div class="chart-panel">
            <select id="choose-dept" class="department-select">
                {department_options}
            </select>
            <div id="plot-tenure"></div>
        </div>
    </div>
</main>

<script type="application/json" id="figure-department">{department_fig}</script>
<script type="application/json" id="figure-education">{education_fig}</script>
<script type="application/json" id="figure-overtime">{overtime_fig}</script>
<script type="application/json" id="figure-gender">{gender_fig}</script>
<script type="application/json" id="figure-tenure">{tenure_fig}</script>
<script src="/static/js/dashboard.js"></script>
</body>
</html>"#,
        title = title,
        nav = NAV_HTML,
        info = INFORMATION_TEXT,
        headcount = headcount,
        attrition_count = attrition_count,
        department_options = department_options,
        department_fig = department_fig,
        education_fig = education_fig,
        overtime_fig = overtime_fig,
        gender_fig = gender_fig,
        tenure_fig = tenure_fig,
    )
}
