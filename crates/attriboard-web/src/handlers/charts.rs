//! JSON chart endpoints. The tenure endpoint is the reactive edge of the
//! dashboard: dropdown change → fetch → Plotly re-render.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use attriboard_charts::{
    department_attrition_bar, education_field_attrition_bar, gender_attrition_pie,
    overtime_attrition_bar, tenure_histogram, Figure,
};
use attriboard_common::error::ApiError;

use crate::state::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct TenureQuery {
    pub department: Option<String>,
}

/// GET /api/charts/tenure?department=X — the reactive controller's
/// transport. An absent parameter falls back to the default selection; a
/// value outside the dropdown's domain degrades to an empty figure inside
/// the controller, so this handler cannot fail.
pub async fn tenure_chart(
    State(state): State<SharedState>,
    Query(query): Query<TenureQuery>,
) -> Json<Figure> {
    let department = query
        .department
        .as_deref()
        .unwrap_or(&state.default_department);
    Json(tenure_histogram(department, &state.ctx))
}

/// GET /api/charts/:name — the static tab charts by name.
pub async fn api_chart_by_name(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let figure = match name.as_str() {
        "department" => department_attrition_bar(&state.ctx),
        "education-field" => education_field_attrition_bar(&state.ctx),
        "overtime" => overtime_attrition_bar(&state.ctx),
        "gender" => gender_attrition_pie(&state.ctx),
        _ => return Err(ApiError::NotFound(format!("No chart named {}", name))),
    };
    Ok(Json(figure))
}

/// GET /api/departments — the dropdown's value domain.
pub async fn api_departments(State(state): State<SharedState>) -> Json<Vec<String>> {
    Json(
        state
            .ctx
            .departments()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}
