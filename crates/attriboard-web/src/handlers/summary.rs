//! Summary-card scalars, computed once per request from the full table.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::SharedState;

pub const INFORMATION_TEXT: &str = "This is the information of employees in our Company.";

#[derive(Debug, Serialize)]
pub struct SummaryCards {
    pub description: String,
    pub headcount: usize,
    pub attrition_count: usize,
}

/// GET /api/summary
pub async fn api_summary(State(state): State<SharedState>) -> Json<SummaryCards> {
    Json(SummaryCards {
        description: INFORMATION_TEXT.to_string(),
        headcount: state.ctx.headcount(),
        attrition_count: state.ctx.attrition_count(),
    })
}
