//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    charts::{api_chart_by_name, api_departments, tenure_chart},
    dashboard::dashboard,
    summary::api_summary,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(dashboard))

        // API endpoints
        .route("/api/charts/tenure", get(tenure_chart))
        .route("/api/charts/{name}", get(api_chart_by_name))
        .route("/api/departments",   get(api_departments))
        .route("/api/summary",       get(api_summary))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
