//! End-to-end HTTP checks against the built router, no network involved.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use attriboard_data::DataContext;
use attriboard_web::config::Config;
use attriboard_web::router::build_router;
use attriboard_web::state::AppState;

const SAMPLE_CSV: &str = "\
EmployeeID,Attrition,Department,EducationField,Gender,OverTime,YearsAtCompany
1,Yes,Cardiology,Medical,Female,Yes,6
2,No,Maternity,Life Sciences,Male,No,10
3,No,Maternity,Other,Male,No,3
4,Yes,Maternity,Medical,Female,Yes,1
5,No,Neurology,Medical,Male,No,7
";

fn app() -> axum::Router {
    let ctx = DataContext::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    build_router(AppState::new(Config::default(), ctx))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn dashboard_page_renders_cards_and_dropdown() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Total Employee"));
    assert!(html.contains("Number of employees Attrition"));
    assert!(html.contains(r#"<option value="Maternity" selected>"#));
    assert!(html.contains(r#"id="plot-tenure""#));
    // Cards computed from the full table.
    assert!(html.contains("<h1>5</h1>"));
    assert!(html.contains(r#"<h1 class="attrition-value">2</h1>"#));
}

#[tokio::test]
async fn tenure_endpoint_returns_department_histogram() {
    let (status, body) = get(app(), "/api/charts/tenure?department=Maternity").await;
    assert_eq!(status, StatusCode::OK);

    let figure: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(figure["data"][0]["type"], "histogram");
    assert_eq!(figure["data"][0]["x"].as_array().unwrap().len(), 3);
    assert_eq!(figure["data"][1]["type"], "box");
    assert_eq!(
        figure["layout"]["title"]["text"],
        "Length of Service Distribution in Maternity Department"
    );
}

#[tokio::test]
async fn tenure_endpoint_defaults_to_configured_department() {
    let (status, body) = get(app(), "/api/charts/tenure").await;
    assert_eq!(status, StatusCode::OK);

    let figure: serde_json::Value = serde_json::from_slice(&body).unwrap();
    // Default config selects Maternity, present in the sample.
    assert_eq!(figure["data"][0]["x"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_department_degrades_to_empty_chart() {
    let (status, body) = get(app(), "/api/charts/tenure?department=Oncology").await;
    assert_eq!(status, StatusCode::OK);

    let figure: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(figure["data"][0]["x"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn named_static_charts_and_404() {
    for name in ["department", "education-field", "overtime", "gender"] {
        let (status, body) = get(app(), &format!("/api/charts/{name}")).await;
        assert_eq!(status, StatusCode::OK, "chart {name}");
        let figure: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(figure["data"].as_array().is_some_and(|d| !d.is_empty()));
    }

    let (status, _) = get(app(), "/api/charts/no-such-chart").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn summary_and_departments_endpoints() {
    let (status, body) = get(app(), "/api/summary").await;
    assert_eq!(status, StatusCode::OK);
    let summary: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(summary["headcount"], 5);
    assert_eq!(summary["attrition_count"], 2);

    let (status, body) = get(app(), "/api/departments").await;
    assert_eq!(status, StatusCode::OK);
    let departments: Vec<String> = serde_json::from_slice(&body).unwrap();
    assert_eq!(departments, vec!["Cardiology", "Maternity", "Neurology"]);
}
