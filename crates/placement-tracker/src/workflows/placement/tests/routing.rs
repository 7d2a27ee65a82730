use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::placement::router::placement_router;
use crate::workflows::placement::service::PlacementService;

fn run_request(document_text: &str) -> Request<Body> {
    let payload = json!({ "document_text": document_text });
    Request::builder()
        .method("POST")
        .uri("/api/v1/placement/runs")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn run_endpoint_returns_the_report_with_summary() {
    let (service, _, _) = build_service(vec![strong_candidate(), weak_candidate()]);
    let app = placement_router(Arc::new(service));

    let response = app
        .oneshot(run_request(SAMPLE_DOCUMENT))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["criteria"]["min_cgpa"], 7.5);
    assert_eq!(body["criteria"]["must_have_skills"][0], "Python");
    assert_eq!(body["eligibility"].as_array().expect("array").len(), 2);
    assert_eq!(body["summary"]["eligible"], 1);
    assert_eq!(body["summary"]["not_eligible"], 1);
}

#[tokio::test]
async fn run_endpoint_reports_status_labels_in_snake_case() {
    let (service, _, _) = build_service(vec![weak_candidate()]);
    let app = placement_router(Arc::new(service));

    let response = app
        .oneshot(run_request(SAMPLE_DOCUMENT))
        .await
        .expect("router responds");
    let body = read_json_body(response).await;

    assert_eq!(body["eligibility"][0]["status"], "not_eligible");
    assert_eq!(body["gap_analysis"][0]["priority"], "high");
}

#[tokio::test]
async fn store_outage_maps_to_service_unavailable() {
    let service = PlacementService::new(
        Arc::new(UnavailableCandidateStore),
        Arc::new(CannedPlanner::default()),
        Arc::new(MemoryNotifier::default()),
    );
    let app = placement_router(Arc::new(service));

    let response = app
        .oneshot(run_request(SAMPLE_DOCUMENT))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("candidate store unavailable"));
}

#[tokio::test]
async fn empty_document_still_produces_a_run() {
    let (service, _, _) = build_service(vec![strong_candidate()]);
    let app = placement_router(Arc::new(service));

    let response = app
        .oneshot(run_request(""))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["criteria"]["coverage_percent"], 0.0);
    assert_eq!(body["eligibility"][0]["status"], "eligible");
}
