use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::notify::{DeliveryStatus, Notifier};
use super::pipeline::RunSummary;
use super::service::{PlacementError, PlacementRunReport, PlacementService};
use super::store::CandidateStore;
use super::training::TrainingPlanner;

#[derive(Debug, Deserialize)]
pub struct ProcessDocumentRequest {
    pub document_text: String,
    /// Dispatch candidate e-mails for this run on a background task after
    /// the response is produced.
    #[serde(default)]
    pub notify: bool,
}

#[derive(Debug, Serialize)]
pub struct ProcessDocumentResponse {
    #[serde(flatten)]
    pub report: PlacementRunReport,
    pub summary: RunSummary,
}

/// Router builder exposing the placement run endpoint over the service.
pub fn placement_router<S, P, N>(service: Arc<PlacementService<S, P, N>>) -> Router
where
    S: CandidateStore + 'static,
    P: TrainingPlanner + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route("/api/v1/placement/runs", post(process_document_handler::<S, P, N>))
        .with_state(service)
}

pub(crate) async fn process_document_handler<S, P, N>(
    State(service): State<Arc<PlacementService<S, P, N>>>,
    axum::Json(request): axum::Json<ProcessDocumentRequest>,
) -> Response
where
    S: CandidateStore + 'static,
    P: TrainingPlanner + 'static,
    N: Notifier + 'static,
{
    match service.process_document(&request.document_text) {
        Ok(report) => {
            if request.notify {
                spawn_notification_dispatch(service.clone(), report.clone());
            }
            let summary = report.summary();
            let body = ProcessDocumentResponse { report, summary };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(PlacementError::Store(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}

/// Delivery runs detached so it can never block or fail the run response.
fn spawn_notification_dispatch<S, P, N>(
    service: Arc<PlacementService<S, P, N>>,
    report: PlacementRunReport,
) where
    S: CandidateStore + 'static,
    P: TrainingPlanner + 'static,
    N: Notifier + 'static,
{
    tokio::spawn(async move {
        let today = Local::now().date_naive();
        match service.dispatch_notifications(&report, today) {
            Ok(outcomes) => {
                let delivered = outcomes
                    .iter()
                    .filter(|outcome| outcome.delivery == DeliveryStatus::Sent)
                    .count();
                info!(
                    delivered,
                    total = outcomes.len(),
                    "notification dispatch finished"
                );
            }
            Err(error) => warn!(%error, "notification dispatch failed"),
        }
    });
}
