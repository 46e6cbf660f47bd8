//! HTTP request handlers for the Total-Rewards Compensation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compare_packages, compute_metrics};
use crate::document::render_offer_document;
use crate::error::EngineError;
use crate::models::Candidate;

use super::request::{OfferDocumentRequest, SimulationRequest};
use super::response::{ApiError, ApiErrorResponse, PolicyResponse, SimulationResult};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/simulate", post(simulate_handler))
        .route("/offer-document", post(offer_document_handler))
        .route("/policy", get(policy_handler))
        .with_state(state)
}

/// Handler for POST /simulate.
///
/// Accepts a simulation request and returns the computed metrics for the
/// proposed slice, plus current metrics and a comparison when a current
/// slice is supplied.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let ceiling = state.policy().statutory_ceiling();
    let proposed_slice = request.proposed.into_slice(ceiling);
    let current_slice = request.current.map(|req| req.into_slice(ceiling));
    let candidate: Option<Candidate> = request.candidate.map(Into::into);

    let proposed = match compute_metrics(&proposed_slice) {
        Ok(metrics) => metrics,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Proposed slice rejected");
            return engine_error_response(err);
        }
    };

    let current = match &current_slice {
        Some(slice) => match compute_metrics(slice) {
            Ok(metrics) => Some(metrics),
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Current slice rejected");
                return engine_error_response(err);
            }
        },
        None => None,
    };

    let comparison = current
        .as_ref()
        .map(|current| compare_packages(&proposed, current));

    info!(
        correlation_id = %correlation_id,
        total_package_value = %proposed.total_package_value,
        comparative = current.is_some(),
        "Simulation completed successfully"
    );

    let result = SimulationResult {
        simulation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        candidate,
        proposed,
        current,
        comparison,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for POST /offer-document.
///
/// Computes the proposed metrics and responds with the rendered HTML offer
/// document.
async fn offer_document_handler(
    State(state): State<AppState>,
    payload: Result<Json<OfferDocumentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing offer document request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let ceiling = state.policy().statutory_ceiling();
    let proposed_slice = request.proposed.into_slice(ceiling);
    let current_slice = request.current.map(|req| req.into_slice(ceiling));
    let candidate: Candidate = request.candidate.into();

    // Validate both sides before rendering anything.
    let metrics = match compute_metrics(&proposed_slice) {
        Ok(metrics) => metrics,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Offer document rejected");
            return engine_error_response(err);
        }
    };
    if let Some(slice) = current_slice.as_ref() {
        if let Err(err) = compute_metrics(slice) {
            warn!(correlation_id = %correlation_id, error = %err, "Offer document rejected");
            return engine_error_response(err);
        }
    }

    let html = render_offer_document(
        &candidate,
        &proposed_slice,
        &metrics,
        current_slice.as_ref(),
        state.policy().config(),
    );

    info!(
        correlation_id = %correlation_id,
        candidate = %candidate.full_name,
        "Offer document rendered"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response()
}

/// Handler for GET /policy.
///
/// Exposes the deployment policy so presentation layers can populate
/// their selectors.
async fn policy_handler(State(state): State<AppState>) -> impl IntoResponse {
    let response = PolicyResponse::from(state.policy().config());
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Converts an engine error into its JSON error response.
fn engine_error_response(error: EngineError) -> axum::response::Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Converts a JSON extraction rejection into a 400 response.
fn rejection_response(
    correlation_id: Uuid,
    rejection: JsonRejection,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
