//! Response types for the Total-Rewards Compensation Engine API.
//!
//! This module defines the simulation result, the policy echo and the
//! error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{PercentageOptions, PolicyConfig};
use crate::error::EngineError;
use crate::models::{Candidate, ComparisonResult, ComputedMetrics};

/// The complete result of a package simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Unique identifier for this simulation.
    pub simulation_id: Uuid,
    /// When the simulation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the simulation.
    pub engine_version: String,
    /// The candidate, echoed from the request when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Candidate>,
    /// Metrics for the proposed slice.
    pub proposed: ComputedMetrics,
    /// Metrics for the current slice, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<ComputedMetrics>,
    /// The package comparison, present whenever `current` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonResult>,
}

/// Deployment policy as exposed to presentation layers via `GET /policy`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyResponse {
    /// Human-readable name of the policy set.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// Currency symbol for display formatting.
    pub currency_symbol: String,
    /// Statutory ceiling for capped education-fund bases.
    pub statutory_ceiling: Decimal,
    /// How many days a generated offer remains valid.
    pub offer_validity_days: u32,
    /// The percentage choices offered in UI selectors.
    pub options: PercentageOptions,
}

impl From<&PolicyConfig> for PolicyResponse {
    fn from(config: &PolicyConfig) -> Self {
        PolicyResponse {
            name: config.policy().name.clone(),
            version: config.policy().version.clone(),
            currency_symbol: config.policy().currency_symbol.clone(),
            statutory_ceiling: config.statutory_ceiling(),
            offer_validity_days: config.offer_validity_days(),
            options: config.options().clone(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSlice { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid slice field '{}': {}", field, message),
                    field,
                ),
            },
            EngineError::InvalidPolicy { parameter, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid policy parameter '{}': {}", parameter, message),
                    parameter,
                ),
            },
        }
    }
}
