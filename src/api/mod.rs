//! HTTP API module for the Total-Rewards Compensation Engine.
//!
//! This module provides the REST endpoints for running package
//! simulations, rendering offer documents and exposing deployment policy.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{OfferDocumentRequest, SimulationRequest};
pub use response::{ApiError, PolicyResponse, SimulationResult};
pub use state::AppState;
