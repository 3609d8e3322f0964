//! API Routes
//!
//! - `/mint`, `/api/mint` - x402 advertisement (GET) and paid mint (POST)
//! - `/verifyOwnership` - x402 advertisement (GET) and payment check (POST)
//! - `/api/health` - Health checks

pub mod health;
pub mod mint;
pub mod verify_ownership;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::middleware::apply_cors;
use crate::models::{AppState, StatusMessage, VerificationRequest};
use crate::payment::verifier::MISSING_INPUT;
use crate::types::{AppError, AppResult};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let router = Router::new()
        .merge(mint::router(state.clone()))
        .merge(verify_ownership::router(state.clone()))
        .merge(health::router(state))
        .layer(TraceLayer::new_for_http());

    apply_cors(router)
}

/// Unreadable bodies are treated like an empty one: the fields are missing.
pub(crate) fn read_request(
    payload: Result<Json<VerificationRequest>, JsonRejection>,
) -> AppResult<VerificationRequest> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            debug!("Rejected request body: {}", rejection);
            Err(AppError::InvalidInput(MISSING_INPUT.to_string()))
        }
    }
}

pub(crate) async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(StatusMessage::failure("Method not allowed")),
    )
}
