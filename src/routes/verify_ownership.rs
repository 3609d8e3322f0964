use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{info, warn};

use super::{method_not_allowed, read_request};
use crate::models::{AppState, OwnershipResponse, VerificationRequest};
use crate::payment::PaymentRequired;
use crate::types::AppResult;

pub const VERIFIED: &str = "✅ Payment verified successfully";
pub const REJECTED: &str = "Transaction sent to wrong address or amount too low";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/verifyOwnership",
            get(get_verify_ownership)
                .post(post_verify_ownership)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}

async fn get_verify_ownership(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::PAYMENT_REQUIRED,
        Json(PaymentRequired::verify_ownership(&state.config)),
    )
}

async fn post_verify_ownership(
    State(state): State<AppState>,
    payload: Result<Json<VerificationRequest>, JsonRejection>,
) -> AppResult<Response> {
    let request = read_request(payload)?;
    let (wallet, tx_hash) = request.require()?;
    info!(wallet, tx_hash, "Ownership check requested");

    let result = state.verifier.verify(wallet, tx_hash).await?;
    if !result.valid {
        warn!(wallet, tx_hash, "Ownership payment not verified");
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": REJECTED })),
        )
            .into_response());
    }

    let response = OwnershipResponse {
        success: true,
        wallet: wallet.to_string(),
        tx_hash: tx_hash.to_string(),
        verified: true,
        message: VERIFIED.to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}
