use axum::{
    extract::{rejection::JsonRejection, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{info, warn};

use super::{method_not_allowed, read_request};
use crate::models::{AppState, MintResponse, StatusMessage, VerificationRequest};
use crate::payment::PaymentRequired;
use crate::types::AppResult;

pub const MINTED: &str = "✅ FLAGGI NFT minted successfully!";
pub const NOT_VERIFIED: &str = "❌ Payment not verified. Wrong address or amount too low.";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/mint", get(get_mint).post(post_mint).fallback(method_not_allowed))
        .route("/api/mint", get(get_mint).post(post_mint).fallback(method_not_allowed))
        .with_state(state)
}

/// x402 advertisement for the mint resource
async fn get_mint(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::PAYMENT_REQUIRED,
        Json(PaymentRequired::mint(&state.config, uri.path())),
    )
}

async fn post_mint(
    State(state): State<AppState>,
    payload: Result<Json<VerificationRequest>, JsonRejection>,
) -> AppResult<Response> {
    let request = read_request(payload)?;
    let (wallet, tx_hash) = request.require()?;
    info!(wallet, tx_hash, "Mint requested");

    let result = state.verifier.verify(wallet, tx_hash).await?;
    if !result.valid {
        warn!(wallet, tx_hash, "Mint payment not verified");
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(StatusMessage::failure(NOT_VERIFIED)),
        )
            .into_response());
    }

    let response = MintResponse {
        success: true,
        wallet: wallet.to_string(),
        tx_hash: tx_hash.to_string(),
        message: MINTED.to_string(),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}
