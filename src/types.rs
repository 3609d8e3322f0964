// Error types shared by the verifier and the HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("Chain provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::TransactionNotFound(_) => StatusCode::BAD_REQUEST,
            AppError::Provider(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::InvalidInput(message) => serde_json::json!({ "error": message }),
            AppError::TransactionNotFound(_) => serde_json::json!({ "error": "Transaction not found" }),
            AppError::Provider(details) | AppError::Config(details) => {
                error!("Request failed: {}", self);
                serde_json::json!({ "error": "Server error", "details": details })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ethers::providers::ProviderError> for AppError {
    fn from(err: ethers::providers::ProviderError) -> Self {
        AppError::Provider(err.to_string())
    }
}
