use std::sync::Arc;

use crate::config::Config;
use crate::payment::TransferVerifier;
use crate::payment::verifier::MISSING_INPUT;
use crate::types::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub verifier: Arc<TransferVerifier>,
}

/// POST body shared by `/mint` and `/verifyOwnership`
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct VerificationRequest {
    #[serde(default)]
    pub wallet: Option<String>,
    #[serde(default, rename = "txHash")]
    pub tx_hash: Option<String>,
}

impl VerificationRequest {
    /// Both fields, or `InvalidInput` if either is absent or empty.
    pub fn require(&self) -> AppResult<(&str, &str)> {
        match (self.wallet.as_deref(), self.tx_hash.as_deref()) {
            (Some(wallet), Some(tx_hash)) if !wallet.is_empty() && !tx_hash.is_empty() => {
                Ok((wallet, tx_hash))
            }
            _ => Err(AppError::InvalidInput(MISSING_INPUT.to_string())),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MintResponse {
    pub success: bool,
    pub wallet: String,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OwnershipResponse {
    pub success: bool,
    pub wallet: String,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
    pub verified: bool,
    pub message: String,
}

/// `{success, message}` envelope for negative outcomes that are not errors
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StatusMessage {
    pub success: bool,
    pub message: String,
}

impl StatusMessage {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub network: String,
}
