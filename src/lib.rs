// FLAGGI gate - x402 payment-gated mint endpoint backed by USDC transfers on Base

pub mod config;
pub mod models;
pub mod types;
pub mod payment;
pub mod routes;
pub mod middleware;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;
pub use types::{AppError, AppResult};

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
