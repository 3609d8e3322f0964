// CORS for browser-based x402 clients

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn apply_cors(router: Router) -> Router {
    router.layer(cors_layer())
}
