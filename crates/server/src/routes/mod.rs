//! API route handlers
//!
//! - `health`: liveness and readiness probes
//! - `generate`: poem generation for the demo form
//! - `card`: printable card download

pub mod card;
pub mod generate;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Root endpoint (GET /).
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Care Cards Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/demo-generate",
            "/api/card",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ServerError::PayloadTooLarge;
        }
        ServerError::BadRequest(rejection.body_text())
    }
}
