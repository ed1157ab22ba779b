use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use carecards::{CardError, RenderError, ValidationError};
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("{0}")]
    MissingFields(#[from] ValidationError),

    #[error("Cannot create a card without a poem")]
    EmptyPoem,

    #[error("Card rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_)
            | ServerError::MissingFields(_)
            | ServerError::EmptyPoem => StatusCode::BAD_REQUEST,
            ServerError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ServerError::MissingFields(_) => "MISSING_FIELDS",
            ServerError::EmptyPoem => "EMPTY_POEM",
            ServerError::Render(_) => "RENDER_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        });

        (status, body).into_response()
    }
}

impl From<CardError> for ServerError {
    fn from(err: CardError) -> Self {
        match err {
            CardError::Validation(err) => ServerError::MissingFields(err),
            CardError::Render(err) => ServerError::Render(err),
            CardError::EmptyPoem => ServerError::EmptyPoem,
        }
    }
}
