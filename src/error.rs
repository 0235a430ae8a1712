use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoffeeSupportError>;

/// Error taxonomy for the support service
#[derive(Error, Debug)]
pub enum CoffeeSupportError {
    #[error("First message should be from the user.")]
    InvalidFirstMessage,

    #[error("Rating is required.")]
    MissingRating,

    #[error("User ID is required")]
    MissingUserId,

    /// The model declined to answer for safety reasons. Recovered inside the
    /// chat pipeline by substituting a fixed fallback reply; never surfaced
    /// to the caller as an error response.
    #[error("Generation blocked for safety reasons")]
    SafetyRefusal,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Pool error: {0}")]
    Pool(#[from] deadpool_redis::PoolError),

    #[error("Pool creation error: {0}")]
    PoolCreation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoffeeSupportError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidFirstMessage | Self::MissingRating | Self::MissingUserId => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoffeeSupportError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
