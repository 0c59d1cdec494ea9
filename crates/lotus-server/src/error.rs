//! Error handling for the REST API server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", message)
    }

    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::new(StatusCode::TOO_MANY_REQUESTS, "RATE_LIMIT", message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert from lotus-core errors
impl From<lotus_core::error::LotusError> for ApiError {
    fn from(err: lotus_core::error::LotusError) -> Self {
        use lotus_core::error::LotusError;

        match err {
            LotusError::Configuration(msg) => ApiError::bad_request(msg),
            LotusError::Validation { message, .. } => ApiError::validation(message),
            LotusError::Authentication { message, .. } => ApiError::unauthorized(message),
            LotusError::RateLimit { message, .. } => ApiError::rate_limit(message),
            LotusError::Completion { message, .. } => {
                ApiError::internal(format!("Completion error: {}", message))
            }
            LotusError::Sentiment { message, .. } => {
                ApiError::internal(format!("Sentiment error: {}", message))
            }
            LotusError::Network { message, .. } => {
                ApiError::internal(format!("Network error: {}", message))
            }
            LotusError::UnsupportedProvider { provider } => {
                ApiError::bad_request(format!("Unsupported provider: {}", provider))
            }
            LotusError::Parse { message, .. } => {
                ApiError::internal(format!("Parse error: {}", message))
            }
            LotusError::Serialization(e) => {
                ApiError::internal(format!("Serialization error: {}", e))
            }
            LotusError::Io(e) => ApiError::internal(format!("IO error: {}", e)),
            LotusError::Internal(msg) => ApiError::internal(msg),
        }
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use lotus_core::error::LotusError;

    #[test]
    fn test_sentiment_error_maps_to_internal() {
        let api: ApiError = LotusError::sentiment("model offline").into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api.message.contains("model offline"));
    }

    #[test]
    fn test_validation_error_maps_to_unprocessable() {
        let api: ApiError = LotusError::validation("empty entry").into();
        assert_eq!(api.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api.code, "VALIDATION_ERROR");
    }
}
