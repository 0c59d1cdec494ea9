//! Error types for lotus operations.
//!
//! This module provides the error hierarchy shared by every lotus crate,
//! with structured error codes and suggestions for resolution.

use thiserror::Error;

/// Result type alias for lotus operations.
pub type LotusResult<T> = Result<T, LotusError>;

/// Main error type for all lotus operations.
#[derive(Error, Debug)]
pub enum LotusError {
    /// Input validation failed.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        code: ErrorCode,
        suggestion: Option<String>,
    },

    /// Chat-completion call failed.
    #[error("Completion error: {message}")]
    Completion {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Sentiment classification failed.
    #[error("Sentiment error: {message}")]
    Sentiment {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Authentication with a hosted provider failed.
    #[error("Authentication error: {message}")]
    Authentication {
        message: String,
        code: ErrorCode,
    },

    /// Rate limit exceeded at a hosted provider.
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        code: ErrorCode,
        retry_after: Option<u64>,
    },

    /// Network error.
    #[error("Network error: {message}")]
    Network {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider not supported.
    #[error("Provider not supported: {provider}")]
    UnsupportedProvider { provider: String },

    /// Parse error.
    #[error("Parse error: {message}")]
    Parse { message: String, code: ErrorCode },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation (VAL_xxx)
    ValInvalidInput,
    ValEmptyEntry,

    // Completion (CMP_xxx)
    CmpConnectionFailed,
    CmpGenerationFailed,
    CmpInvalidResponse,

    // Sentiment (SNT_xxx)
    SntConnectionFailed,
    SntClassificationFailed,
    SntInvalidResponse,

    // Authentication (AUTH_xxx)
    AuthInvalidKey,
    AuthMissingCredentials,

    // Rate Limit (RATE_xxx)
    RateLimitExceeded,

    // Network (NET_xxx)
    NetTimeout,
    NetConnectionFailed,

    // Parse (PARSE_xxx)
    ParseInvalidJson,
    ParseMissingField,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValInvalidInput => "VAL_001",
            ErrorCode::ValEmptyEntry => "VAL_002",
            ErrorCode::CmpConnectionFailed => "CMP_001",
            ErrorCode::CmpGenerationFailed => "CMP_002",
            ErrorCode::CmpInvalidResponse => "CMP_003",
            ErrorCode::SntConnectionFailed => "SNT_001",
            ErrorCode::SntClassificationFailed => "SNT_002",
            ErrorCode::SntInvalidResponse => "SNT_003",
            ErrorCode::AuthInvalidKey => "AUTH_001",
            ErrorCode::AuthMissingCredentials => "AUTH_002",
            ErrorCode::RateLimitExceeded => "RATE_001",
            ErrorCode::NetTimeout => "NET_001",
            ErrorCode::NetConnectionFailed => "NET_002",
            ErrorCode::ParseInvalidJson => "PARSE_001",
            ErrorCode::ParseMissingField => "PARSE_002",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl LotusError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            code: ErrorCode::ValInvalidInput,
            suggestion: None,
        }
    }

    /// Create a validation error with suggestion.
    pub fn validation_with_suggestion(
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            code: ErrorCode::ValInvalidInput,
            suggestion: Some(suggestion.into()),
        }
    }

    /// Create a completion error.
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion {
            message: message.into(),
            code: ErrorCode::CmpGenerationFailed,
            source: None,
        }
    }

    /// Create a sentiment error.
    pub fn sentiment(message: impl Into<String>) -> Self {
        Self::Sentiment {
            message: message.into(),
            code: ErrorCode::SntClassificationFailed,
            source: None,
        }
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
            code: ErrorCode::AuthInvalidKey,
        }
    }

    /// Create a rate limit error.
    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::RateLimit {
            message: message.into(),
            code: ErrorCode::RateLimitExceeded,
            retry_after: None,
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            code: ErrorCode::NetConnectionFailed,
            source: None,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            code: ErrorCode::ParseInvalidJson,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { code, .. } => *code,
            Self::Completion { code, .. } => *code,
            Self::Sentiment { code, .. } => *code,
            Self::Authentication { code, .. } => *code,
            Self::RateLimit { code, .. } => *code,
            Self::Network { code, .. } => *code,
            Self::Parse { code, .. } => *code,
            _ => ErrorCode::Internal,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Authentication { .. } => {
                Some("Please check your API key and authentication credentials")
            }
            Self::RateLimit { .. } => Some("Please wait before making more requests"),
            Self::Validation { suggestion, .. } => suggestion.as_deref(),
            Self::Completion { .. } => Some("Please check your completion provider configuration"),
            Self::Sentiment { .. } => Some("Please check your sentiment provider configuration"),
            _ => None,
        }
    }

    /// Convert from an HTTP status code returned by a hosted provider.
    pub fn from_http_status(status: u16, body: &str) -> Self {
        match status {
            400 => Self::Validation {
                message: body.to_string(),
                code: ErrorCode::ValInvalidInput,
                suggestion: Some("Please check your request parameters".to_string()),
            },
            401 | 403 => Self::Authentication {
                message: body.to_string(),
                code: ErrorCode::AuthInvalidKey,
            },
            429 => Self::RateLimit {
                message: body.to_string(),
                code: ErrorCode::RateLimitExceeded,
                retry_after: None,
            },
            _ => Self::Internal(format!("HTTP {}: {}", status, body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = LotusError::validation("Invalid input");
        assert_eq!(err.code(), ErrorCode::ValInvalidInput);
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_completion_error_has_suggestion() {
        let err = LotusError::completion("timed out");
        assert_eq!(err.code(), ErrorCode::CmpGenerationFailed);
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::AuthInvalidKey.as_str(), "AUTH_001");
        assert_eq!(ErrorCode::CmpGenerationFailed.as_str(), "CMP_002");
    }

    #[test]
    fn test_from_http_status() {
        assert!(matches!(
            LotusError::from_http_status(401, "bad key"),
            LotusError::Authentication { .. }
        ));
        assert!(matches!(
            LotusError::from_http_status(429, "slow down"),
            LotusError::RateLimit { .. }
        ));
    }
}
