//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },

    /// Circuit breaker is open
    #[error("Circuit breaker is open - search backend temporarily unavailable")]
    CircuitOpen,

    /// All retry attempts exhausted
    #[error("All {attempts} retry attempts failed: {last_error}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Last error message
        last_error: String,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The session was started without network access
    #[error("Remote access is disabled in offline mode")]
    Offline,
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect() || e.is_timeout(),
            Self::ApiResponse { status, .. } => *status >= 500 || *status == 429,
            Self::Json(_)
            | Self::Config(_)
            | Self::CircuitOpen
            | Self::RetriesExhausted { .. }
            | Self::InvalidUrl(_)
            | Self::Offline => false,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }

    /// Whether this error counts toward opening the circuit breaker
    ///
    /// Transport failures and overloaded or failing servers count; a 4xx
    /// answer means the backend is up and the request was rejected.
    #[must_use]
    pub fn counts_as_outage(&self) -> bool {
        self.is_retryable()
    }
}

impl From<ApiError> for beanhop_core::Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Config(msg) => beanhop_core::Error::config(msg),
            ApiError::InvalidUrl(url) => beanhop_core::Error::invalid_config_value("api.base_url", url),
            other => beanhop_core::Error::network(other.to_string()).with_source(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanhop_core::ErrorCode;

    #[test]
    fn test_retryable_statuses() {
        assert!(ApiError::api_response(503, "unavailable").is_retryable());
        assert!(ApiError::api_response(429, "slow down").is_retryable());
        assert!(!ApiError::api_response(404, "missing").is_retryable());
        assert!(!ApiError::CircuitOpen.is_retryable());
        assert!(!ApiError::Offline.is_retryable());
    }

    #[test]
    fn test_outage_classification() {
        assert!(ApiError::api_response(503, "unavailable").counts_as_outage());
        assert!(ApiError::api_response(500, "boom").counts_as_outage());
        assert!(!ApiError::api_response(404, "missing").counts_as_outage());
        assert!(!ApiError::api_response(400, "bad query").counts_as_outage());
        assert!(!ApiError::Json(serde_json::from_str::<u8>("x").unwrap_err()).counts_as_outage());
    }

    #[test]
    fn test_status_classes() {
        assert!(ApiError::api_response(422, "bad").is_client_error());
        assert!(ApiError::api_response(500, "boom").is_server_error());
        assert!(!ApiError::api_response(500, "boom").is_client_error());
    }

    #[test]
    fn test_into_core_error() {
        let err: beanhop_core::Error = ApiError::CircuitOpen.into();
        assert_eq!(err.code, ErrorCode::NetworkError);

        let err: beanhop_core::Error = ApiError::config("timeout cannot be zero").into();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }
}
