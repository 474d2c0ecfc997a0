//! Health check endpoint

use crate::client::BeanhopClient;
use crate::error::ApiResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Health check API interface
#[derive(Clone)]
pub struct HealthApi {
    client: BeanhopClient,
}

impl HealthApi {
    /// Create a new health API interface
    pub(crate) fn new(client: BeanhopClient) -> Self {
        Self { client }
    }

    /// Check backend health
    pub async fn check(&self) -> ApiResult<HealthResponse> {
        let url = self.client.endpoint(&["health"], &[])?;
        self.client.get(url).await
    }

    /// Check health with timing information
    pub async fn check_timed(&self) -> ApiResult<(HealthResponse, Duration)> {
        let url = self.client.endpoint(&["health"], &[])?;
        self.client.timed_get(url).await
    }
}

/// Health check response from the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy", "ok")
    pub status: String,
    /// Server time of the check
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl HealthResponse {
    /// Whether the backend reports itself healthy
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.to_lowercase().as_str(), "healthy" | "ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_deserialize() {
        let json = r#"{"status": "healthy", "timestamp": "2024-01-01T00:00:00Z"}"#;

        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_healthy());
        assert_eq!(
            response.timestamp.map(|t| t.to_rfc3339()),
            Some("2024-01-01T00:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_health_without_timestamp() {
        let response: HealthResponse = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!response.is_healthy());
        assert!(response.timestamp.is_none());
    }
}
