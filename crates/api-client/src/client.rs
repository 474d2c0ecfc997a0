//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{HealthApi, SearchApi, ShopsApi};
use crate::error::{ApiError, ApiResult};
use beanhop_core::retry::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// BeanHop API client with retry and circuit breaking
///
/// Cloning is cheap; clones share the connection pool and the breaker.
#[derive(Clone)]
pub struct BeanhopClient {
    inner: Client,
    config: Arc<ClientConfig>,
    circuit_breaker: Arc<CircuitBreaker>,
}

impl BeanhopClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        // Fail on construction rather than on first request.
        Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("beanhop-api-client/", env!("CARGO_PKG_VERSION"))),
        );

        if let Some(ref key) = config.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|_| ApiError::config("api key contains invalid header characters"))?;
            default_headers.insert(AUTHORIZATION, value);
        }

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            circuit_breaker: Arc::new(CircuitBreaker::new(CircuitBreakerConfig::default())),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get circuit breaker state
    #[must_use]
    pub fn circuit_state(&self) -> CircuitState {
        self.circuit_breaker.state()
    }

    /// Reset the circuit breaker
    pub fn reset_circuit(&self) {
        self.circuit_breaker.reset();
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access the search endpoint
    #[must_use]
    pub fn search(&self) -> SearchApi {
        SearchApi::new(self.clone())
    }

    /// Access shop listing endpoints
    #[must_use]
    pub fn shops(&self) -> ShopsApi {
        ShopsApi::new(self.clone())
    }

    /// Access the health endpoint
    #[must_use]
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods with resilience
    // -------------------------------------------------------------------------

    /// Build an endpoint URL from path segments and query parameters
    ///
    /// Segments and values are percent-encoded.
    pub fn endpoint(&self, segments: &[&str], params: &[(&str, String)]) -> ApiResult<Url> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.config.base_url)))?;

        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Perform a GET request with retry and circuit breaking
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();

        if !self.circuit_breaker.can_execute() {
            warn!(request_id = %request_id, "Circuit breaker is open, rejecting request");
            return Err(ApiError::CircuitOpen);
        }

        self.execute_with_retry(&request_id, &url).await
    }

    /// GET with elapsed time
    pub async fn timed_get<T: DeserializeOwned>(&self, url: Url) -> ApiResult<(T, Duration)> {
        let start = Instant::now();
        let result = self.get(url).await?;
        Ok((result, start.elapsed()))
    }

    /// Execute request with retry logic
    async fn execute_with_retry<T: DeserializeOwned>(
        &self,
        request_id: &str,
        url: &Url,
    ) -> ApiResult<T> {
        let retry_config = &self.config.retry;
        let mut last_error: Option<ApiError> = None;

        for attempt in 0..retry_config.max_attempts {
            if attempt > 0 {
                let delay = retry_config.delay_for_attempt(attempt);
                debug!(
                    request_id = %request_id,
                    attempt = attempt,
                    delay_ms = delay.as_millis(),
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            let start = Instant::now();
            let result = self.execute_single_request(request_id, url).await;
            let elapsed = start.elapsed();

            match result {
                Ok(value) => {
                    self.circuit_breaker.record_success();
                    debug!(
                        request_id = %request_id,
                        attempt = attempt + 1,
                        elapsed_ms = elapsed.as_millis(),
                        "Request succeeded"
                    );
                    return Ok(value);
                }
                Err(e) => {
                    if e.counts_as_outage() {
                        self.circuit_breaker.record_failure();
                    }

                    if e.is_retryable() && attempt + 1 < retry_config.max_attempts {
                        debug!(
                            request_id = %request_id,
                            attempt = attempt + 1,
                            error = %e,
                            "Request failed, will retry"
                        );
                        last_error = Some(e);
                    } else if attempt > 0 {
                        return Err(ApiError::RetriesExhausted {
                            attempts: attempt + 1,
                            last_error: e.to_string(),
                        });
                    } else {
                        debug!(
                            request_id = %request_id,
                            error = %e,
                            "Request failed, not retrying"
                        );
                        return Err(e);
                    }
                }
            }
        }

        Err(ApiError::RetriesExhausted {
            attempts: retry_config.max_attempts,
            last_error: last_error.map_or_else(|| "Unknown error".to_string(), |e| e.to_string()),
        })
    }

    /// Execute a single request without retry
    async fn execute_single_request<T: DeserializeOwned>(
        &self,
        request_id: &str,
        url: &Url,
    ) -> ApiResult<T> {
        let response = self
            .inner
            .get(url.clone())
            .header(X_REQUEST_ID, request_id)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanhop_core::retry::RetryConfig;

    fn client(base: &str) -> BeanhopClient {
        BeanhopClient::with_config(ClientConfig::default().with_base_url(base)).unwrap()
    }

    #[test]
    fn test_client_creation() {
        assert!(BeanhopClient::with_config(ClientConfig::default()).is_ok());
        assert!(BeanhopClient::with_config(ClientConfig::default().with_base_url("nope")).is_err());
    }

    #[test]
    fn test_endpoint_encodes_query() {
        let url = client("https://api.beanhop.app/api")
            .endpoint(&["search"], &[("q", "cold brew & co".to_string()), ("limit", "20".to_string())])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.beanhop.app/api/search?q=cold+brew+%26+co&limit=20"
        );
    }

    #[test]
    fn test_endpoint_handles_trailing_slash_and_segments() {
        let url = client("http://localhost:8001/api/")
            .endpoint(&["shops", "a b/c"], &[])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8001/api/shops/a%20b%2Fc");
    }

    #[tokio::test]
    async fn test_unreachable_backend_trips_breaker() {
        // Port 9 (discard) is closed on test machines; connection is refused.
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9/api")
            .with_retry(RetryConfig::no_retry())
            .with_timeout(Duration::from_secs(2));
        let client = BeanhopClient::with_config(config).unwrap();

        for _ in 0..5 {
            let url = client.endpoint(&["health"], &[]).unwrap();
            let result: ApiResult<serde_json::Value> = client.get(url).await;
            assert!(result.is_err());
        }

        assert_eq!(client.circuit_state(), CircuitState::Open);
        let url = client.endpoint(&["health"], &[]).unwrap();
        let result: ApiResult<serde_json::Value> = client.get(url).await;
        assert!(matches!(result, Err(ApiError::CircuitOpen)));

        client.reset_circuit();
        assert_eq!(client.circuit_state(), CircuitState::Closed);
    }

    /// Local server answering every connection with `404 Not Found`.
    async fn not_found_server() -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
                    )
                    .await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}/api")
    }

    #[tokio::test]
    async fn test_client_errors_do_not_trip_breaker() {
        let base = not_found_server().await;
        let config = ClientConfig::default()
            .with_base_url(&base)
            .with_retry(RetryConfig::no_retry())
            .with_timeout(Duration::from_secs(2));
        let client = BeanhopClient::with_config(config).unwrap();

        for _ in 0..8 {
            let url = client.endpoint(&["shops", "missing"], &[]).unwrap();
            let result: ApiResult<serde_json::Value> = client.get(url).await;
            assert!(matches!(result, Err(ApiError::ApiResponse { status: 404, .. })));
        }

        assert_eq!(client.circuit_state(), CircuitState::Closed);
    }
}
