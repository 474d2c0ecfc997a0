//! Search session: the explicit home of all search state
//!
//! A session owns the client, the search service, the loaded candidate
//! shops and the keystroke debouncer. Nothing is global; dropping or tearing
//! down the session releases everything.

use crate::client::BeanhopClient;
use crate::config::ClientConfig;
use crate::debounce::Debouncer;
use crate::endpoints::ListShopsParams;
use crate::error::{ApiError, ApiResult};
use crate::service::{SearchService, SourcedResults};
use beanhop_core::config::ConfigSchema;
use beanhop_search::Shop;
use beanhop_telemetry::{metrics, names};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

/// How a session reaches the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Ask the backend first, rank locally on failure
    #[default]
    RemoteFirst,
    /// Never touch the network
    Offline,
}

/// A debounced search that was allowed to run
#[derive(Debug, Clone, PartialEq)]
pub struct SettledSearch {
    /// The query that settled
    pub query: String,
    /// Its results
    pub sourced: SourcedResults,
}

/// Search state for one interactive session
pub struct SearchSession {
    client: Option<BeanhopClient>,
    service: Arc<SearchService>,
    candidates: RwLock<Arc<Vec<Shop>>>,
    list_params: ListShopsParams,
    debouncer: Debouncer<SettledSearch>,
    results: Option<UnboundedReceiver<SettledSearch>>,
}

impl SearchSession {
    /// Build a session from configuration
    ///
    /// In [`SearchMode::RemoteFirst`] the client is configured from the
    /// `[api]` section plus `BEANHOP_*` environment overrides.
    pub fn init(config: &ConfigSchema, mode: SearchMode) -> ApiResult<Self> {
        let client = match mode {
            SearchMode::RemoteFirst => {
                let client_config = ClientConfig::from_settings_and_env(&config.api)?;
                Some(BeanhopClient::with_config(client_config)?)
            }
            SearchMode::Offline => None,
        };

        let service = SearchService::from_config(client.clone(), &config.search);
        let (debouncer, results) = Debouncer::new(Duration::from_millis(config.search.debounce_ms));

        let mut list_params = ListShopsParams::new();
        if config.api.active_only {
            list_params = list_params.active(true);
        }
        if let Some(ref city) = config.api.city {
            list_params = list_params.city(city.clone());
        }

        info!(mode = ?mode, base_url = %config.api.base_url, "Search session started");

        Ok(Self {
            client,
            service: Arc::new(service),
            candidates: RwLock::new(Arc::new(Vec::new())),
            list_params,
            debouncer,
            results: Some(results),
        })
    }

    /// The HTTP client, absent when offline
    pub fn client(&self) -> Option<&BeanhopClient> {
        self.client.as_ref()
    }

    /// Current session mode
    pub fn mode(&self) -> SearchMode {
        if self.client.is_some() {
            SearchMode::RemoteFirst
        } else {
            SearchMode::Offline
        }
    }

    /// Snapshot of the loaded candidates
    pub fn candidates(&self) -> Arc<Vec<Shop>> {
        self.candidates
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the candidates with `shops`
    pub fn set_candidates(&self, shops: Vec<Shop>) {
        metrics().gauge(names::CANDIDATES_LOADED, shops.len() as u64);
        *self.candidates.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(shops);
    }

    /// Reload candidates from the shop listing endpoint
    ///
    /// On failure the previously loaded candidates stay in place.
    pub async fn refresh_shops(&self) -> ApiResult<usize> {
        let client = self.client.as_ref().ok_or(ApiError::Offline)?;

        match client.shops().list(&self.list_params).await {
            Ok(shops) => {
                let count = shops.len();
                self.set_candidates(shops);
                info!(count, "Loaded shop candidates");
                Ok(count)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    kept = self.candidates().len(),
                    "Shop refresh failed, keeping previous candidates"
                );
                Err(e)
            }
        }
    }

    /// Run a search against the loaded candidates
    pub async fn search(&self, query: &str) -> SourcedResults {
        let candidates = self.candidates();
        self.service.search(query, &candidates).await
    }

    /// Schedule a debounced search; results arrive on [`Self::take_results`]
    pub fn search_debounced(&self, query: impl Into<String>) {
        let query = query.into();
        let service = Arc::clone(&self.service);
        let candidates = self.candidates();
        self.debouncer.schedule(async move {
            let sourced = service.search(&query, &candidates).await;
            SettledSearch { query, sourced }
        });
    }

    /// Wait for the pending debounced search, if any
    pub async fn flush(&self) {
        self.debouncer.flush().await;
    }

    /// Take the receiver for debounced results (once)
    pub fn take_results(&mut self) -> Option<UnboundedReceiver<SettledSearch>> {
        self.results.take()
    }

    /// Cancel pending work and drop all candidates
    pub fn teardown(&self) {
        self.debouncer.cancel();
        self.set_candidates(Vec::new());
        info!("Search session torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::SearchSource;

    fn shops() -> Vec<Shop> {
        vec![
            Shop::new("1", "Moonbean Coffee"),
            Shop::new("2", "Chapter Coffee"),
            Shop::new("3", "Opal Coffee"),
        ]
    }

    fn offline() -> SearchSession {
        SearchSession::init(&ConfigSchema::default(), SearchMode::Offline).unwrap()
    }

    #[tokio::test]
    async fn test_offline_search_uses_candidates() {
        let session = offline();
        assert_eq!(session.mode(), SearchMode::Offline);
        assert!(session.search("moon").await.results.shops.is_empty());

        session.set_candidates(shops());
        let sourced = session.search("moon").await;

        assert_eq!(sourced.source, SearchSource::LocalFallback);
        assert_eq!(sourced.results.shops.len(), 1);
        assert_eq!(sourced.results.shops[0].shop.name, "Moonbean Coffee");
    }

    #[tokio::test]
    async fn test_refresh_offline_keeps_candidates() {
        let session = offline();
        session.set_candidates(shops());

        let result = session.refresh_shops().await;

        assert!(matches!(result, Err(ApiError::Offline)));
        assert_eq!(session.candidates().len(), 3);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_candidates() {
        let mut config = ConfigSchema::default();
        config.api.base_url = "http://127.0.0.1:9/api".to_string();
        config.api.timeout_secs = 2;
        let session = SearchSession::init(&config, SearchMode::RemoteFirst).unwrap();
        session.set_candidates(shops());

        assert!(session.refresh_shops().await.is_err());
        assert_eq!(session.candidates().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_search_delivers_last_query() {
        let mut session = offline();
        session.set_candidates(shops());
        let mut rx = session.take_results().unwrap();
        assert!(session.take_results().is_none());

        session.search_debounced("op");
        session.search_debounced("opal");
        session.flush().await;

        let settled = rx.try_recv().unwrap();
        assert_eq!(settled.query, "opal");
        assert_eq!(settled.sourced.results.shops[0].shop.name, "Opal Coffee");
        assert_eq!(settled.sourced.results.shops[0].score, 80);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_clears_state() {
        let mut session = offline();
        let mut rx = session.take_results().unwrap();
        session.set_candidates(shops());
        session.search_debounced("coffee");

        session.teardown();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(session.candidates().is_empty());
        assert!(rx.try_recv().is_err());
    }
}
