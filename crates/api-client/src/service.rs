//! Remote-first search with a local fallback
//!
//! [`SearchService`] asks the backend first. When the backend is unreachable,
//! slow, or answers with an error, the shops already loaded on the client are
//! ranked locally instead, so a search always produces results.

use crate::client::BeanhopClient;
use crate::error::ApiResult;
use beanhop_core::config::SearchConfig;
use beanhop_search::{Ranker, SearchResults, Shop};
use beanhop_telemetry::{metrics, names, Timer};
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{debug, warn};

/// Default `limit` sent to the remote search endpoint
pub const DEFAULT_REMOTE_LIMIT: usize = 20;

/// A backend that can answer search queries
pub trait RemoteSearch: Send + Sync {
    /// Search remotely for at most `limit` shops
    fn search_remote(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = ApiResult<SearchResults>> + Send;
}

impl RemoteSearch for BeanhopClient {
    async fn search_remote(&self, query: &str, limit: usize) -> ApiResult<SearchResults> {
        self.search().query(query, limit).await
    }
}

/// Where a set of results came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchSource {
    /// Answered by the backend
    Remote,
    /// Ranked locally over the loaded candidates
    LocalFallback,
}

impl std::fmt::Display for SearchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::LocalFallback => write!(f, "local"),
        }
    }
}

/// Search results tagged with their source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcedResults {
    /// The results themselves
    #[serde(flatten)]
    pub results: SearchResults,
    /// Which path produced them
    pub source: SearchSource,
}

impl SourcedResults {
    fn local(results: SearchResults) -> Self {
        Self {
            results,
            source: SearchSource::LocalFallback,
        }
    }
}

/// Remote-first search service
pub struct SearchService<R = BeanhopClient> {
    remote: Option<R>,
    ranker: Ranker,
    remote_limit: usize,
}

impl SearchService<BeanhopClient> {
    /// A service that only ranks locally and never touches the network
    #[must_use]
    pub fn local_only() -> Self {
        Self {
            remote: None,
            ranker: Ranker::default(),
            remote_limit: DEFAULT_REMOTE_LIMIT,
        }
    }
}

impl<R: RemoteSearch> SearchService<R> {
    /// Remote-first service with the default ranker
    pub fn new(remote: R) -> Self {
        Self {
            remote: Some(remote),
            ranker: Ranker::default(),
            remote_limit: DEFAULT_REMOTE_LIMIT,
        }
    }

    /// Service with limits and terms from the `[search]` settings
    ///
    /// `remote: None` gives a local-only service.
    pub fn from_config(remote: Option<R>, config: &SearchConfig) -> Self {
        Self {
            remote,
            ranker: Ranker::new()
                .with_limits(config.max_shops, config.max_suggestions)
                .with_terms(config.popular_terms.iter().cloned()),
            remote_limit: config.remote_limit,
        }
    }

    /// Whether searches try the backend first
    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// The local ranker
    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }

    /// Search for `query`, falling back to ranking `candidates` locally
    ///
    /// Never fails: remote errors are logged and replaced by the local ranking.
    pub async fn search(&self, query: &str, candidates: &[Shop]) -> SourcedResults {
        if query.trim().is_empty() {
            return SourcedResults::local(SearchResults::default());
        }

        let timer = Timer::start(names::SEARCH_LATENCY_MS);

        let Some(remote) = &self.remote else {
            metrics().increment(names::SEARCH_LOCAL);
            let results = SourcedResults::local(self.ranker.rank(query, candidates));
            timer.stop();
            return results;
        };

        let sourced = match remote.search_remote(query, self.remote_limit).await {
            Ok(results) => {
                metrics().increment(names::SEARCH_REMOTE);
                debug!(query = %query, shops = results.shops.len(), "Remote search succeeded");
                SourcedResults {
                    results,
                    source: SearchSource::Remote,
                }
            }
            Err(e) => {
                metrics().increment(names::SEARCH_FALLBACK);
                warn!(
                    query = %query,
                    error = %e,
                    candidates = candidates.len(),
                    "Remote search failed, ranking locally"
                );
                SourcedResults::local(self.ranker.rank(query, candidates))
            }
        };

        timer.stop();
        sourced
    }
}
