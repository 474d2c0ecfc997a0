//! Server-side search endpoint

use crate::client::BeanhopClient;
use crate::error::ApiResult;
use beanhop_search::SearchResults;
use tracing::debug;

/// Search API interface
#[derive(Clone)]
pub struct SearchApi {
    client: BeanhopClient,
}

impl SearchApi {
    pub(crate) fn new(client: BeanhopClient) -> Self {
        Self { client }
    }

    /// Run `GET /search?q=<query>&limit=<limit>`
    ///
    /// The response has the same shape as a local ranking.
    pub async fn query(&self, query: &str, limit: usize) -> ApiResult<SearchResults> {
        let url = self.client.endpoint(
            &["search"],
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )?;
        let results: SearchResults = self.client.get(url).await?;
        debug!(
            shops = results.shops.len(),
            menu_items = results.menu_items.len(),
            "Remote search returned"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_payload_decodes() {
        let json = r#"{
            "shops": [{"id": "s1", "name": "Moonbean Coffee", "city": "Austin", "_score": 80}],
            "menu_items": [{"id": "m1", "shop_id": "s1", "name": "Latte", "price": 4.5, "_score": 100}],
            "suggestions": ["Mocha"]
        }"#;

        let results: SearchResults = serde_json::from_str(json).unwrap();
        assert_eq!(results.shops[0].score, 80);
        assert_eq!(results.shops[0].shop.city.as_deref(), Some("Austin"));
        assert_eq!(results.menu_items[0].item.effective_price(), Some(4.5));
        assert_eq!(results.suggestions, vec!["Mocha"]);
    }
}
