//! Shop listing endpoints

use crate::client::BeanhopClient;
use crate::error::ApiResult;
use beanhop_search::Shop;
use serde::Deserialize;

/// Shops API interface
#[derive(Clone)]
pub struct ShopsApi {
    client: BeanhopClient,
}

/// Filters for `GET /shops`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListShopsParams {
    /// Only shops in this city
    pub city: Option<String>,
    /// Only active (or only inactive) shops
    pub is_active: Option<bool>,
}

impl ListShopsParams {
    /// No filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by city
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Filter by active flag
    #[must_use]
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(ref city) = self.city {
            params.push(("city", city.clone()));
        }
        if let Some(active) = self.is_active {
            params.push(("is_active", active.to_string()));
        }
        params
    }
}

/// The listing endpoint returns either a bare array or `{"data": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ShopList {
    Bare(Vec<Shop>),
    Wrapped { data: Vec<Shop> },
}

impl From<ShopList> for Vec<Shop> {
    fn from(list: ShopList) -> Self {
        match list {
            ShopList::Bare(shops) | ShopList::Wrapped { data: shops } => shops,
        }
    }
}

impl ShopsApi {
    pub(crate) fn new(client: BeanhopClient) -> Self {
        Self { client }
    }

    /// List shops matching the filters
    pub async fn list(&self, params: &ListShopsParams) -> ApiResult<Vec<Shop>> {
        let url = self.client.endpoint(&["shops"], &params.to_query())?;
        let list: ShopList = self.client.get(url).await?;
        Ok(list.into())
    }

    /// Fetch one shop by ID
    pub async fn get(&self, id: &str) -> ApiResult<Shop> {
        let url = self.client.endpoint(&["shops", id], &[])?;
        self.client.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_to_query() {
        assert!(ListShopsParams::new().to_query().is_empty());

        let params = ListShopsParams::new().city("Austin").active(true);
        assert_eq!(
            params.to_query(),
            vec![("city", "Austin".to_string()), ("is_active", "true".to_string())]
        );
    }

    #[test]
    fn test_shop_list_shapes() {
        let bare: ShopList = serde_json::from_str(r#"[{"id": "1", "name": "Moonbean"}]"#).unwrap();
        let wrapped: ShopList =
            serde_json::from_str(r#"{"data": [{"id": "1", "name": "Moonbean"}]}"#).unwrap();

        let bare: Vec<Shop> = bare.into();
        let wrapped: Vec<Shop> = wrapped.into();
        assert_eq!(bare, wrapped);
        assert_eq!(bare[0].name, "Moonbean");
    }
}
