//! Shop and menu records plus the result envelope.
//!
//! Records are owned by the caller and only read by the ranker. Fields the
//! ranker does not look at are kept in `extra` so a record passes through a
//! search unchanged.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A coffee shop as served by the shop-listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    /// Shop ID
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,
    /// Display name
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Street address
    #[serde(default)]
    pub address: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
    /// Latitude in degrees
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in degrees
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Average rating
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of ratings
    #[serde(default)]
    pub rating_count: Option<u64>,
    /// Everything else the backend sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Shop {
    /// Creates a shop with only an ID and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            address: None,
            city: None,
            latitude: None,
            longitude: None,
            rating: None,
            rating_count: None,
            extra: Map::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}

/// A menu item as served by the menu endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Item ID
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,
    /// Owning shop
    #[serde(default)]
    pub shop_id: Option<String>,
    /// Display name
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Menu category, e.g. "espresso" or "pastry"
    #[serde(default)]
    pub category: Option<String>,
    /// Current price
    #[serde(default)]
    pub price: Option<f64>,
    /// Price before size or option adjustments
    #[serde(default)]
    pub base_price: Option<f64>,
    /// Everything else the backend sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MenuItem {
    /// Creates a menu item with only an ID and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shop_id: None,
            name: name.into(),
            description: None,
            category: None,
            price: None,
            base_price: None,
            extra: Map::new(),
        }
    }

    /// `price`, falling back to `base_price`.
    pub fn effective_price(&self) -> Option<f64> {
        self.price.or(self.base_price)
    }
}

/// A shop annotated with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredShop {
    /// The matched shop
    #[serde(flatten)]
    pub shop: Shop,
    /// Relevance score (higher is better)
    #[serde(rename = "_score", default)]
    pub score: u32,
}

/// A menu item annotated with its relevance score for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMenuItem {
    /// The matched item
    #[serde(flatten)]
    pub item: MenuItem,
    /// Relevance score (higher is better)
    #[serde(rename = "_score", default)]
    pub score: u32,
}

/// Results of one search, local or remote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching shops, best first
    #[serde(default)]
    pub shops: Vec<ScoredShop>,
    /// Matching menu items, best first
    #[serde(default)]
    pub menu_items: Vec<ScoredMenuItem>,
    /// Popular terms related to the query
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl SearchResults {
    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty() && self.menu_items.is_empty() && self.suggestions.is_empty()
    }
}

/// Decode a candidate list.
///
/// Accepts a bare JSON array or an object wrapping the array under `shops`
/// or `data`.
pub fn load_shops(json: &str) -> Result<Vec<Shop>> {
    load_records(json, "shops")
}

/// Decode a menu item list (bare array, or wrapped under `menu_items` or `data`).
pub fn load_menu_items(json: &str) -> Result<Vec<MenuItem>> {
    load_records(json, "menu_items")
}

fn load_records<T: serde::de::DeserializeOwned>(json: &str, key: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(json)?;
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map
            .remove(key)
            .or_else(|| map.remove("data"))
            .ok_or_else(|| {
                SearchError::InvalidCandidates(format!("expected an array or a `{key}` field"))
            })?,
        other => {
            return Err(SearchError::InvalidCandidates(format!(
                "expected an array, found {other}"
            )));
        }
    };
    Ok(serde_json::from_value(list)?)
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
