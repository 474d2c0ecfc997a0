//! Local shop search for BeanHop.
//!
//! This crate is the offline fallback used when the remote `/search`
//! endpoint is unavailable:
//! - Tiered name matching (exact, prefix, word start, substring)
//! - Description and address bonuses
//! - Levenshtein typo tolerance
//! - Popular-term suggestions
//!
//! Everything here is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use beanhop_search::{rank_shops, Shop};
//!
//! let shops = vec![
//!     Shop::new("1", "Moonbean Coffee"),
//!     Shop::new("2", "Chapter Coffee"),
//! ];
//!
//! let results = rank_shops("coffee", &shops);
//! assert_eq!(results.shops.len(), 2);
//! assert_eq!(results.shops[0].shop.name, "Moonbean Coffee");
//! ```

mod error;
mod fuzzy;
mod ranker;
mod relevance;
mod shop;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, SearchError};
pub use fuzzy::{levenshtein_distance, similarity};
pub use ranker::{
    rank_menu_items, rank_shops, suggestions, suggestions_from, Ranker, MAX_SHOP_RESULTS,
    MAX_SUGGESTIONS, POPULAR_TERMS,
};
pub use relevance::{name_match, normalize, score_menu_item, score_shop, typo_points, NameMatch};
pub use shop::{
    load_menu_items, load_shops, MenuItem, ScoredMenuItem, ScoredShop, SearchResults, Shop,
};
