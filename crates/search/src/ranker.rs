//! Local ranking: the offline fallback for remote search.

use crate::relevance::{normalize, score_menu_item, score_shop};
use crate::shop::{MenuItem, ScoredMenuItem, ScoredShop, SearchResults, Shop};
use once_cell::sync::Lazy;

/// Maximum shops returned by [`rank_shops`].
pub const MAX_SHOP_RESULTS: usize = 10;
/// Maximum suggestions returned by [`rank_shops`].
pub const MAX_SUGGESTIONS: usize = 5;
/// Popular search terms offered as suggestions.
pub const POPULAR_TERMS: &[&str] = &[
    "Latte",
    "Espresso",
    "Cold Brew",
    "Matcha",
    "Cappuccino",
    "Americano",
    "Mocha",
    "Croissant",
];

static DEFAULT_RANKER: Lazy<Ranker> = Lazy::new(Ranker::default);

/// Rank `candidates` against `query` with the default limits.
///
/// Pure: the same inputs always give the same output. An empty or
/// whitespace-only query yields empty results without scoring.
///
/// # Example
/// ```
/// use beanhop_search::{rank_shops, Shop};
///
/// let shops = vec![
///     Shop::new("1", "Moonbean Coffee"),
///     Shop::new("2", "Chapter Coffee"),
///     Shop::new("3", "Opal Coffee"),
/// ];
///
/// let results = rank_shops("moon", &shops);
/// assert_eq!(results.shops.len(), 1);
/// assert_eq!(results.shops[0].shop.name, "Moonbean Coffee");
/// assert_eq!(results.shops[0].score, 80);
/// ```
pub fn rank_shops(query: &str, candidates: &[Shop]) -> SearchResults {
    DEFAULT_RANKER.rank(query, candidates)
}

/// Popular terms containing `query`, case-insensitively, capped at 5.
pub fn suggestions(query: &str) -> Vec<String> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }
    suggestions_from(&query, POPULAR_TERMS, MAX_SUGGESTIONS)
}

/// Terms whose lower-cased form contains the normalized `query`, in list
/// order, at most `cap` of them.
pub fn suggestions_from<S: AsRef<str>>(query: &str, terms: &[S], cap: usize) -> Vec<String> {
    terms
        .iter()
        .map(|term| term.as_ref())
        .filter(|term| term.to_lowercase().contains(query))
        .take(cap)
        .map(str::to_string)
        .collect()
}

/// Rank menu items against `query`, best first, at most `limit` of them.
pub fn rank_menu_items(query: &str, items: &[MenuItem], limit: usize) -> Vec<ScoredMenuItem> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredMenuItem> = items
        .iter()
        .filter_map(|item| {
            let score = score_menu_item(item, &query);
            (score > 0).then(|| ScoredMenuItem {
                item: item.clone(),
                score,
            })
        })
        .collect();

    // stable: equal scores keep input order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// Shop ranker with configurable limits and suggestion terms.
///
/// `Ranker::default()` behaves exactly like [`rank_shops`].
#[derive(Debug, Clone)]
pub struct Ranker {
    max_shops: usize,
    max_suggestions: usize,
    terms: Vec<String>,
}

impl Default for Ranker {
    fn default() -> Self {
        Self {
            max_shops: MAX_SHOP_RESULTS,
            max_suggestions: MAX_SUGGESTIONS,
            terms: POPULAR_TERMS.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}

impl Ranker {
    /// Creates a ranker with the default limits and terms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the result caps.
    #[must_use]
    pub fn with_limits(mut self, max_shops: usize, max_suggestions: usize) -> Self {
        self.max_shops = max_shops;
        self.max_suggestions = max_suggestions;
        self
    }

    /// Replaces the suggestion terms.
    #[must_use]
    pub fn with_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Maximum shops returned.
    pub fn max_shops(&self) -> usize {
        self.max_shops
    }

    /// Rank `candidates` against `query`.
    pub fn rank(&self, query: &str, candidates: &[Shop]) -> SearchResults {
        let query = normalize(query);
        if query.is_empty() {
            return SearchResults::default();
        }

        let scores = score_all(&query, candidates);

        let mut shops: Vec<ScoredShop> = candidates
            .iter()
            .zip(scores)
            .filter(|(_, score)| *score > 0)
            .map(|(shop, score)| ScoredShop {
                shop: shop.clone(),
                score,
            })
            .collect();

        // stable: equal scores keep input order
        shops.sort_by(|a, b| b.score.cmp(&a.score));
        shops.truncate(self.max_shops);

        SearchResults {
            shops,
            menu_items: Vec::new(),
            suggestions: suggestions_from(&query, &self.terms, self.max_suggestions),
        }
    }
}

/// Scores in input order.
#[cfg(feature = "parallel")]
fn score_all(query: &str, candidates: &[Shop]) -> Vec<u32> {
    use rayon::prelude::*;
    candidates
        .par_iter()
        .map(|shop| score_shop(shop, query))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all(query: &str, candidates: &[Shop]) -> Vec<u32> {
    candidates.iter().map(|shop| score_shop(shop, query)).collect()
}
