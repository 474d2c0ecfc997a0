//! Relevance scoring for shops and menu items.
//!
//! All functions here expect an already normalized (lower-cased, trimmed)
//! query; record fields are normalized on the fly.

use crate::fuzzy::similarity;
use crate::shop::{MenuItem, Shop};

/// Points for a description hit.
pub const DESCRIPTION_BONUS: u32 = 20;
/// Points for an address hit.
pub const ADDRESS_BONUS: u32 = 10;
/// Maximum points from the typo fallback.
pub const TYPO_MAX_POINTS: f64 = 30.0;
/// Similarity the typo fallback must exceed.
pub const TYPO_THRESHOLD: f64 = 0.6;

/// Which name rule matched. Only the highest-priority rule counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NameMatch {
    /// No name rule matched
    None = 0,
    /// Name contains the query
    Substring = 40,
    /// The query starts at a word boundary of the name
    WordStart = 60,
    /// Name starts with the query
    Prefix = 80,
    /// Name equals the query
    Exact = 100,
}

impl NameMatch {
    /// Points awarded for this tier.
    pub fn points(self) -> u32 {
        self as u32
    }
}

/// Lower-case and trim.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Classify how `name` matches `query`.
pub fn name_match(name: &str, query: &str) -> NameMatch {
    let name = normalize(name);

    if name == query {
        return NameMatch::Exact;
    }

    if name.starts_with(query) {
        return NameMatch::Prefix;
    }

    // The query may span several words, so match from each word boundary.
    if name
        .match_indices(char::is_whitespace)
        .any(|(i, ws)| name[i + ws.len()..].starts_with(query))
    {
        return NameMatch::WordStart;
    }

    if name.contains(query) {
        return NameMatch::Substring;
    }

    NameMatch::None
}

/// Points from the typo fallback: `round(similarity * 30)` when the
/// similarity exceeds 0.6, otherwise 0.
pub fn typo_points(name: &str, query: &str) -> u32 {
    let sim = similarity(query, &normalize(name));
    if sim > TYPO_THRESHOLD {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let points = (sim * TYPO_MAX_POINTS).round() as u32;
        points
    } else {
        0
    }
}

fn field_contains(field: Option<&str>, query: &str) -> bool {
    field.is_some_and(|text| normalize(text).contains(query))
}

/// Total score of a shop for a normalized query.
///
/// Name tier (exact 100, prefix 80, word start 60, substring 40), or the
/// typo fallback when no name rule matched, plus 20 for a description hit
/// and 10 for an address hit.
pub fn score_shop(shop: &Shop, query: &str) -> u32 {
    let name_points = match name_match(&shop.name, query) {
        NameMatch::None => typo_points(&shop.name, query),
        tier => tier.points(),
    };

    let mut score = name_points;
    if field_contains(shop.description.as_deref(), query) {
        score += DESCRIPTION_BONUS;
    }
    if field_contains(shop.address.as_deref(), query) {
        score += ADDRESS_BONUS;
    }
    score
}

/// Total score of a menu item for a normalized query.
///
/// Exact name 100, else prefix 80, else substring 50; plus 20 for a
/// description hit and 30 for a category hit. No typo fallback.
pub fn score_menu_item(item: &MenuItem, query: &str) -> u32 {
    let name = normalize(&item.name);

    let mut score = if name == query {
        100
    } else if name.starts_with(query) {
        80
    } else if name.contains(query) {
        50
    } else {
        0
    };

    if field_contains(item.description.as_deref(), query) {
        score += 20;
    }
    if field_contains(item.category.as_deref(), query) {
        score += 30;
    }
    score
}
