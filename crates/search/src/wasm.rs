//! WASM bindings for the local ranker.

use wasm_bindgen::prelude::*;

const EMPTY_RESULTS: &str = r#"{"shops":[],"menu_items":[],"suggestions":[]}"#;

/// Rank shops and return the results as JSON.
///
/// # Arguments
/// * `query` - Raw user input
/// * `shops_json` - JSON array of shops (or `{"shops": [...]}`)
///
/// # Returns
/// `{"shops": [...], "menu_items": [], "suggestions": [...]}`; the empty
/// result when the input cannot be decoded.
#[wasm_bindgen]
pub fn rank_shops_json(query: &str, shops_json: &str) -> String {
    let Ok(shops) = crate::load_shops(shops_json) else {
        return EMPTY_RESULTS.to_string();
    };

    let results = crate::rank_shops(query, &shops);
    serde_json::to_string(&results).unwrap_or_else(|_| EMPTY_RESULTS.to_string())
}

/// Popular terms matching the query, as a JSON array.
#[wasm_bindgen]
pub fn suggestions_json(query: &str) -> String {
    serde_json::to_string(&crate::suggestions(query)).unwrap_or_else(|_| "[]".to_string())
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Normalized similarity in `[0, 1]`.
#[wasm_bindgen]
pub fn name_similarity(a: &str, b: &str) -> f64 {
    crate::similarity(a, b)
}
