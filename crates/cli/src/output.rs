//! Terminal output utilities
//!
//! Line formatting is kept separate from printing so it can be tested
//! without a terminal.

use beanhop_search::{ScoredMenuItem, ScoredShop, SearchResults};
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// One result line for a shop: score, name, then city or address
pub fn shop_line(scored: &ScoredShop) -> String {
    let shop = &scored.shop;
    let place = shop.city.as_deref().or(shop.address.as_deref());
    match place {
        Some(place) => format!("{:>4}  {} ({})", scored.score, shop.name, place),
        None => format!("{:>4}  {}", scored.score, shop.name),
    }
}

/// One result line for a menu item: score, name, then price
pub fn menu_line(scored: &ScoredMenuItem) -> String {
    let item = &scored.item;
    match item.effective_price() {
        Some(price) => format!("{:>4}  {} ${price:.2}", scored.score, item.name),
        None => format!("{:>4}  {}", scored.score, item.name),
    }
}

/// Print search results as sections; `source` labels the header
pub fn print_results(query: &str, results: &SearchResults, source: &str) {
    if results.is_empty() {
        Status::info(&format!("No results for \"{query}\""));
        return;
    }

    Status::header(&format!(
        "{} for \"{query}\" ({source})",
        format_count(results.shops.len(), "shop", "shops")
    ));
    for scored in &results.shops {
        println!("{}", shop_line(scored));
    }

    if !results.menu_items.is_empty() {
        Status::header(&format_count(results.menu_items.len(), "menu item", "menu items"));
        for scored in &results.menu_items {
            println!("{}", menu_line(scored));
        }
    }

    if !results.suggestions.is_empty() {
        println!();
        println!("{} {}", "Try:".dimmed(), results.suggestions.join(", "));
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{mins}m {remaining_secs:.0}s")
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanhop_search::{MenuItem, Shop};
    use std::time::Duration;

    #[test]
    fn test_shop_line() {
        let scored = ScoredShop {
            shop: Shop::new("1", "Moonbean Coffee").with_city("Austin"),
            score: 80,
        };
        assert_eq!(shop_line(&scored), "  80  Moonbean Coffee (Austin)");

        let scored = ScoredShop {
            shop: Shop::new("2", "Opal Coffee").with_address("1 Main St"),
            score: 100,
        };
        assert_eq!(shop_line(&scored), " 100  Opal Coffee (1 Main St)");
    }

    #[test]
    fn test_menu_line() {
        let mut item = MenuItem::new("m1", "Oat Latte");
        item.base_price = Some(4.5);
        let scored = ScoredMenuItem { item, score: 50 };
        assert_eq!(menu_line(&scored), "  50  Oat Latte $4.50");
    }

    #[test]
    fn test_format_duration_ms() {
        let d = Duration::from_millis(500);
        assert_eq!(format_duration(d), "500ms");
    }

    #[test]
    fn test_format_duration_secs() {
        let d = Duration::from_secs_f32(5.5);
        assert_eq!(format_duration(d), "5.5s");
    }

    #[test]
    fn test_format_duration_mins() {
        let d = Duration::from_secs(125);
        assert_eq!(format_duration(d), "2m 5s");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "shop", "shops"), "1 shop");
        assert_eq!(format_count(0, "shop", "shops"), "0 shops");
    }
}
