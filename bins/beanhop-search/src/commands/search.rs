//! One-shot search

use crate::context::{read_menu, read_shops, AppContext};
use anyhow::Result;
use beanhop_api_client::{SearchMode, SearchSource};
use beanhop_cli::output::{format_duration, print_results};
use beanhop_cli::progress;
use beanhop_search::rank_menu_items;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

/// Arguments of `beanhop-search search`
pub struct SearchArgs {
    pub query: String,
    pub shops: Option<PathBuf>,
    pub menu: Option<PathBuf>,
    pub offline: bool,
    pub limit: Option<usize>,
}

/// Run one search and print the results
pub async fn run(ctx: &AppContext, args: SearchArgs) -> Result<()> {
    let mut schema = ctx.schema().clone();
    if let Some(limit) = args.limit {
        schema.search.max_shops = limit;
        schema.search.remote_limit = limit;
    }
    let menu_limit = schema.search.remote_limit;

    let session = AppContext::session(&schema, args.offline)?;

    if let Some(ref path) = args.shops {
        session.set_candidates(read_shops(path)?);
    } else if session.mode() == SearchMode::RemoteFirst {
        let spinner = progress::spinner("Loading shops...");
        // A failed refresh only means the fallback has nothing to rank.
        if let Err(e) = session.refresh_shops().await {
            debug!(error = %e, "No local candidates");
        }
        progress::finish_clear(&spinner);
    }

    let start = Instant::now();
    let mut sourced = session.search(&args.query).await;
    let elapsed = start.elapsed();

    if let Some(ref path) = args.menu {
        if sourced.source == SearchSource::LocalFallback {
            let items = read_menu(path)?;
            sourced.results.menu_items = rank_menu_items(&args.query, &items, menu_limit);
        }
    }

    if ctx.is_json() {
        AppContext::print_json(&sourced)?;
    } else {
        print_results(&args.query, &sourced.results, &sourced.source.to_string());
        if ctx.verbose {
            println!();
            println!("Searched in {}", format_duration(elapsed));
        }
    }

    session.teardown();
    Ok(())
}
