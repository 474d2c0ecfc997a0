//! Search-as-you-type over stdin
//!
//! Each line is a keystroke-level query. Lines arriving faster than the
//! debounce interval replace each other; only settled queries are printed.

use crate::context::{read_shops, AppContext};
use anyhow::Result;
use beanhop_api_client::{SearchMode, SettledSearch};
use beanhop_cli::output::print_results;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Read queries from stdin until EOF
pub async fn run(ctx: &AppContext, shops: Option<PathBuf>, offline: bool) -> Result<()> {
    let mut session = AppContext::session(ctx.schema(), offline)?;

    if let Some(ref path) = shops {
        session.set_candidates(read_shops(path)?);
    } else if session.mode() == SearchMode::RemoteFirst {
        if let Err(e) = session.refresh_shops().await {
            debug!(error = %e, "No local candidates");
        }
    }

    let Some(mut results) = session.take_results() else {
        return Ok(());
    };
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(query) => session.search_debounced(query),
                    None => break,
                }
            }
            Some(settled) = results.recv() => emit(ctx, &settled),
        }
    }

    // Input ended; let the last query settle.
    session.flush().await;
    while let Ok(settled) = results.try_recv() {
        emit(ctx, &settled);
    }

    session.teardown();
    info!("Watch finished");
    Ok(())
}

fn emit(ctx: &AppContext, settled: &SettledSearch) {
    if ctx.is_json() {
        let line = serde_json::json!({
            "query": settled.query,
            "results": settled.sourced,
        });
        println!("{line}");
    } else {
        print_results(
            &settled.query,
            &settled.sourced.results,
            &settled.sourced.source.to_string(),
        );
    }
}
