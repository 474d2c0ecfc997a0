//! Backend health check

use crate::context::AppContext;
use anyhow::Result;
use beanhop_cli::output::{format_duration, Status};
use beanhop_core::Error;
use owo_colors::OwoColorize;

/// Check the backend and report status and latency
pub async fn run(ctx: &AppContext) -> Result<()> {
    let session = AppContext::session(ctx.schema(), false)?;
    let Some(client) = session.client() else {
        return Err(Error::network("no backend client").into());
    };

    let (health, elapsed) = client
        .health()
        .check_timed()
        .await
        .map_err(|e| Error::from(e).with_context(format!("GET {}/health", client.base_url())))?;

    if ctx.is_json() {
        return AppContext::print_json(&serde_json::json!({
            "url": client.base_url(),
            "status": health.status,
            "healthy": health.is_healthy(),
            "timestamp": health.timestamp,
            "elapsed_ms": u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }));
    }

    let timing = format!("({})", format_duration(elapsed));
    if health.is_healthy() {
        Status::success(&format!("{} {} {}", client.base_url(), health.status, timing.dimmed()));
    } else {
        Status::warning(&format!("{} {} {}", client.base_url(), health.status, timing.dimmed()));
    }
    if let Some(timestamp) = health.timestamp {
        println!("  Server time: {}", timestamp.to_rfc3339());
    }
    Ok(())
}
