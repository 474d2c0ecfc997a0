//! Shop listing

use crate::context::AppContext;
use anyhow::Result;
use beanhop_api_client::endpoints::ListShopsParams;
use beanhop_api_client::BeanhopClient;
use beanhop_cli::output::{format_count, Status};
use beanhop_cli::progress;
use beanhop_core::Error;

/// List shops from the backend
pub async fn run(ctx: &AppContext, city: Option<String>) -> Result<()> {
    let api = &ctx.schema().api;
    let session = AppContext::session(ctx.schema(), false)?;
    let client: &BeanhopClient = session
        .client()
        .ok_or_else(|| Error::network("no backend client"))?;

    let mut params = ListShopsParams::new();
    if api.active_only {
        params = params.active(true);
    }
    if let Some(city) = city.or_else(|| api.city.clone()) {
        params = params.city(city);
    }

    let spinner = progress::spinner("Fetching shops...");
    let result = client.shops().list(&params).await;
    progress::finish_clear(&spinner);
    let shops = result.map_err(Error::from)?;

    if ctx.is_json() {
        return AppContext::print_json(&shops);
    }

    if shops.is_empty() {
        Status::info("No shops found");
        return Ok(());
    }

    Status::header(&format_count(shops.len(), "shop", "shops"));
    for shop in &shops {
        match shop.city.as_deref() {
            Some(city) => println!("  {}  {} ({city})", shop.id, shop.name),
            None => println!("  {}  {}", shop.id, shop.name),
        }
    }
    Ok(())
}
