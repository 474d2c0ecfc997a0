//! Effective configuration dump

use crate::context::AppContext;
use anyhow::Result;

/// Print the configuration as TOML (or JSON with `--format json`)
pub fn run(ctx: &AppContext) -> Result<()> {
    if ctx.is_json() {
        return AppContext::print_json(ctx.schema());
    }

    match ctx.config.path {
        Some(ref path) => println!("# Loaded from {}", path.display()),
        None => println!("# Built-in defaults"),
    }
    print!("{}", ctx.config.to_toml()?);
    Ok(())
}
