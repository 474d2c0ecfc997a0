//! BeanHop search CLI
//!
//! Searches coffee shops through the backend, falling back to local ranking
//! when the backend is unavailable or `--offline` is given.

use beanhop_core::config::Config;
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;

use commands::{config, health, search, shops, watch};
use context::AppContext;

/// Coffee shop search for BeanHop
#[derive(Parser)]
#[command(name = "beanhop-search")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file (defaults to beanhop.toml in the usual places)
    #[arg(short, long, global = true, env = "BEANHOP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON on stdout
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Search shops, remote first with a local fallback
    Search {
        /// Search text
        query: String,

        /// JSON file of shops to rank locally
        #[arg(short, long)]
        shops: Option<PathBuf>,

        /// JSON file of menu items to rank alongside local results
        #[arg(short, long)]
        menu: Option<PathBuf>,

        /// Never contact the backend
        #[arg(long)]
        offline: bool,

        /// Maximum shops to return
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List shops from the backend
    Shops {
        /// Only shops in this city
        #[arg(long)]
        city: Option<String>,
    },

    /// Check backend health
    Health,

    /// Search as you type: one query per stdin line, debounced
    Watch {
        /// JSON file of shops to rank locally
        #[arg(short, long)]
        shops: Option<PathBuf>,

        /// Never contact the backend
        #[arg(long)]
        offline: bool,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return exit_code(e.exit_code());
        }
    };

    init_logging(&config, cli.verbose);

    let ctx = AppContext::new(config, cli.format, cli.verbose);

    let result = match cli.command {
        Commands::Search {
            query,
            shops,
            menu,
            offline,
            limit,
        } => {
            let args = search::SearchArgs {
                query,
                shops,
                menu,
                offline,
                limit,
            };
            search::run(&ctx, args).await
        }
        Commands::Shops { city } => shops::run(&ctx, city).await,
        Commands::Health => health::run(&ctx).await,
        Commands::Watch { shops, offline } => watch::run(&ctx, shops, offline).await,
        Commands::Config => config::run(&ctx),
    };

    if ctx.verbose && ctx.format == OutputFormat::Json {
        ctx.print_metrics();
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            let code = e
                .downcast_ref::<beanhop_core::Error>()
                .map_or(beanhop_core::error::exit_codes::FAILURE, beanhop_core::Error::exit_code);
            exit_code(code)
        }
    }
}

fn init_logging(config: &Config, verbose: bool) {
    let logging = &config.schema.logging;
    let level = if verbose {
        "beanhop_search=debug,beanhop_api_client=debug,beanhop_core=debug".to_string()
    } else {
        logging.level.clone()
    };

    let telemetry = beanhop_telemetry::TelemetryConfig::with_level(level).json(logging.json);
    if let Err(e) = beanhop_telemetry::init_with_config(&telemetry) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
