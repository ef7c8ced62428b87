use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use workshop_cli::logging::{self, LogOptions};
use workshop_cli::{AppConfig, Shell};
use workshop_core::{Catalog, InMemoryOrderRepository};
use workshop_data::CatalogLoader;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Workshop service order shell.
///
/// Pick maintenance tasks from the catalog, add spare parts, and keep a
/// list of service orders for the current session. Nothing is written to
/// disk.
#[derive(Debug, Parser)]
#[command(name = "workshop", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV catalog to use instead of the built-in one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Log level or EnvFilter directive (RUST_LOG takes precedence).
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Hide log records on the console.
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AppConfig::default(),
    };
    Ok(config.with_overrides(cli.catalog.clone(), cli.log_level.clone(), cli.log_file.clone()))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    logging::init_logging(LogOptions {
        level: config.log_filter(),
        quiet: cli.quiet,
        file: config.log_file.as_deref(),
    })?;
    debug!(?config, "configuration loaded");

    let catalog = match &config.catalog_path {
        Some(path) => CatalogLoader::load_from_file(path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
        None => Catalog::builtin(),
    };
    info!(tasks = catalog.len(), categories = catalog.categories().len(), "catalog ready");

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut shell = Shell::new(&catalog, InMemoryOrderRepository::new())
        .with_unit_price(config.unit_price())
        .with_prompt(interactive);

    shell.run(stdin.lock(), io::stdout().lock())?;

    Ok(())
}
