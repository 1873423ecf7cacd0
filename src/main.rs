use calltools::config::Config;
use calltools::tools::{ParameterBinding, ToolCatalog, ToolExecutor};
use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::{LevelFilter, info, warn};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use cli::console::ConsoleSink;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("calltools")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("calltools.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // The logger admits everything unless RUST_LOG narrows it; the global max level gates the rest
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .parse_env(env_logger::Env::default())
        .target(env_logger::Target::Pipe(target))
        .init();

    if std::env::var_os("RUST_LOG").is_none() {
        log::set_max_level(LevelFilter::Info);
    }

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn parse_log_level(level: Option<&str>) -> Option<LevelFilter> {
    level.and_then(|l| l.parse().ok())
}

/// Apply the configured level; RUST_LOG wins when set
fn apply_log_level(config: &Config) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    match parse_log_level(config.log_level.as_deref()) {
        Some(level) => log::set_max_level(level),
        None => {
            if let Some(level) = &config.log_level {
                warn!("Ignoring unknown log_level {:?}", level);
            }
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let loaded = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    for (path, reason) in &loaded.skipped {
        warn!("Failed to load config from {}: {}", path.display(), reason);
        eprintln!("{} skipping {}: {}", "Warning:".yellow(), path.display(), reason);
    }
    match &loaded.source {
        Some(path) => info!("Loaded config from: {}", path.display()),
        None => info!("No usable config file found, using defaults"),
    }

    Ok(loaded.config)
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Catalog { all, schema } => handle_catalog_command(*all, *schema),
        Commands::Exec { tool, params, json } => {
            handle_exec_command(tool, params, json.as_deref(), cli.is_verbose(), config).await
        }
        Commands::Geocode { city } => handle_geocode_command(city, config).await,
    }
}

fn handle_catalog_command(all: bool, schema: bool) -> Result<()> {
    let catalog = if all { ToolCatalog::all() } else { ToolCatalog::published() };
    info!("Printing catalog with {} tool(s)", catalog.len());

    let rendered = if schema {
        serde_json::to_string_pretty(&catalog.definitions()).context("Failed to render definitions")?
    } else {
        catalog.to_json().context("Failed to render catalog")?
    };
    println!("{}", rendered);
    Ok(())
}

fn collect_bindings(params: &[String], json: Option<&str>) -> Result<Vec<ParameterBinding>> {
    let mut bindings = Vec::with_capacity(params.len());
    for pair in params {
        let binding =
            ParameterBinding::parse(pair).ok_or_else(|| eyre!("Invalid parameter '{}', expected NAME=VALUE", pair))?;
        bindings.push(binding);
    }
    if let Some(json) = json {
        let parsed: Vec<ParameterBinding> = serde_json::from_str(json).context("Failed to parse --json bindings")?;
        bindings.extend(parsed);
    }
    Ok(bindings)
}

async fn handle_exec_command(
    tool: &str,
    params: &[String],
    json: Option<&str>,
    verbose: bool,
    config: &Config,
) -> Result<()> {
    info!("Executing tool: {}", tool);
    let bindings = collect_bindings(params, json)?;

    let executor = ToolExecutor::new(config)
        .context("Failed to create executor")?
        .with_sink(Arc::new(ConsoleSink { verbose }));

    executor
        .execute(tool, &bindings)
        .await
        .with_context(|| format!("Tool {} failed", tool))?;
    Ok(())
}

async fn handle_geocode_command(city: &str, config: &Config) -> Result<()> {
    info!("Geocoding: {}", city);
    let executor = ToolExecutor::new(config).context("Failed to create executor")?;

    match executor.city_to_lat_lon(city).await {
        Some(coordinates) => println!("{}, {}", coordinates.latitude, coordinates.longitude),
        None => println!("{} {}", "No location data for:".yellow(), city),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(&cli)?;
    apply_log_level(&config);

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
