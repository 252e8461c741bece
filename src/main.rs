use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use voxsync::cli::Cli;
use voxsync::config::Config;
use voxsync::platform::UltravoxClient;
use voxsync::storage::{ClientFilter, SupabaseStore};
use voxsync::sync::BatchRunner;
use voxsync::tools::ToolCatalog;

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voxsync")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("voxsync.log");

    // Setup env_logger with file output, keeping stdout for progress
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first so --help works without credentials
    let cli = Cli::parse();

    setup_logging(cli.is_verbose()).context("Failed to setup logging")?;

    println!("{}", "=".repeat(60));
    println!("Ultravox Agent Sync");
    println!("{}", "=".repeat(60));

    if cli.dry_run {
        println!("\n{}", "🔍 DRY RUN MODE - No changes will be made".cyan());
    }

    let config = Config::from_env().context("Failed to load configuration")?;

    let filter = cli.filter();
    match &filter {
        ClientFilter::All => println!("Syncing ALL agents"),
        other => println!("Filtering by {}", other.describe()),
    }

    let platform = Arc::new(
        UltravoxClient::new(&config.ultravox_api_key, &config.ultravox_base_url)
            .context("Failed to create Ultravox client")?,
    );
    let store = Arc::new(
        SupabaseStore::new(&config.supabase_url, &config.supabase_service_key)
            .context("Failed to create Supabase store")?,
    );

    let runner = BatchRunner::new(platform, store, ToolCatalog::builtin(), cli.dry_run);
    let totals = runner.run(&filter).await.context("Sync run failed")?;

    info!(
        "Run complete: {} updated, {} already in sync, {} would update, {} skipped, {} errors",
        totals.updated, totals.already_synced, totals.would_update, totals.skipped, totals.errors
    );

    if totals.is_failure() {
        std::process::exit(1);
    }

    Ok(())
}
