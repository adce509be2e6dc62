//! shelfly — a terminal product catalog browser.

mod action;
mod app;
mod component;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shelfly_core::{JsonFileProvider, SampleProvider};

use crate::action::LayoutMode;
use crate::app::App;

#[derive(Parser, Debug)]
#[command(name = "shelfly", version, about = "Terminal product catalog browser")]
struct Cli {
    /// Path to a product catalog JSON file. Falls back to the built-in
    /// sample catalog when omitted.
    #[arg(long, env = "SHELFLY_CATALOG")]
    catalog: Option<PathBuf>,

    /// Initial layout mode: stacked or scroll.
    #[arg(long)]
    layout: Option<String>,

    /// Log file path. Defaults to /tmp/shelfly.log.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-only logging; stdout belongs to the terminal UI.
fn setup_tracing(path: &PathBuf, verbose: u8) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shelfly_tui={level},shelfly_core={level}")));

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tui::install_hooks()?;

    let config = shelfly_config::load_config_or_default();

    // CLI flags win over the config file.
    let log_file = cli
        .log_file
        .or(config.log_file)
        .unwrap_or_else(|| PathBuf::from("/tmp/shelfly.log"));
    let _log_guard = setup_tracing(&log_file, cli.verbose)?;

    let catalog_path = cli.catalog.or(config.catalog);
    let layout_value = cli.layout.unwrap_or(config.layout);
    let layout = LayoutMode::from_value(&layout_value)
        .ok_or_else(|| eyre!("unknown layout '{layout_value}', expected stacked or scroll"))?;

    info!(catalog = ?catalog_path, ?layout, "starting shelfly");

    let mut app = App::new(layout)?;
    match catalog_path {
        Some(path) => app.run(JsonFileProvider::new(path)).await,
        None => app.run(SampleProvider).await,
    }
}
