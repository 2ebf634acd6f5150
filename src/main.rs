//! # Slot Checker Entry Point
//!
//! Initializes logging, loads the YAML configuration, wires the booking-site
//! client and the Telegram notifier into the polling checker, and runs it
//! until interrupted.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod models;
mod notify;
mod services;
mod site;
mod utils;

use crate::config::Config;
use crate::notify::TelegramNotifier;
use crate::services::checker::CheckerService;
use crate::services::health;
use crate::site::TeleserviceClient;

/// Passport appointment checker for Paris.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yml")]
    config: PathBuf,

    /// Include debugging logs
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let debug = cli.verbose || std::env::var_os("SLOT_CHECKER_DEBUG").is_some();
    let default_filter = if debug {
        "slot_checker=debug"
    } else {
        "slot_checker=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting slot checker v{}", env!("CARGO_PKG_VERSION"));

    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            error!("There seems to be a problem with your configuration file: {err}");
            return Err(err.into());
        }
    };
    info!(
        "Configuration loaded - window up to {}, refresh every {}s",
        config.to_date.format("%d/%m/%Y"),
        config.refresh
    );

    let source = TeleserviceClient::new(&config)?;
    let notifier = TelegramNotifier::new(&config.telegram);
    let mut checker = CheckerService::new(source, notifier, config);

    let heartbeat = health::spawn_heartbeat(health::HEARTBEAT_INTERVAL);

    let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("interrupt received, stopping after the current tick"),
            Err(err) => error!("cannot listen for shutdown signals, stopping: {err}"),
        }
        let _ = stop_tx.send(true);
    });

    checker.run(stop_rx).await;

    heartbeat.abort();
    info!("Slot checker stopped");
    Ok(())
}
