use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triage_core::{
    load_config, seed_store, validate_config, HtmlFileSink, NotificationSink, SqliteTicketStore,
    TicketStore, TicketWatcher,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting triaged v{}", VERSION);

    // Determine config path
    let config_path = std::env::var("TRIAGE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Database path: {:?}", config.database.path);
    info!("Digest output: {:?}", config.notifications.output_dir);

    // Create SQLite ticket store
    let store: Arc<dyn TicketStore> = Arc::new(
        SqliteTicketStore::new(&config.database.path).context("Failed to create ticket store")?,
    );
    info!("Ticket store initialized");

    // Seed demo data if requested (no-op on a populated store)
    if config.seed.enabled {
        let report =
            seed_store(store.as_ref(), &config.seed).context("Failed to seed demo data")?;
        info!(
            handlers = report.handlers,
            tickets = report.tickets,
            "Demo data seeding done"
        );
    }

    // Create the digest sink
    let sink: Arc<dyn NotificationSink> =
        Arc::new(HtmlFileSink::new(&config.notifications.output_dir));

    // Start the watcher unless disabled
    let watcher = if config.watcher.enabled {
        let watcher = Arc::new(TicketWatcher::new(
            config.watcher.clone(),
            Arc::clone(&store),
            Arc::clone(&sink),
        ));
        watcher.start().await;
        Some(watcher)
    } else {
        info!("Watcher disabled by config");
        None
    };

    shutdown_signal().await;

    if let Some(ref watcher) = watcher {
        info!("Stopping watcher...");
        watcher.stop().await;
        info!("Watcher stopped");
    }

    info!("Shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
