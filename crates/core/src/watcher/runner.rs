//! Ticket watcher implementation.
//!
//! Drives triage automatically with two independent background loops:
//! - Enrichment: classify, prioritize and assign new tickets
//! - Digest: publish per-handler workload summaries
//!
//! Both loops serialize their store access through a shared lock, so a
//! digest never observes a half-enriched batch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::notify::NotificationSink;
use crate::ticket::TicketStore;

use super::config::WatcherConfig;
use super::digest::run_digest_cycle;
use super::enrich::run_enrichment_cycle;

/// The ticket watcher - runs the enrichment and digest cycles on timers.
pub struct TicketWatcher {
    config: WatcherConfig,
    store: Arc<dyn TicketStore>,
    sink: Arc<dyn NotificationSink>,

    // Runtime state
    running: Arc<AtomicBool>,
    store_lock: Arc<Mutex<()>>,
    shutdown_tx: broadcast::Sender<()>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl TicketWatcher {
    /// Create a new watcher.
    pub fn new(
        config: WatcherConfig,
        store: Arc<dyn TicketStore>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            config,
            store,
            sink,
            running: Arc::new(AtomicBool::new(false)),
            store_lock: Arc::new(Mutex::new(())),
            shutdown_tx,
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Start the watcher (spawns background tasks).
    pub async fn start(&self) {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("Watcher already running");
            return;
        }

        info!(
            enrich_interval_secs = self.config.enrich_interval_secs,
            digest_interval_secs = self.config.digest_interval_secs,
            "Starting ticket watcher"
        );

        let enrich = self.spawn_enrich_loop();
        let digest = self.spawn_digest_loop();

        let mut tasks = self.tasks.lock().await;
        tasks.push(enrich);
        tasks.push(digest);

        info!("Ticket watcher started");
    }

    /// Stop the watcher, waiting for both loops to finish their current
    /// cycle and exit.
    pub async fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            warn!("Watcher not running");
            return;
        }

        info!("Stopping ticket watcher");

        let _ = self.shutdown_tx.send(());

        let tasks: Vec<JoinHandle<()>> = self.tasks.lock().await.drain(..).collect();
        for task in tasks {
            if let Err(e) = task.await {
                warn!("Watcher task panicked: {}", e);
            }
        }

        info!("Ticket watcher stopped");
    }

    /// Spawn the enrichment loop task.
    fn spawn_enrich_loop(&self) -> JoinHandle<()> {
        let running = Arc::clone(&self.running);
        let store = Arc::clone(&self.store);
        let store_lock = Arc::clone(&self.store_lock);
        let interval = Duration::from_secs(self.config.enrich_interval_secs);
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            info!("Enrichment loop started");
            loop {
                {
                    let _guard = store_lock.lock().await;
                    if let Err(e) = run_enrichment_cycle(store.as_ref()) {
                        warn!("Enrichment cycle error: {}", e);
                    }
                }

                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        info!("Enrichment loop received shutdown signal");
                        break;
                    }
                    _ = tokio::time::sleep(interval) => {
                        if !running.load(Ordering::Relaxed) {
                            break;
                        }
                    }
                }
            }
            info!("Enrichment loop stopped");
        })
    }

    /// Spawn the digest loop task.
    fn spawn_digest_loop(&self) -> JoinHandle<()> {
        let running = Arc::clone(&self.running);
        let store = Arc::clone(&self.store);
        let sink = Arc::clone(&self.sink);
        let store_lock = Arc::clone(&self.store_lock);
        let interval = Duration::from_secs(self.config.digest_interval_secs);
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            info!("Digest loop started");
            loop {
                {
                    let _guard = store_lock.lock().await;
                    if let Err(e) = run_digest_cycle(store.as_ref(), sink.as_ref()).await {
                        warn!("Digest cycle error: {}", e);
                    }
                }

                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        info!("Digest loop received shutdown signal");
                        break;
                    }
                    _ = tokio::time::sleep(interval) => {
                        if !running.load(Ordering::Relaxed) {
                            break;
                        }
                    }
                }
            }
            info!("Digest loop stopped");
        })
    }
}
