//! Ticket watcher for automated triage.
//!
//! The watcher keeps the ticket store tidy with two timed loops:
//! - **Enrichment**: classify, prioritize and assign Open tickets
//! - **Digest**: publish per-handler workload summaries

mod config;
mod digest;
mod enrich;
mod runner;
mod types;

pub use config::WatcherConfig;
pub use digest::run_digest_cycle;
pub use enrich::run_enrichment_cycle;
pub use runner::TicketWatcher;
pub use types::{DigestReport, EnrichmentReport, WatcherError};
