//! Types for the ticket watcher.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ticket::TicketError;

/// Errors that abort a whole cycle.
///
/// Per-item failures never surface here; they are logged and counted in the
/// cycle report instead.
#[derive(Debug, Error)]
pub enum WatcherError {
    /// Reading the store snapshot failed.
    #[error("ticket store error: {0}")]
    Store(#[from] TicketError),
}

/// Summary of one enrichment cycle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichmentReport {
    /// Tickets fully enriched and written back.
    pub processed: usize,
    /// Tickets skipped after a per-ticket failure; retried on a later tick.
    pub failed: usize,
}

/// Summary of one digest cycle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DigestReport {
    /// Digests delivered, including empty "no open tickets" ones.
    pub published: usize,
    /// Handlers whose digest delivery failed.
    pub failed: usize,
}
