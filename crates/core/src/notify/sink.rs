//! Notification sink trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::ticket::{Handler, Ticket};

/// Error delivering a digest for one handler.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing the digest artifact failed.
    #[error("failed to write digest: {0}")]
    Io(#[from] std::io::Error),

    /// Delivery failed for a backend-specific reason.
    #[error("digest delivery failed: {0}")]
    Delivery(String),
}

/// Destination for per-handler digests of outstanding work.
///
/// The digest cycle hands over already-grouped, already-ordered tickets
/// (descending priority weight); the sink only renders and delivers. An
/// empty slice means the handler currently has no open tickets and should
/// still receive (or have re-published) a digest saying so.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver one handler's digest.
    async fn publish(&self, handler: &Handler, tickets: &[Ticket]) -> Result<(), SinkError>;
}
