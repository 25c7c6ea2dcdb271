//! Digest cycle: per-handler summaries of active, fully enriched tickets.

use tracing::{debug, info, warn};

use crate::notify::NotificationSink;
use crate::ticket::{Ticket, TicketStore};

use super::types::{DigestReport, WatcherError};

/// Run one digest pass: publish a workload summary to every handler on
/// the roster, including handlers with nothing assigned (an empty digest
/// still overwrites yesterday's stale one).
///
/// Only active tickets with category, priority and assignee all set are
/// eligible; a handler's tickets are ordered by descending priority weight,
/// ties keeping store order. A sink failure for one handler is counted and
/// logged, the remaining handlers still get theirs.
pub async fn run_digest_cycle(
    store: &dyn TicketStore,
    sink: &dyn NotificationSink,
) -> Result<DigestReport, WatcherError> {
    let handlers = store.list_handlers()?;
    let tickets = store.list_tickets()?;

    let eligible: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| t.status.is_active() && t.is_fully_enriched())
        .collect();

    debug!(
        handlers = handlers.len(),
        eligible = eligible.len(),
        "building digests"
    );

    let mut report = DigestReport::default();

    for handler in &handlers {
        let mut assigned: Vec<Ticket> = eligible
            .iter()
            .filter(|t| t.assignee.as_deref() == Some(handler.id.as_str()))
            .map(|t| (*t).clone())
            .collect();
        assigned.sort_by(|a, b| b.workload_weight().cmp(&a.workload_weight()));

        match sink.publish(handler, &assigned).await {
            Ok(()) => {
                report.published += 1;
            }
            Err(e) => {
                warn!(handler_id = %handler.id, error = %e, "failed to publish digest");
                report.failed += 1;
            }
        }
    }

    info!(
        published = report.published,
        failed = report.failed,
        "digest cycle complete"
    );
    Ok(report)
}
