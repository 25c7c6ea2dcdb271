//! Enrichment cycle: classify, prioritize and assign untagged tickets.

use tracing::{debug, info, warn};

use crate::assigner::least_loaded;
use crate::classifier::{classify_category, classify_priority};
use crate::ticket::{Ticket, TicketError, TicketStore, TicketUpdate};

use super::types::{EnrichmentReport, WatcherError};

/// Run one enrichment pass over the store.
///
/// Selects Open tickets with any of category/priority/assignee unset and
/// fills the missing fields, committing each ticket's new fields through a
/// single store call. Tickets are processed in ascending id order so batch
/// outcomes are reproducible, and the workload used for assignment is
/// recomputed from the in-batch state before every decision - a handler
/// assigned earlier in the same batch already carries that ticket's weight.
///
/// Per-ticket failures (empty roster, vanished ticket, write error) are
/// counted and logged without aborting the batch; the caller must arrange
/// exclusive store access for the duration of the call.
pub fn run_enrichment_cycle(store: &dyn TicketStore) -> Result<EnrichmentReport, WatcherError> {
    let handlers = store.list_handlers()?;
    let mut tickets = store.list_tickets()?;
    tickets.sort_by(|a, b| a.id.cmp(&b.id));

    let pending: Vec<usize> = tickets
        .iter()
        .enumerate()
        .filter(|(_, t)| t.needs_enrichment())
        .map(|(idx, _)| idx)
        .collect();

    if pending.is_empty() {
        debug!("no tickets need to be categorized, prioritized or assigned");
        return Ok(EnrichmentReport::default());
    }

    info!(count = pending.len(), "enriching untagged tickets");
    let mut report = EnrichmentReport::default();

    for idx in pending {
        let mut ticket = tickets[idx].clone();
        let mut update = TicketUpdate::new();

        if ticket.category.is_none() {
            let category = classify_category(&ticket.summary, &ticket.description);
            ticket.category = Some(category);
            update.category = Some(category);
        }

        if ticket.priority.is_none() {
            let priority = classify_priority(&ticket.summary, &ticket.description, ticket.category);
            ticket.priority = Some(priority);
            update.priority = Some(priority);
        }

        if ticket.assignee.is_none() {
            let active: Vec<&Ticket> = tickets
                .iter()
                .filter(|t| t.status.is_active() && t.assignee.is_some())
                .collect();

            match least_loaded(&active, &handlers) {
                Ok(handler) => {
                    ticket.assignee = Some(handler.id.clone());
                    update.assignee = Some(handler.id.clone());
                }
                Err(e) => {
                    warn!(ticket_id = %ticket.id, error = %e, "cannot assign ticket");
                    report.failed += 1;
                    continue;
                }
            }
        }

        match store.update_ticket(&ticket.id, update) {
            Ok(updated) => {
                info!(
                    ticket_id = %updated.id,
                    category = ?updated.category,
                    priority = ?updated.priority,
                    assignee = ?updated.assignee,
                    "ticket enriched"
                );
                tickets[idx] = updated;
                report.processed += 1;
            }
            Err(TicketError::NotFound(_)) => {
                warn!(ticket_id = %ticket.id, "ticket disappeared during enrichment");
                report.failed += 1;
            }
            Err(e) => {
                warn!(ticket_id = %ticket.id, error = %e, "failed to write enrichment");
                report.failed += 1;
            }
        }
    }

    info!(
        processed = report.processed,
        failed = report.failed,
        "enrichment cycle complete"
    );
    Ok(report)
}
