//! Workload-balanced handler selection.

use thiserror::Error;

use crate::ticket::{Handler, Ticket};

/// Errors that can occur during assignment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    /// Assignment was attempted with no eligible handlers.
    #[error("no handlers available for assignment")]
    EmptyRoster,
}

/// Select the handler with the least accumulated priority-weighted load.
///
/// `active_tickets` is the set of non-terminal tickets that already carry an
/// assignee; `roster` is the caller-supplied, stably ordered list of eligible
/// handlers. Loads start at zero for every roster handler, so handlers with
/// no tickets are always eligible. Ties go to the first handler in roster
/// order reaching the minimum. Tickets assigned to someone outside the
/// roster are ignored.
pub fn least_loaded<'a>(
    active_tickets: &[&Ticket],
    roster: &'a [Handler],
) -> Result<&'a Handler, AssignError> {
    if roster.is_empty() {
        return Err(AssignError::EmptyRoster);
    }

    let mut loads = vec![0u32; roster.len()];
    for ticket in active_tickets {
        let Some(assignee) = ticket.assignee.as_deref() else {
            continue;
        };
        if let Some(idx) = roster.iter().position(|h| h.id == assignee) {
            loads[idx] += ticket.workload_weight();
        }
    }

    // Strict less-than keeps the first minimum in roster order.
    let mut best = 0;
    for (idx, load) in loads.iter().enumerate().skip(1) {
        if *load < loads[best] {
            best = idx;
        }
    }

    Ok(&roster[best])
}
