//! Ticket storage trait and request types.

use thiserror::Error;

use crate::ticket::{Category, Handler, Priority, Ticket, TicketStatus};

/// Error type for ticket store operations.
#[derive(Debug, Error)]
pub enum TicketError {
    /// Ticket not found.
    #[error("ticket not found: {0}")]
    NotFound(String),

    /// Update rejected because it would violate a ticket invariant.
    #[error("cannot update ticket {ticket_id}: {reason}")]
    InvalidUpdate { ticket_id: String, reason: String },

    /// Database error.
    #[error("database error: {0}")]
    Database(String),
}

/// Request to insert a new ticket.
#[derive(Debug, Clone)]
pub struct NewTicket {
    /// One-line report.
    pub summary: String,
    /// Free-form details.
    pub description: String,
    /// Initial status.
    pub status: TicketStatus,
    /// Pre-assigned handler, if any.
    pub assignee: Option<String>,
    /// Pre-classified category, if any.
    pub category: Option<Category>,
    /// Pre-classified priority, if any.
    pub priority: Option<Priority>,
}

impl NewTicket {
    /// A freshly reported, completely untagged ticket.
    pub fn open(summary: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            status: TicketStatus::Open,
            assignee: None,
            category: None,
            priority: None,
        }
    }
}

/// Request to insert a new handler.
#[derive(Debug, Clone)]
pub struct NewHandler {
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Job role.
    pub role: String,
}

/// Fields to change on an existing ticket.
///
/// All provided fields are applied in a single store call; a ticket is never
/// left partially updated. Enrichment fields (category, priority, assignee)
/// are set-once: the store rejects changing one that is already set to a
/// different value, and rejects touching them on a terminal ticket.
#[derive(Debug, Clone, Default)]
pub struct TicketUpdate {
    /// New status (external actors only; the pipeline never changes status).
    pub status: Option<TicketStatus>,
    /// Handler to assign.
    pub assignee: Option<String>,
    /// Category to set.
    pub category: Option<Category>,
    /// Priority to set.
    pub priority: Option<Priority>,
}

impl TicketUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status.
    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the assignee.
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns true if the update touches an enrichment field.
    pub fn touches_enrichment(&self) -> bool {
        self.assignee.is_some() || self.category.is_some() || self.priority.is_some()
    }
}

/// Trait for ticket storage backends.
///
/// Implementations must return tickets and handlers in stable insertion (id)
/// order — order-sensitive consumers (assignment roster, batch processing)
/// rely on an explicit ordered sequence, never on map iteration order.
///
/// The store is not required to provide its own cross-cycle concurrency
/// control; the watcher serializes whole cycles behind one lock.
pub trait TicketStore: Send + Sync {
    /// Snapshot of all tickets, ordered by id.
    fn list_tickets(&self) -> Result<Vec<Ticket>, TicketError>;

    /// Snapshot of all handlers, ordered by id.
    fn list_handlers(&self) -> Result<Vec<Handler>, TicketError>;

    /// Fetch one ticket by id.
    fn get_ticket(&self, id: &str) -> Result<Option<Ticket>, TicketError>;

    /// Insert a new ticket, generating its id.
    fn insert_ticket(&self, ticket: NewTicket) -> Result<Ticket, TicketError>;

    /// Insert a new handler, generating its id.
    fn insert_handler(&self, handler: NewHandler) -> Result<Handler, TicketError>;

    /// Apply all provided fields to a ticket in one call.
    fn update_ticket(&self, id: &str, update: TicketUpdate) -> Result<Ticket, TicketError>;
}
