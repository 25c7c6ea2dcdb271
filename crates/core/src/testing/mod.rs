//! Testing utilities and mock implementations.
//!
//! Provides a mock notification sink and fixture helpers so the triage
//! cycles can be exercised without touching the filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use triage_core::testing::{fixtures, MockNotificationSink};
//!
//! let sink = MockNotificationSink::new();
//! let handler = fixtures::new_handler("Alice");
//! ```

mod mock_sink;

pub use mock_sink::{MockNotificationSink, PublishedDigest};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::ticket::{Category, NewHandler, NewTicket, Priority, TicketStatus};

    /// Create an untagged Open ticket ready for enrichment.
    pub fn new_open_ticket(summary: &str, description: &str) -> NewTicket {
        NewTicket::open(summary, description)
    }

    /// Create an In Progress ticket with all three triage fields set.
    pub fn new_enriched_ticket(assignee: &str, priority: Priority) -> NewTicket {
        NewTicket {
            summary: format!("{:?} ticket for {}", priority, assignee),
            description: "fixture".to_string(),
            status: TicketStatus::InProgress,
            assignee: Some(assignee.to_string()),
            category: Some(Category::UserSupport),
            priority: Some(priority),
        }
    }

    /// Create a handler with a derived email and a fixed role.
    pub fn new_handler(name: &str) -> NewHandler {
        NewHandler {
            name: name.to_string(),
            email: format!("{}@email.ie", name.to_lowercase()),
            role: "Engineer".to_string(),
        }
    }
}
