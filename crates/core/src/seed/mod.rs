//! Demo data seeding.
//!
//! Populates an empty store with a fixed handler roster and a few hundred
//! mock tickets so the triage loops have something to chew on. Open tickets
//! are inserted untagged and picked up by the next enrichment cycle; every
//! other status gets a random assignee, category and priority.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ticket::{
    Category, NewHandler, NewTicket, Priority, TicketError, TicketStatus, TicketStore,
};

/// Demo data configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Approximate number of tickets to generate
    #[serde(default = "default_tickets")]
    pub tickets: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            tickets: default_tickets(),
        }
    }
}

fn default_tickets() -> usize {
    500
}

/// What a seeding run actually inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub handlers: usize,
    pub tickets: usize,
}

const SUMMARIES: &[&str] = &[
    "Unable to access intranet",
    "Outlook not syncing emails",
    "Printer not working on 3rd floor",
    "VPN connection timeout",
    "Password reset required",
    "New employee onboarding setup",
    "System slowness during login",
    "Access request for finance folder",
    "Software update failure",
    "Laptop overheating frequently",
    "Blue screen error on startup",
    "File recovery request",
    "Install antivirus software",
    "Account locked after failed attempts",
    "Cannot connect to shared drive",
    "Request for admin privileges",
    "Two-factor authentication setup",
    "Missing email from inbox",
    "Monitor not detecting input",
    "Mouse and keyboard unresponsive",
];

const DESCRIPTIONS: &[&str] = &[
    "User reports they cannot access the internal bank portal.",
    "Emails are not syncing across desktop and mobile devices.",
    "Printer on 3rd floor throws paper jam error frequently.",
    "VPN disconnects after 5 minutes of use.",
    "User forgot their password and is locked out of their account.",
    "New employee joining on Monday requires system setup.",
    "Multiple users report slow login times in the morning.",
    "Need read-only access to finance folder for audit purposes.",
    "Update failed with error code 0x800f0831 on several machines.",
    "Laptop CPU temperatures exceed 90°C while idle.",
    "User encounters BSOD during startup with error 0x0000007B.",
    "Need help recovering accidentally deleted financial files.",
    "Antivirus software missing on workstation.",
    "User account locked due to multiple failed login attempts.",
    "Shared drive not visible under network locations.",
    "User requests temporary admin access to install software.",
    "Help needed to configure 2FA for remote login.",
    "User cannot locate important client email in inbox.",
    "Monitor screen remains black despite power supply.",
    "Mouse and keyboard are not responding after reboot.",
];

const HANDLER_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Eric", "Fernando", "Vivek", "Paul", "Conor",
];

const ROLES: &[&str] = &["Analyst", "Engineer", "QA Tester"];

// Counts are for a 500-ticket run and get scaled to the configured size.
const STATUS_DISTRIBUTION: &[(TicketStatus, usize)] = &[
    (TicketStatus::Open, 30),
    (TicketStatus::InProgress, 15),
    (TicketStatus::WaitingForUser, 5),
    (TicketStatus::Resolved, 20),
    (TicketStatus::Closed, 430),
];

/// Seed the store with demo handlers and tickets.
///
/// Handlers and tickets are each seeded only if their table is empty, so
/// restarting the daemon never duplicates data.
pub fn seed_store(store: &dyn TicketStore, config: &SeedConfig) -> Result<SeedReport, TicketError> {
    let mut rng = rand::thread_rng();
    let mut report = SeedReport::default();

    if store.list_handlers()?.is_empty() {
        for name in HANDLER_NAMES {
            store.insert_handler(NewHandler {
                name: name.to_string(),
                email: format!("{}@email.ie", name.to_lowercase()),
                role: ROLES.choose(&mut rng).unwrap_or(&ROLES[0]).to_string(),
            })?;
            report.handlers += 1;
        }
        info!(count = report.handlers, "seeded handler roster");
    }

    if store.list_tickets()?.is_empty() {
        let handler_ids: Vec<String> = store
            .list_handlers()?
            .into_iter()
            .map(|h| h.id)
            .collect();

        for &(status, base_count) in STATUS_DISTRIBUTION {
            let count = base_count * config.tickets / 500;
            for _ in 0..count {
                let idx = rng.gen_range(0..SUMMARIES.len());
                let ticket = if status == TicketStatus::Open {
                    // Left untagged for the enrichment loop.
                    NewTicket {
                        summary: SUMMARIES[idx].to_string(),
                        description: DESCRIPTIONS[idx].to_string(),
                        status,
                        assignee: None,
                        category: None,
                        priority: None,
                    }
                } else {
                    NewTicket {
                        summary: SUMMARIES[idx].to_string(),
                        description: DESCRIPTIONS[idx].to_string(),
                        status,
                        assignee: handler_ids.choose(&mut rng).cloned(),
                        category: Category::ALL.choose(&mut rng).copied(),
                        priority: Priority::ALL.choose(&mut rng).copied(),
                    }
                };
                store.insert_ticket(ticket)?;
                report.tickets += 1;
            }
        }
        info!(count = report.tickets, "seeded mock tickets");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::SqliteTicketStore;

    #[test]
    fn test_seed_populates_empty_store() {
        let store = SqliteTicketStore::in_memory().unwrap();
        let config = SeedConfig {
            enabled: true,
            tickets: 500,
        };

        let report = seed_store(&store, &config).unwrap();
        assert_eq!(report.handlers, 9);
        assert_eq!(report.tickets, 500);

        let tickets = store.list_tickets().unwrap();
        let open: Vec<_> = tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Open)
            .collect();
        assert_eq!(open.len(), 30);
        // Open tickets are left for the enrichment loop.
        for ticket in &open {
            assert!(ticket.assignee.is_none());
            assert!(ticket.category.is_none());
            assert!(ticket.priority.is_none());
        }

        // Non-open tickets come fully tagged with real handler ids.
        let handler_ids: Vec<String> = store
            .list_handlers()
            .unwrap()
            .into_iter()
            .map(|h| h.id)
            .collect();
        for ticket in tickets.iter().filter(|t| t.status != TicketStatus::Open) {
            assert!(handler_ids.contains(ticket.assignee.as_ref().unwrap()));
            assert!(ticket.category.is_some());
            assert!(ticket.priority.is_some());
        }
    }

    #[test]
    fn test_seed_scales_distribution() {
        let store = SqliteTicketStore::in_memory().unwrap();
        let config = SeedConfig {
            enabled: true,
            tickets: 100,
        };

        let report = seed_store(&store, &config).unwrap();
        assert_eq!(report.tickets, 100);

        let tickets = store.list_tickets().unwrap();
        let closed = tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Closed)
            .count();
        assert_eq!(closed, 86);
    }

    #[test]
    fn test_seed_truncates_tiny_buckets() {
        let store = SqliteTicketStore::in_memory().unwrap();
        let config = SeedConfig {
            enabled: true,
            tickets: 50,
        };

        // 5/500 of 50 rounds down to zero Waiting for User tickets,
        // leaving 49 in total.
        let report = seed_store(&store, &config).unwrap();
        assert_eq!(report.tickets, 49);
        assert!(!store
            .list_tickets()
            .unwrap()
            .iter()
            .any(|t| t.status == TicketStatus::WaitingForUser));
    }

    #[test]
    fn test_seed_is_idempotent() {
        let store = SqliteTicketStore::in_memory().unwrap();
        let config = SeedConfig {
            enabled: true,
            tickets: 100,
        };

        seed_store(&store, &config).unwrap();
        let second = seed_store(&store, &config).unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(store.list_tickets().unwrap().len(), 100);
        assert_eq!(store.list_handlers().unwrap().len(), 9);
    }
}
