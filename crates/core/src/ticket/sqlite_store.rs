//! SQLite-backed ticket store implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::{
    Category, Handler, NewHandler, NewTicket, Priority, Ticket, TicketError, TicketStatus,
    TicketStore, TicketUpdate,
};

/// SQLite-backed ticket store.
///
/// Ids are generated sequentially with an entity prefix (`TKT-0001`,
/// `USR-0001`); records are never deleted, so the row count is a valid
/// sequence source.
pub struct SqliteTicketStore {
    conn: Mutex<Connection>,
}

impl SqliteTicketStore {
    /// Create a new SQLite ticket store, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, TicketError> {
        let conn = Connection::open(path).map_err(|e| TicketError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite ticket store (useful for testing).
    pub fn in_memory() -> Result<Self, TicketError> {
        let conn =
            Connection::open_in_memory().map_err(|e| TicketError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), TicketError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tickets (
                id TEXT PRIMARY KEY,
                summary TEXT NOT NULL,
                description TEXT NOT NULL,
                status TEXT NOT NULL,
                assignee TEXT,
                category TEXT,
                priority TEXT,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS handlers (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                role TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_tickets_status ON tickets(status);
            CREATE INDEX IF NOT EXISTS idx_tickets_assignee ON tickets(assignee);
            "#,
        )
        .map_err(|e| TicketError::Database(e.to_string()))?;

        Ok(())
    }

    fn next_id(conn: &Connection, table: &str, prefix: &str) -> Result<String, TicketError> {
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .map_err(|e| TicketError::Database(e.to_string()))?;
        Ok(format!("{}-{:04}", prefix, count + 1))
    }

    fn row_to_ticket(row: &rusqlite::Row) -> rusqlite::Result<Ticket> {
        let id: String = row.get(0)?;
        let summary: String = row.get(1)?;
        let description: String = row.get(2)?;
        let status_str: String = row.get(3)?;
        let assignee: Option<String> = row.get(4)?;
        let category_str: Option<String> = row.get(5)?;
        let priority_str: Option<String> = row.get(6)?;
        let created_at_str: String = row.get(7)?;

        // Parse stored forms - defaults shouldn't be reachable with valid data.
        let status = TicketStatus::parse(&status_str).unwrap_or(TicketStatus::Open);
        let category = category_str.as_deref().and_then(Category::parse);
        let priority = priority_str.as_deref().and_then(Priority::parse);
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(Ticket {
            id,
            summary,
            description,
            status,
            assignee,
            category,
            priority,
            created_at,
        })
    }

    fn row_to_handler(row: &rusqlite::Row) -> rusqlite::Result<Handler> {
        Ok(Handler {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            role: row.get(3)?,
        })
    }

    fn get_ticket_locked(conn: &Connection, id: &str) -> Result<Option<Ticket>, TicketError> {
        let result = conn.query_row(
            "SELECT id, summary, description, status, assignee, category, priority, created_at FROM tickets WHERE id = ?",
            params![id],
            Self::row_to_ticket,
        );

        match result {
            Ok(ticket) => Ok(Some(ticket)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(TicketError::Database(e.to_string())),
        }
    }

    /// Enforce the enrichment invariants: terminal tickets are frozen and
    /// category/priority/assignee are set-once (re-submitting the identical
    /// value is allowed so retried cycle writes stay idempotent).
    fn check_update(current: &Ticket, update: &TicketUpdate) -> Result<(), TicketError> {
        if update.touches_enrichment() && current.status.is_terminal() {
            return Err(TicketError::InvalidUpdate {
                ticket_id: current.id.clone(),
                reason: format!("ticket is in terminal status {}", current.status),
            });
        }

        if let (Some(new), Some(existing)) = (update.category, current.category) {
            if new != existing {
                return Err(TicketError::InvalidUpdate {
                    ticket_id: current.id.clone(),
                    reason: format!("category already set to {}", existing),
                });
            }
        }
        if let (Some(new), Some(existing)) = (update.priority, current.priority) {
            if new != existing {
                return Err(TicketError::InvalidUpdate {
                    ticket_id: current.id.clone(),
                    reason: format!("priority already set to {}", existing),
                });
            }
        }
        if let (Some(new), Some(existing)) = (update.assignee.as_deref(), current.assignee.as_deref())
        {
            if new != existing {
                return Err(TicketError::InvalidUpdate {
                    ticket_id: current.id.clone(),
                    reason: format!("assignee already set to {}", existing),
                });
            }
        }

        Ok(())
    }
}

impl TicketStore for SqliteTicketStore {
    fn list_tickets(&self) -> Result<Vec<Ticket>, TicketError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(
                "SELECT id, summary, description, status, assignee, category, priority, created_at FROM tickets ORDER BY id ASC",
            )
            .map_err(|e| TicketError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_ticket)
            .map_err(|e| TicketError::Database(e.to_string()))?;

        let mut tickets = Vec::new();
        for row_result in rows {
            tickets.push(row_result.map_err(|e| TicketError::Database(e.to_string()))?);
        }

        Ok(tickets)
    }

    fn list_handlers(&self) -> Result<Vec<Handler>, TicketError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare("SELECT id, name, email, role FROM handlers ORDER BY id ASC")
            .map_err(|e| TicketError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_handler)
            .map_err(|e| TicketError::Database(e.to_string()))?;

        let mut handlers = Vec::new();
        for row_result in rows {
            handlers.push(row_result.map_err(|e| TicketError::Database(e.to_string()))?);
        }

        Ok(handlers)
    }

    fn get_ticket(&self, id: &str) -> Result<Option<Ticket>, TicketError> {
        let conn = self.conn.lock().unwrap();
        Self::get_ticket_locked(&conn, id)
    }

    fn insert_ticket(&self, ticket: NewTicket) -> Result<Ticket, TicketError> {
        let conn = self.conn.lock().unwrap();

        let id = Self::next_id(&conn, "tickets", "TKT")?;
        let created_at = Utc::now();

        conn.execute(
            "INSERT INTO tickets (id, summary, description, status, assignee, category, priority, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                id,
                ticket.summary,
                ticket.description,
                ticket.status.as_str(),
                ticket.assignee,
                ticket.category.map(|c| c.as_str()),
                ticket.priority.map(|p| p.as_str()),
                created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| TicketError::Database(e.to_string()))?;

        Ok(Ticket {
            id,
            summary: ticket.summary,
            description: ticket.description,
            status: ticket.status,
            assignee: ticket.assignee,
            category: ticket.category,
            priority: ticket.priority,
            created_at,
        })
    }

    fn insert_handler(&self, handler: NewHandler) -> Result<Handler, TicketError> {
        let conn = self.conn.lock().unwrap();

        let id = Self::next_id(&conn, "handlers", "USR")?;

        conn.execute(
            "INSERT INTO handlers (id, name, email, role) VALUES (?, ?, ?, ?)",
            params![id, handler.name, handler.email, handler.role],
        )
        .map_err(|e| TicketError::Database(e.to_string()))?;

        Ok(Handler {
            id,
            name: handler.name,
            email: handler.email,
            role: handler.role,
        })
    }

    fn update_ticket(&self, id: &str, update: TicketUpdate) -> Result<Ticket, TicketError> {
        let conn = self.conn.lock().unwrap();

        let current = Self::get_ticket_locked(&conn, id)?
            .ok_or_else(|| TicketError::NotFound(id.to_string()))?;

        Self::check_update(&current, &update)?;

        let status = update.status.unwrap_or(current.status);
        let assignee = update.assignee.or(current.assignee);
        let category = update.category.or(current.category);
        let priority = update.priority.or(current.priority);

        // All fields land in one statement; a ticket is never left partially
        // updated.
        conn.execute(
            "UPDATE tickets SET status = ?, assignee = ?, category = ?, priority = ? WHERE id = ?",
            params![
                status.as_str(),
                assignee,
                category.map(|c| c.as_str()),
                priority.map(|p| p.as_str()),
                id,
            ],
        )
        .map_err(|e| TicketError::Database(e.to_string()))?;

        Ok(Ticket {
            status,
            assignee,
            category,
            priority,
            ..current
        })
    }
}
