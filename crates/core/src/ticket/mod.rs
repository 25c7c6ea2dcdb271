//! Ticket system: data model and storage.

mod sqlite_store;
mod store;
mod types;

pub use sqlite_store::SqliteTicketStore;
pub use store::{NewHandler, NewTicket, TicketError, TicketStore, TicketUpdate};
pub use types::{
    Category, Handler, Priority, Ticket, TicketStatus, UNTRIAGED_WEIGHT,
};
