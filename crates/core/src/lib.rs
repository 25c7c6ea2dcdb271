pub mod assigner;
pub mod classifier;
pub mod config;
pub mod notify;
pub mod seed;
pub mod testing;
pub mod ticket;
pub mod watcher;

pub use assigner::{least_loaded, AssignError};
pub use classifier::{classify_category, classify_priority};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DatabaseConfig,
    NotificationsConfig,
};
pub use notify::{HtmlFileSink, NotificationSink, SinkError};
pub use seed::{seed_store, SeedConfig, SeedReport};
pub use ticket::{
    Category, Handler, NewHandler, NewTicket, Priority, SqliteTicketStore, Ticket, TicketError,
    TicketStatus, TicketStore, TicketUpdate,
};
pub use watcher::{TicketWatcher, WatcherConfig, WatcherError};
