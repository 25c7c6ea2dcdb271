//! Mock notification sink for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::notify::{NotificationSink, SinkError};
use crate::ticket::{Handler, Ticket};

/// A recorded digest delivery for test assertions.
#[derive(Debug, Clone)]
pub struct PublishedDigest {
    pub handler_id: String,
    pub handler_name: String,
    /// Tickets in delivery order.
    pub tickets: Vec<Ticket>,
}

/// Mock implementation of the NotificationSink trait.
///
/// Records every publish for assertions and can be told to fail delivery
/// for specific handlers.
///
/// # Example
///
/// ```rust,ignore
/// use triage_core::testing::MockNotificationSink;
///
/// let sink = MockNotificationSink::new();
/// sink.fail_for("USR-0002").await;
///
/// // ... run the digest cycle ...
///
/// let published = sink.published().await;
/// assert_eq!(published[0].handler_id, "USR-0001");
/// ```
#[derive(Debug, Default)]
pub struct MockNotificationSink {
    published: Arc<RwLock<Vec<PublishedDigest>>>,
    failing_handlers: Arc<RwLock<HashSet<String>>>,
}

impl MockNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded deliveries, in publish order.
    pub async fn published(&self) -> Vec<PublishedDigest> {
        self.published.read().await.clone()
    }

    /// Make publishing fail for the given handler id.
    pub async fn fail_for(&self, handler_id: &str) {
        self.failing_handlers
            .write()
            .await
            .insert(handler_id.to_string());
    }
}

#[async_trait]
impl NotificationSink for MockNotificationSink {
    async fn publish(&self, handler: &Handler, tickets: &[Ticket]) -> Result<(), SinkError> {
        if self.failing_handlers.read().await.contains(&handler.id) {
            return Err(SinkError::Delivery("injected failure".to_string()));
        }

        self.published.write().await.push(PublishedDigest {
            handler_id: handler.id.clone(),
            handler_name: handler.name.clone(),
            tickets: tickets.to_vec(),
        });
        Ok(())
    }
}
