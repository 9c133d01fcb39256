//! In-memory notification sink.
//!
//! Captures every notification in order, for test assertions and for UIs
//! that poll a notification list.

use std::sync::RwLock;

use crate::domain::notification::{Notification, NotificationCategory};
use crate::ports::NotificationSink;

/// Notification sink that records what it receives.
///
/// # Example
///
/// ```ignore
/// let sink = Arc::new(InMemoryNotificationSink::new());
/// // ... run a workflow with `sink.clone()` ...
/// assert_eq!(sink.count_of(NotificationCategory::Upload), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryNotificationSink {
    received: RwLock<Vec<Notification>>,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notifications received so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Returns notifications of one category.
    pub fn of_category(&self, category: NotificationCategory) -> Vec<Notification> {
        self.notifications()
            .into_iter()
            .filter(|n| n.category == category)
            .collect()
    }

    pub fn count_of(&self, category: NotificationCategory) -> usize {
        self.of_category(category).len()
    }

    pub fn len(&self) -> usize {
        self.received.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears captured notifications (for test isolation).
    pub fn clear(&self) {
        self.received
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl NotificationSink for InMemoryNotificationSink {
    fn notify(&self, notification: Notification) {
        self.received
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}
