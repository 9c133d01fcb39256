//! NotificationSink port - Receives user-facing notifications.

use crate::domain::notification::Notification;

/// Destination for notifications emitted by the core.
///
/// Delivery is fire-and-forget: a sink must not fail the operation that
/// produced the notification.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}
