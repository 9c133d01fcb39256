//! Notification sink that writes to the tracing subscriber.

use crate::domain::notification::{Notification, NotificationLevel};
use crate::ports::NotificationSink;

/// Logs every notification. Used by the demo binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => tracing::warn!(
                category = ?notification.category,
                title = %notification.title,
                "{}",
                notification.message
            ),
            NotificationLevel::Info => tracing::info!(
                category = ?notification.category,
                title = %notification.title,
                "{}",
                notification.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::UploadKind;

    #[test]
    fn notify_without_subscriber_is_harmless() {
        let sink = TracingNotificationSink;
        sink.notify(Notification::upload_failed(UploadKind::Resume));
        sink.notify(Notification::profile_saved());
    }
}
