//! NotificationSink adapters.

mod in_memory;
mod tracing_sink;

pub use in_memory::InMemoryNotificationSink;
pub use tracing_sink::TracingNotificationSink;
