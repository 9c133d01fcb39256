//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.
//!
//! - `UploadService` - Document transfer
//! - `ProfileService` - Profile persistence
//! - `NotificationSink` - User-facing notifications
//! - `RandomSource` - Injectable randomness for simulated outcomes and rewards

mod notification_sink;
mod profile_service;
mod random_source;
mod upload_service;

pub use notification_sink::NotificationSink;
pub use profile_service::{ProfileService, SaveError};
pub use random_source::RandomSource;
pub use upload_service::{UploadError, UploadService};
