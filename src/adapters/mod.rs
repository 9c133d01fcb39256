//! Adapters - Implementations of port interfaces.
//!
//! - `random` - RandomSource implementations (thread, seeded, scripted)
//! - `simulated` - Simulated upload and profile services
//! - `notification` - Notification sinks (in-memory, tracing)

pub mod notification;
pub mod random;
pub mod simulated;

pub use notification::{InMemoryNotificationSink, TracingNotificationSink};
pub use random::{SeededRandomSource, SequenceRandomSource, ThreadRandomSource};
pub use simulated::{SimulatedProfileService, SimulatedUploadService, SimulationProfile};
