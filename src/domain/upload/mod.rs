//! Document upload lifecycle.
//!
//! - `status` - Per-kind upload status state machine
//! - `tracker` - Bookkeeping of one status per upload kind

mod status;
mod tracker;

pub use status::UploadStatus;
pub use tracker::UploadTracker;
