//! Application handlers.
//!
//! Command handlers that orchestrate domain operations against the ports.

pub mod profile;
pub mod rewards;
pub mod upload;

pub use profile::{SaveProfileCommand, SaveProfileError, SaveProfileHandler};
pub use rewards::{earn_points, EarnPointsHandler};
pub use upload::{BeginUploadCommand, UploadResolution, UploadStateMachine, UploadTicket};
