//! Application layer - Handlers, the validation pipeline, and the session facade.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every handler is scoped to a session and never writes state after it closes.

pub mod handlers;
pub mod session;
pub mod validation_pipeline;

pub use handlers::{
    earn_points, BeginUploadCommand, EarnPointsHandler, SaveProfileCommand, SaveProfileError,
    SaveProfileHandler, UploadResolution, UploadStateMachine, UploadTicket,
};
pub use session::{JobBoardSession, SessionServices, SessionSettings};
pub use validation_pipeline::{ValidationPipeline, ValidationPipelineConfig, ValidationResult};
