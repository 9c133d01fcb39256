//! Document upload handlers.

mod begin_upload;

pub use begin_upload::{
    BeginUploadCommand, UploadResolution, UploadStateMachine, UploadTicket,
};
