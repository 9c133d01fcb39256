//! Profile application handlers.

mod save_profile;

pub use save_profile::{SaveProfileCommand, SaveProfileError, SaveProfileHandler};
