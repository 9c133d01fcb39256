//! Job Board - Profile, document upload and rewards core for a job board app.
//!
//! The crate holds the non-UI logic behind the profile screen: live
//! validation of profile edits, per-document upload tracking, the save
//! workflow, and reward tier progression. Network collaborators sit behind
//! the traits in [`ports`]; [`adapters`] provides simulated and in-memory
//! implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
