//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types, the state machine trait, and the
//! session liveness and observable-state plumbing used by every workflow.

mod errors;
mod ids;
mod session_token;
mod state_machine;
mod state_store;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::SessionId;
pub use session_token::{SessionGuard, SessionToken};
pub use state_machine::StateMachine;
pub use state_store::StateStore;
pub use timestamp::Timestamp;
