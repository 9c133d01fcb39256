//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, errors, state machine, session tokens, state store)
//! - `profile` - Candidate profile snapshot and validation rules
//! - `upload` - Document upload status lifecycle
//! - `rewards` - Reward tiers, progress, and tier-crossing detection
//! - `notification` - User-facing notification events

pub mod foundation;
pub mod notification;
pub mod profile;
pub mod rewards;
pub mod upload;
