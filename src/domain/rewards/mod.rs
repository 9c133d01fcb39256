//! Reward tier progression.
//!
//! - `tier` - Reward tiers and the validated tier table
//! - `progression` - Tier lookup, next rung, and progress toward it
//! - `state` - Accumulated points and tier-crossing detection

mod progression;
mod state;
mod tier;

pub use progression::RewardSummary;
pub use state::{EarnOutcome, EarnRange, RewardState};
pub use tier::{RewardTier, TierId, TierTable};
