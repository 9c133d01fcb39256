//! Reward handlers.

mod earn_points;

pub use earn_points::{earn_points, EarnPointsHandler};
