//! Tier lookup and progress toward the next rung.

use serde::Serialize;

use super::{RewardTier, TierTable};

impl TierTable {
    /// First tier, in descending order, whose threshold is met.
    ///
    /// Non-decreasing in `points`. Falls back to the default tier.
    pub fn tier_for(&self, points: u64) -> &RewardTier {
        self.tiers()
            .iter()
            .find(|t| t.required_points <= points)
            .unwrap_or_else(|| self.default_tier())
    }

    /// The next rung up, or `None` once the top threshold is met.
    pub fn next_tier(&self, points: u64) -> Option<&RewardTier> {
        self.tiers()
            .iter()
            .rev()
            .find(|t| t.required_points > points)
    }

    /// Fraction of the way from the current tier to the next, in `[0, 1]`.
    pub fn progress(&self, points: u64) -> f64 {
        let Some(next) = self.next_tier(points) else {
            return 1.0;
        };
        let current = self.tier_for(points);
        let span = next.required_points.saturating_sub(current.required_points);
        if span == 0 {
            return 1.0;
        }
        let earned = points.saturating_sub(current.required_points);
        (earned as f64 / span as f64).clamp(0.0, 1.0)
    }

    /// Points still missing for the next tier.
    pub fn points_to_next(&self, points: u64) -> Option<u64> {
        self.next_tier(points)
            .map(|next| next.required_points - points)
    }

    /// Everything the rewards screen shows for one points total.
    pub fn summary(&self, points: u64) -> RewardSummary {
        RewardSummary {
            points,
            current: self.tier_for(points).clone(),
            next: self.next_tier(points).cloned(),
            progress: self.progress(points),
            points_to_next: self.points_to_next(points),
        }
    }
}

/// Snapshot of a points total against the tier table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardSummary {
    pub points: u64,
    pub current: RewardTier,
    pub next: Option<RewardTier>,
    pub progress: f64,
    pub points_to_next: Option<u64>,
}

impl RewardSummary {
    pub fn is_maxed(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rewards::TierId;
    use proptest::prelude::*;

    fn table() -> TierTable {
        TierTable::standard()
    }

    #[test]
    fn zero_points_is_default_tier() {
        assert_eq!(table().tier_for(0).id, TierId::DEFAULT);
    }

    #[test]
    fn thousand_points_is_highest_tier() {
        let t = table();
        assert_eq!(t.tier_for(1000), t.highest());
        assert_eq!(t.tier_for(50_000), t.highest());
    }

    #[test]
    fn thresholds_are_inclusive() {
        let t = table();
        assert_eq!(t.tier_for(99).name, "Member");
        assert_eq!(t.tier_for(100).name, "Bronze");
        assert_eq!(t.tier_for(249).name, "Bronze");
        assert_eq!(t.tier_for(250).name, "Silver");
    }

    #[test]
    fn next_tier_is_the_next_rung_up() {
        let t = table();
        assert_eq!(t.next_tier(0).map(|n| n.name.as_str()), Some("Bronze"));
        assert_eq!(t.next_tier(100).map(|n| n.name.as_str()), Some("Silver"));
        assert_eq!(t.next_tier(999).map(|n| n.name.as_str()), Some("Platinum"));
        assert!(t.next_tier(1000).is_none());
    }

    #[test]
    fn progress_is_fraction_of_current_span() {
        let t = table();
        assert!((t.progress(0) - 0.0).abs() < f64::EPSILON);
        assert!((t.progress(50) - 0.5).abs() < f64::EPSILON);
        // Silver (250) -> Gold (500)
        assert!((t.progress(375) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_is_one_when_maxed() {
        assert!((table().progress(1000) - 1.0).abs() < f64::EPSILON);
        assert!((table().progress(7777) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn points_to_next_counts_missing_points() {
        let t = table();
        assert_eq!(t.points_to_next(90), Some(10));
        assert_eq!(t.points_to_next(260), Some(240));
        assert_eq!(t.points_to_next(1000), None);
    }

    #[test]
    fn summary_collects_all_views() {
        let summary = table().summary(300);
        assert_eq!(summary.current.name, "Silver");
        assert_eq!(summary.next.as_ref().map(|n| n.name.as_str()), Some("Gold"));
        assert_eq!(summary.points_to_next, Some(200));
        assert!(!summary.is_maxed());
        assert!(table().summary(1200).is_maxed());
    }

    proptest! {
        #[test]
        fn tier_for_is_monotonic(a in 0u64..5_000, b in 0u64..5_000) {
            let t = table();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(t.tier_for(lo).id <= t.tier_for(hi).id);
        }

        #[test]
        fn progress_stays_in_unit_interval(points in 0u64..1_000_000) {
            let p = table().progress(points);
            prop_assert!((0.0..=1.0).contains(&p));
        }

        #[test]
        fn next_tier_is_strictly_above_points(points in 0u64..2_000) {
            if let Some(next) = table().next_tier(points) {
                prop_assert!(next.required_points > points);
                prop_assert!(next.id > table().tier_for(points).id);
            }
        }
    }
}
