//! Accumulated reward points.

use serde::{Deserialize, Serialize};

use super::{RewardTier, TierId, TierTable};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Inclusive range of points one "earn" action can award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnRange {
    min: u64,
    max: u64,
}

impl EarnRange {
    pub fn new(min: u64, max: u64) -> Result<Self, DomainError> {
        if min == 0 || min > max {
            return Err(DomainError::new(
                ErrorCode::InvalidConfiguration,
                format!("Earn range {}..={} is empty or awards nothing", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn contains(&self, amount: u64) -> bool {
        (self.min..=self.max).contains(&amount)
    }
}

impl Default for EarnRange {
    fn default() -> Self {
        Self { min: 10, max: 50 }
    }
}

/// Points total plus the tier held before the latest earn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardState {
    pub points: u64,
    pub previous_tier_id: TierId,
}

impl RewardState {
    /// Seeds a state at `points`, holding whatever tier that total earns.
    pub fn seeded(points: u64, table: &TierTable) -> Self {
        Self {
            points,
            previous_tier_id: table.tier_for(points).id,
        }
    }

    /// Adds `amount` points and reports whether a tier was crossed.
    ///
    /// The crossing is judged against `previous_tier_id` as it stood
    /// before the add; the returned state holds the new tier's id.
    pub fn earn(&self, amount: u64, table: &TierTable) -> EarnOutcome {
        let before = self.previous_tier_id;
        let points = self.points.saturating_add(amount);
        let tier = table.tier_for(points).clone();
        let crossed_tier = tier.id > before;

        EarnOutcome {
            state: RewardState {
                points,
                previous_tier_id: tier.id,
            },
            earned: amount,
            crossed_tier,
            tier,
        }
    }
}

/// Result of one earn action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarnOutcome {
    pub state: RewardState,
    pub earned: u64,
    pub crossed_tier: bool,
    /// Tier held after the earn.
    pub tier: RewardTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_holds_no_points_in_the_default_tier() {
        let state = RewardState::default();

        assert_eq!(state.points, 0);
        assert_eq!(state.previous_tier_id, TierId::DEFAULT);
        assert_eq!(state, RewardState::seeded(0, &TierTable::standard()));
    }

    #[test]
    fn earning_into_first_tier_is_a_crossing() {
        let table = TierTable::standard();
        let state = RewardState {
            points: 90,
            previous_tier_id: TierId(0),
        };

        let outcome = state.earn(15, &table);

        assert_eq!(outcome.state.points, 105);
        assert!(outcome.tier.id > TierId(0));
        assert!(outcome.crossed_tier);
        assert_eq!(outcome.state.previous_tier_id, outcome.tier.id);
    }

    #[test]
    fn earning_within_a_tier_is_not_a_crossing() {
        let table = TierTable::standard();
        let state = RewardState::seeded(110, &table);

        let outcome = state.earn(20, &table);

        assert_eq!(outcome.state.points, 130);
        assert!(!outcome.crossed_tier);
        assert_eq!(outcome.earned, 20);
    }

    #[test]
    fn skipping_several_tiers_is_one_crossing() {
        let table = TierTable::standard();
        let state = RewardState::seeded(0, &table);

        let outcome = state.earn(600, &table);

        assert!(outcome.crossed_tier);
        assert_eq!(outcome.tier.name, "Gold");
    }

    #[test]
    fn seeded_state_holds_current_tier() {
        let state = RewardState::seeded(260, &TierTable::standard());
        assert_eq!(state.previous_tier_id, TierId(2));
    }

    #[test]
    fn earn_range_rejects_zero_and_inverted_bounds() {
        assert!(EarnRange::new(0, 10).is_err());
        assert!(EarnRange::new(20, 10).is_err());
        assert!(EarnRange::new(5, 5).is_ok());
    }

    #[test]
    fn default_earn_range_is_ten_to_fifty() {
        let range = EarnRange::default();
        assert!(range.contains(10));
        assert!(range.contains(50));
        assert!(!range.contains(51));
    }
}
