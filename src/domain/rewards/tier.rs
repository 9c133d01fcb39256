//! Reward tier definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Ordinal of a tier. Higher thresholds carry higher ordinals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierId(pub u32);

impl TierId {
    /// Ordinal of the sentinel tier every table ends with.
    pub const DEFAULT: TierId = TierId(0);
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named rung unlocked once accumulated points reach its threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardTier {
    pub id: TierId,
    pub name: String,
    pub required_points: u64,
    pub benefits: Vec<String>,
}

impl RewardTier {
    pub fn new(id: u32, name: impl Into<String>, required_points: u64, benefits: &[&str]) -> Self {
        Self {
            id: TierId(id),
            name: name.into(),
            required_points,
            benefits: benefits.iter().map(|b| b.to_string()).collect(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.required_points == 0
    }
}

/// Tier table ordered by descending threshold, ending in a zero-point
/// default tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierTable {
    tiers: Vec<RewardTier>,
}

impl TierTable {
    /// Builds a table, checking its ordering invariants.
    ///
    /// Tiers may be given in any order; they are sorted by descending
    /// threshold. Thresholds must be distinct, ordinals must rise with
    /// threshold, and the lowest tier must be a zero-point sentinel.
    pub fn new(mut tiers: Vec<RewardTier>) -> Result<Self, DomainError> {
        tiers.sort_by(|a, b| b.required_points.cmp(&a.required_points));

        let Some(sentinel) = tiers.last() else {
            return Err(DomainError::new(
                ErrorCode::InvalidTierTable,
                "Tier table cannot be empty",
            ));
        };
        if sentinel.required_points != 0 {
            return Err(DomainError::new(
                ErrorCode::InvalidTierTable,
                "Tier table must end with a zero-point default tier",
            )
            .with_detail("tier", sentinel.name.clone()));
        }

        for pair in tiers.windows(2) {
            let (higher, lower) = (&pair[0], &pair[1]);
            if higher.required_points == lower.required_points {
                return Err(DomainError::new(
                    ErrorCode::InvalidTierTable,
                    format!("Duplicate threshold {}", higher.required_points),
                )
                .with_detail("tier", higher.name.clone()));
            }
            if higher.id <= lower.id {
                return Err(DomainError::new(
                    ErrorCode::InvalidTierTable,
                    format!(
                        "Tier '{}' must have a higher ordinal than '{}'",
                        higher.name, lower.name
                    ),
                )
                .with_detail("tier", higher.name.clone()));
            }
        }

        Ok(Self { tiers })
    }

    /// The job board's tier ladder.
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                RewardTier::new(
                    4,
                    "Platinum",
                    1000,
                    &[
                        "Featured profile placement",
                        "Direct recruiter messaging",
                        "Priority application review",
                        "Early access to new listings",
                    ],
                ),
                RewardTier::new(
                    3,
                    "Gold",
                    500,
                    &[
                        "Direct recruiter messaging",
                        "Priority application review",
                        "Early access to new listings",
                    ],
                ),
                RewardTier::new(
                    2,
                    "Silver",
                    250,
                    &["Priority application review", "Early access to new listings"],
                ),
                RewardTier::new(1, "Bronze", 100, &["Early access to new listings"]),
                RewardTier::new(0, "Member", 0, &[]),
            ],
        }
    }

    /// Tiers in descending-threshold order.
    pub fn tiers(&self) -> &[RewardTier] {
        &self.tiers
    }

    pub fn highest(&self) -> &RewardTier {
        &self.tiers[0]
    }

    pub fn default_tier(&self) -> &RewardTier {
        &self.tiers[self.tiers.len() - 1]
    }

    pub fn get(&self, id: TierId) -> Option<&RewardTier> {
        self.tiers.iter().find(|t| t.id == id)
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}
