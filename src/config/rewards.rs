//! Reward configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::rewards::EarnRange;

/// Bounds for a single points award
#[derive(Debug, Clone, Deserialize)]
pub struct RewardsConfig {
    #[serde(default = "default_min_earn")]
    pub min_earn: u64,

    #[serde(default = "default_max_earn")]
    pub max_earn: u64,

    /// Points the demo session starts with
    #[serde(default)]
    pub seed_points: u64,
}

impl RewardsConfig {
    pub fn earn_range(&self) -> Result<EarnRange, ValidationError> {
        self.validate()?;
        EarnRange::new(self.min_earn, self.max_earn).map_err(|_| ValidationError::InvalidEarnRange)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_earn == 0 {
            return Err(ValidationError::ZeroMinEarn);
        }
        if self.min_earn > self.max_earn {
            return Err(ValidationError::InvalidEarnRange);
        }
        Ok(())
    }
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            min_earn: default_min_earn(),
            max_earn: default_max_earn(),
            seed_points: 0,
        }
    }
}

fn default_min_earn() -> u64 {
    10
}

fn default_max_earn() -> u64 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_ten_to_fifty() {
        let range = RewardsConfig::default().earn_range().unwrap();
        assert_eq!((range.min(), range.max()), (10, 50));
    }

    #[test]
    fn zero_minimum_is_rejected() {
        let config = RewardsConfig {
            min_earn: 0,
            ..RewardsConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::ZeroMinEarn));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = RewardsConfig {
            min_earn: 60,
            max_earn: 50,
            seed_points: 0,
        };
        assert_eq!(config.earn_range(), Err(ValidationError::InvalidEarnRange));
    }

    #[test]
    fn single_value_range_is_allowed() {
        let config = RewardsConfig {
            min_earn: 25,
            max_earn: 25,
            seed_points: 0,
        };
        assert!(config.earn_range().is_ok());
    }
}
