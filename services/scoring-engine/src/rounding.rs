//! Score aggregation arithmetic
//!
//! Deterministic integer reductions over the ratings. Means are taken in
//! fixed-point `Decimal` and rounded back to whole levels with an explicit
//! strategy so that no float rounding leaks into the result.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of pillars averaged into the total score
pub const PILLAR_COUNT: u32 = 5;

/// How the mean of the three national-interest sub-impacts is rounded
/// back to a whole impact level.
///
/// The two modes disagree whenever the mean has a fractional part below
/// one half, e.g. (1, 1, 2) → 1.33 gives 1 under `HalfUp` and 2 under
/// `Ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImpactRounding {
    /// Round to nearest, halves away from zero
    #[default]
    HalfUp,
    /// Round toward positive infinity
    Ceiling,
}

impl ImpactRounding {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactRounding::HalfUp => "half-up",
            ImpactRounding::Ceiling => "ceiling",
        }
    }

    fn strategy(&self) -> RoundingStrategy {
        match self {
            ImpactRounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            ImpactRounding::Ceiling => RoundingStrategy::ToPositiveInfinity,
        }
    }
}

impl fmt::Display for ImpactRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImpactRounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half-up" | "half_up" | "round" => Ok(ImpactRounding::HalfUp),
            "ceiling" | "ceil" => Ok(ImpactRounding::Ceiling),
            other => Err(format!(
                "unknown rounding mode '{other}' (expected 'half-up' or 'ceiling')"
            )),
        }
    }
}

/// Reduce the confidentiality/integrity/availability impacts to a single
/// impact level.
///
/// `aggregate = round(mean(c, i, a))` using the given rounding mode.
pub fn aggregate_impact(impacts: [u8; 3], rounding: ImpactRounding) -> u8 {
    let sum: u32 = impacts.iter().map(|i| u32::from(*i)).sum();
    let mean = Decimal::from(sum) / Decimal::from(impacts.len() as u32);
    let rounded = mean.round_dp_with_strategy(0, rounding.strategy());
    // The mean of three u8 values always fits in a u8.
    rounded.to_u8().unwrap_or(u8::MAX)
}

/// Average the pillar score sum over all pillars, rounding up.
///
/// `total = ceil(sum / 5)`
pub fn total_score(pillar_sum: u32) -> u32 {
    let mean = Decimal::from(pillar_sum) / Decimal::from(PILLAR_COUNT);
    mean.ceil().to_u32().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_exact_means() {
        for level in 1..=3 {
            assert_eq!(aggregate_impact([level; 3], ImpactRounding::HalfUp), level);
            assert_eq!(aggregate_impact([level; 3], ImpactRounding::Ceiling), level);
        }
        // (1 + 2 + 3) / 3 = 2
        assert_eq!(aggregate_impact([1, 2, 3], ImpactRounding::HalfUp), 2);
        assert_eq!(aggregate_impact([1, 2, 3], ImpactRounding::Ceiling), 2);
    }

    #[test]
    fn test_aggregate_one_third_fraction() {
        // 4 / 3 = 1.33
        assert_eq!(aggregate_impact([1, 1, 2], ImpactRounding::HalfUp), 1);
        assert_eq!(aggregate_impact([1, 1, 2], ImpactRounding::Ceiling), 2);
        // 7 / 3 = 2.33
        assert_eq!(aggregate_impact([3, 2, 2], ImpactRounding::HalfUp), 2);
        assert_eq!(aggregate_impact([3, 2, 2], ImpactRounding::Ceiling), 3);
    }

    #[test]
    fn test_aggregate_two_thirds_fraction() {
        // 5 / 3 = 1.67, 8 / 3 = 2.67: both modes round up
        assert_eq!(aggregate_impact([1, 2, 2], ImpactRounding::HalfUp), 2);
        assert_eq!(aggregate_impact([1, 2, 2], ImpactRounding::Ceiling), 2);
        assert_eq!(aggregate_impact([3, 3, 2], ImpactRounding::HalfUp), 3);
        assert_eq!(aggregate_impact([3, 3, 2], ImpactRounding::Ceiling), 3);
    }

    #[test]
    fn test_aggregate_order_independent() {
        assert_eq!(
            aggregate_impact([2, 1, 1], ImpactRounding::Ceiling),
            aggregate_impact([1, 1, 2], ImpactRounding::Ceiling)
        );
    }

    #[test]
    fn test_total_score_rounds_up() {
        assert_eq!(total_score(0), 0);
        assert_eq!(total_score(5), 1);
        assert_eq!(total_score(6), 2);
        assert_eq!(total_score(10), 2);
        assert_eq!(total_score(11), 3);
        assert_eq!(total_score(75), 15);
    }

    #[test]
    fn test_rounding_mode_parse() {
        assert_eq!("half-up".parse::<ImpactRounding>().unwrap(), ImpactRounding::HalfUp);
        assert_eq!("CEILING".parse::<ImpactRounding>().unwrap(), ImpactRounding::Ceiling);
        assert!("floor".parse::<ImpactRounding>().is_err());
        assert_eq!(ImpactRounding::default(), ImpactRounding::HalfUp);
    }

    #[test]
    fn test_rounding_mode_serde() {
        let json = serde_json::to_string(&ImpactRounding::Ceiling).unwrap();
        assert_eq!(json, "\"ceiling\"");
        let parsed: ImpactRounding = serde_json::from_str("\"half-up\"").unwrap();
        assert_eq!(parsed, ImpactRounding::HalfUp);
    }
}
