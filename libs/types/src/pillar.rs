//! Likelihood/impact ratings
//!
//! A pillar is one independently assessed risk dimension. Each pillar is
//! rated on two ordinal scales: likelihood (1 = rare, 5 = near-certain)
//! and impact (1 = low, 3 = high).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest likelihood level
pub const LIKELIHOOD_MIN: u8 = 1;
/// Highest likelihood level
pub const LIKELIHOOD_MAX: u8 = 5;
/// Lowest impact level
pub const IMPACT_MIN: u8 = 1;
/// Highest impact level
pub const IMPACT_MAX: u8 = 3;

/// One risk dimension's user-supplied rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PillarScore {
    pub likelihood: u8,
    pub impact: u8,
}

impl PillarScore {
    /// Create a new rating. Bounds are not checked here; see the
    /// scoring engine's validator.
    pub fn new(likelihood: u8, impact: u8) -> Self {
        Self { likelihood, impact }
    }

    /// Lowest possible rating (1, 1)
    pub fn minimum() -> Self {
        Self::new(LIKELIHOOD_MIN, IMPACT_MIN)
    }

    /// `likelihood × impact`
    pub fn risk_score(&self) -> u32 {
        u32::from(self.likelihood) * u32::from(self.impact)
    }

    pub fn likelihood_in_range(&self) -> bool {
        (LIKELIHOOD_MIN..=LIKELIHOOD_MAX).contains(&self.likelihood)
    }

    pub fn impact_in_range(&self) -> bool {
        (IMPACT_MIN..=IMPACT_MAX).contains(&self.impact)
    }
}

impl Default for PillarScore {
    fn default() -> Self {
        Self::minimum()
    }
}

/// The five top-level pillars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Pillar {
    Reputation,
    Usage,
    Financial,
    Legal,
    National,
}

impl Pillar {
    /// All pillars in export order
    pub const ALL: [Pillar; 5] = [
        Pillar::Reputation,
        Pillar::Usage,
        Pillar::Financial,
        Pillar::Legal,
        Pillar::National,
    ];

    /// Field name as it appears in serialized assessments
    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Reputation => "reputation",
            Pillar::Usage => "usage",
            Pillar::Financial => "financial",
            Pillar::Legal => "legal",
            Pillar::National => "national",
        }
    }

    /// Human-readable column prefix used by the CSV export
    pub fn display_name(&self) -> &'static str {
        match self {
            Pillar::Reputation => "Reputation",
            Pillar::Usage => "Usage",
            Pillar::Financial => "Financial",
            Pillar::Legal => "Legal",
            Pillar::National => "National Interest",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidentiality/integrity/availability components of the national
/// interest pillar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubPillar {
    Confidentiality,
    Integrity,
    Availability,
}

impl SubPillar {
    pub const ALL: [SubPillar; 3] = [
        SubPillar::Confidentiality,
        SubPillar::Integrity,
        SubPillar::Availability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubPillar::Confidentiality => "confidentiality",
            SubPillar::Integrity => "integrity",
            SubPillar::Availability => "availability",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubPillar::Confidentiality => "Confidentiality",
            SubPillar::Integrity => "Integrity",
            SubPillar::Availability => "Availability",
        }
    }
}

impl fmt::Display for SubPillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_valid_rating_score_in_range(
            likelihood in LIKELIHOOD_MIN..=LIKELIHOOD_MAX,
            impact in IMPACT_MIN..=IMPACT_MAX,
        ) {
            let score = PillarScore::new(likelihood, impact);
            prop_assert!(score.likelihood_in_range());
            prop_assert!(score.impact_in_range());
            prop_assert!((1..=15).contains(&score.risk_score()));
            prop_assert_eq!(score.risk_score(), u32::from(likelihood) * u32::from(impact));
        }
    }
}
