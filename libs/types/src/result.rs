//! Scoring output types
//!
//! Computed deterministically from an `AssessmentInput`; never mutated,
//! only recomputed.

use crate::classification::Classification;
use crate::pillar::Pillar;
use serde::{Deserialize, Serialize};

/// Per-pillar risk scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PillarRiskScores {
    pub reputation: u32,
    pub usage: u32,
    pub financial: u32,
    pub legal: u32,
    pub national: u32,
}

impl PillarRiskScores {
    pub fn get(&self, pillar: Pillar) -> u32 {
        match pillar {
            Pillar::Reputation => self.reputation,
            Pillar::Usage => self.usage,
            Pillar::Financial => self.financial,
            Pillar::Legal => self.legal,
            Pillar::National => self.national,
        }
    }

    /// Sum of all five pillar scores
    pub fn sum(&self) -> u32 {
        Pillar::ALL.iter().map(|p| self.get(*p)).sum()
    }
}

/// Derived, read-only assessment result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub pillar_scores: PillarRiskScores,
    /// Aggregated confidentiality/integrity/availability impact
    pub national_impact: u8,
    pub total_score: u32,
    pub classification: Classification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_lookup() {
        let scores = PillarRiskScores {
            reputation: 6,
            usage: 1,
            financial: 1,
            legal: 1,
            national: 1,
        };
        assert_eq!(scores.sum(), 10);
        assert_eq!(scores.get(Pillar::Reputation), 6);
        assert_eq!(scores.get(Pillar::National), 1);
    }
}
