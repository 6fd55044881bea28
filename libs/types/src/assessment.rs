//! Assessment input types
//!
//! An `AssessmentInput` is the complete user submission for one
//! assessment. It has no identity beyond the session that built it and is
//! never mutated after being handed to the scoring engine.

use crate::pillar::{Pillar, PillarScore, SubPillar};
use serde::{Deserialize, Serialize};

/// Composite national-interest rating
///
/// Only the sub-ratings' impact values feed the aggregated impact; the
/// overall `likelihood` multiplies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NationalInterestScore {
    pub likelihood: u8,
    pub confidentiality: PillarScore,
    pub integrity: PillarScore,
    pub availability: PillarScore,
}

impl NationalInterestScore {
    /// Build from an overall likelihood and the three sub-impacts.
    ///
    /// Sub-pillar likelihoods mirror the overall likelihood.
    pub fn new(likelihood: u8, confidentiality: u8, integrity: u8, availability: u8) -> Self {
        Self {
            likelihood,
            confidentiality: PillarScore::new(likelihood, confidentiality),
            integrity: PillarScore::new(likelihood, integrity),
            availability: PillarScore::new(likelihood, availability),
        }
    }

    pub fn sub_pillar(&self, sub: SubPillar) -> &PillarScore {
        match sub {
            SubPillar::Confidentiality => &self.confidentiality,
            SubPillar::Integrity => &self.integrity,
            SubPillar::Availability => &self.availability,
        }
    }

    /// Impact values in confidentiality, integrity, availability order
    pub fn impacts(&self) -> [u8; 3] {
        [
            self.confidentiality.impact,
            self.integrity.impact,
            self.availability.impact,
        ]
    }
}

impl Default for NationalInterestScore {
    fn default() -> Self {
        Self::new(1, 1, 1, 1)
    }
}

/// Complete user submission for one assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub data_name: String,
    pub reputation: PillarScore,
    pub usage: PillarScore,
    pub financial: PillarScore,
    pub legal: PillarScore,
    pub national: NationalInterestScore,
}

impl AssessmentInput {
    /// Create an assessment with every rating at its minimum
    pub fn new(data_name: impl Into<String>) -> Self {
        Self {
            data_name: data_name.into(),
            reputation: PillarScore::minimum(),
            usage: PillarScore::minimum(),
            financial: PillarScore::minimum(),
            legal: PillarScore::minimum(),
            national: NationalInterestScore::default(),
        }
    }

    pub fn with_pillar(mut self, pillar: Pillar, score: PillarScore) -> Self {
        match pillar {
            Pillar::Reputation => self.reputation = score,
            Pillar::Usage => self.usage = score,
            Pillar::Financial => self.financial = score,
            Pillar::Legal => self.legal = score,
            Pillar::National => {
                self.national = NationalInterestScore::new(
                    score.likelihood,
                    score.impact,
                    score.impact,
                    score.impact,
                )
            }
        }
        self
    }

    pub fn with_national(mut self, national: NationalInterestScore) -> Self {
        self.national = national;
        self
    }

    /// Rating for one of the four simple pillars.
    ///
    /// Returns `None` for `Pillar::National`, which has no single rating.
    pub fn simple_pillar(&self, pillar: Pillar) -> Option<&PillarScore> {
        match pillar {
            Pillar::Reputation => Some(&self.reputation),
            Pillar::Usage => Some(&self.usage),
            Pillar::Financial => Some(&self.financial),
            Pillar::Legal => Some(&self.legal),
            Pillar::National => None,
        }
    }

    /// The four simple pillars in export order
    pub fn simple_pillars(&self) -> [(Pillar, &PillarScore); 4] {
        [
            (Pillar::Reputation, &self.reputation),
            (Pillar::Usage, &self.usage),
            (Pillar::Financial, &self.financial),
            (Pillar::Legal, &self.legal),
        ]
    }
}
