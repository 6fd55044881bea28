//! Scoring Engine — orchestrator
//!
//! Ties together per-pillar scoring, national-interest impact aggregation,
//! total-score averaging and threshold classification.

use serde::{Deserialize, Serialize};
use types::assessment::AssessmentInput;
use types::errors::ValidationError;
use types::result::{AssessmentResult, PillarRiskScores};

use crate::rounding::{self, ImpactRounding};
use crate::thresholds::{self, ClassificationThresholds};
use crate::validator;

/// Scoring engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringEngineConfig {
    /// Rounding applied to the mean national-interest sub-impact
    pub impact_rounding: ImpactRounding,
    /// Classification lower bounds
    pub thresholds: ClassificationThresholds,
}

/// Scoring engine
///
/// Holds no state beyond its configuration; every call is a pure function
/// of its input.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringEngineConfig,
}

impl ScoringEngine {
    /// Create a new engine with default configuration
    pub fn new() -> Self {
        Self {
            config: ScoringEngineConfig::default(),
        }
    }

    /// Create a new engine with custom configuration
    pub fn with_config(config: ScoringEngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringEngineConfig {
        &self.config
    }

    /// Score an assessment.
    ///
    /// Assumes `input` has passed `validate_input`; out-of-range ratings
    /// produce a result but it is meaningless.
    ///
    /// 1. `score = likelihood × impact` for reputation, usage, financial, legal
    /// 2. `national = national.likelihood × aggregate(c, i, a)`
    /// 3. `total = ceil(sum / 5)`
    /// 4. classify `total` against the thresholds
    pub fn compute(&self, input: &AssessmentInput) -> AssessmentResult {
        let national_impact =
            rounding::aggregate_impact(input.national.impacts(), self.config.impact_rounding);

        let pillar_scores = PillarRiskScores {
            reputation: input.reputation.risk_score(),
            usage: input.usage.risk_score(),
            financial: input.financial.risk_score(),
            legal: input.legal.risk_score(),
            national: u32::from(input.national.likelihood) * u32::from(national_impact),
        };

        let total_score = rounding::total_score(pillar_scores.sum());
        let classification = thresholds::classify(total_score, &self.config.thresholds);

        AssessmentResult {
            pillar_scores,
            national_impact,
            total_score,
            classification,
        }
    }

    /// Validate, then score.
    pub fn assess(&self, input: &AssessmentInput) -> Result<AssessmentResult, ValidationError> {
        validator::validate_input(input)?;
        Ok(self.compute(input))
    }
}
