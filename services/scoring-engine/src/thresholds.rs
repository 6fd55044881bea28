//! Classification threshold table
//!
//! Maps a total risk score to a `Classification` by descending inclusive
//! lower bounds.
//!
//! | Total score | Classification |
//! |-------------|----------------|
//! | ≥ 10        | Top Secret     |
//! | 7 – 9       | Secret         |
//! | 5 – 6       | Confidential   |
//! | 3 – 4       | Internal       |
//! | 0 – 2       | Public         |

use serde::{Deserialize, Serialize};
use types::classification::Classification;
use types::errors::ThresholdError;

/// Inclusive lower bounds for each label above `Public`.
///
/// Bounds are strictly ascending, so every score maps to exactly one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ThresholdTable", into = "ThresholdTable")]
pub struct ClassificationThresholds {
    internal: u32,
    confidential: u32,
    secret: u32,
    top_secret: u32,
}

impl ClassificationThresholds {
    pub fn new(
        internal: u32,
        confidential: u32,
        secret: u32,
        top_secret: u32,
    ) -> Result<Self, ThresholdError> {
        if internal == 0 {
            return Err(ThresholdError::ZeroThreshold { value: internal });
        }
        for (lower, upper) in [
            (internal, confidential),
            (confidential, secret),
            (secret, top_secret),
        ] {
            if lower >= upper {
                return Err(ThresholdError::NotAscending { lower, upper });
            }
        }
        Ok(Self {
            internal,
            confidential,
            secret,
            top_secret,
        })
    }

    /// Lower bound of the given label (`Public` starts at 0)
    pub fn lower_bound(&self, class: Classification) -> u32 {
        match class {
            Classification::Public => 0,
            Classification::Internal => self.internal,
            Classification::Confidential => self.confidential,
            Classification::Secret => self.secret,
            Classification::TopSecret => self.top_secret,
        }
    }
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            internal: 3,
            confidential: 5,
            secret: 7,
            top_secret: 10,
        }
    }
}

/// Unchecked wire form of the threshold table
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ThresholdTable {
    internal: u32,
    confidential: u32,
    secret: u32,
    top_secret: u32,
}

impl TryFrom<ThresholdTable> for ClassificationThresholds {
    type Error = ThresholdError;

    fn try_from(raw: ThresholdTable) -> Result<Self, Self::Error> {
        Self::new(raw.internal, raw.confidential, raw.secret, raw.top_secret)
    }
}

impl From<ClassificationThresholds> for ThresholdTable {
    fn from(t: ClassificationThresholds) -> Self {
        Self {
            internal: t.internal,
            confidential: t.confidential,
            secret: t.secret,
            top_secret: t.top_secret,
        }
    }
}

/// Classify a total score, most sensitive label first.
pub fn classify(total_score: u32, thresholds: &ClassificationThresholds) -> Classification {
    Classification::ALL
        .into_iter()
        .rev()
        .find(|class| total_score >= thresholds.lower_bound(*class))
        .unwrap_or(Classification::Public)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_classification_monotonic(score in 0u32..200) {
            let t = ClassificationThresholds::default();
            prop_assert!(classify(score, &t) <= classify(score + 1, &t));
        }

        #[test]
        fn prop_label_matches_its_range(score in 0u32..200) {
            let t = ClassificationThresholds::default();
            let class = classify(score, &t);
            prop_assert!(score >= t.lower_bound(class));
            if let Some(next) = Classification::ALL.iter().find(|c| **c > class) {
                prop_assert!(score < t.lower_bound(*next));
            }
        }
    }
}
