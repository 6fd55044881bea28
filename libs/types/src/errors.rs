//! Error types for the classification calculator
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

/// Malformed assessment input, rejected before scoring
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Data name must not be empty")]
    EmptyDataName,

    #[error("Likelihood for {field} out of range: {value} (expected {min}..={max})")]
    LikelihoodOutOfRange {
        field: String,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("Impact for {field} out of range: {value} (expected {min}..={max})")]
    ImpactOutOfRange {
        field: String,
        value: u8,
        min: u8,
        max: u8,
    },
}

impl ValidationError {
    /// Field path that failed, if the error concerns a rating
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::EmptyDataName => None,
            ValidationError::LikelihoodOutOfRange { field, .. }
            | ValidationError::ImpactOutOfRange { field, .. } => Some(field),
        }
    }
}

/// Invalid classification threshold table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("Thresholds must be strictly ascending: {lower} is not below {upper}")]
    NotAscending { lower: u32, upper: u32 },

    #[error("Lowest threshold must be at least 1, got {value}")]
    ZeroThreshold { value: u32 },
}

/// Unknown classification label
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown classification: {value}")]
pub struct ParseClassificationError {
    pub value: String,
}
