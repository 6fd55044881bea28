//! Scoring Engine
//!
//! Maps a completed assessment to per-pillar risk scores, a total score
//! and a sensitivity classification.
//!
//! Provides input validation, national-interest impact aggregation,
//! threshold classification and the orchestrating engine.

pub mod rounding;
pub mod thresholds;
pub mod validator;
pub mod engine;

pub use engine::{ScoringEngine, ScoringEngineConfig};
pub use rounding::ImpactRounding;
pub use thresholds::{classify, ClassificationThresholds};
pub use validator::validate_input;
