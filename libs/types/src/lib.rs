//! Types library for the data classification calculator
//!
//! This library provides the core type definitions shared by the scoring
//! engine, the export formatter and the command-line front end.
//!
//! # Modules
//! - `pillar`: Likelihood/impact ratings and pillar identifiers
//! - `assessment`: The complete user submission for one assessment
//! - `classification`: Sensitivity labels and their ordering
//! - `result`: Derived, read-only scoring output
//! - `errors`: Error taxonomy

// Public modules
pub mod pillar;
pub mod assessment;
pub mod classification;
pub mod result;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::pillar::*;
    pub use crate::assessment::*;
    pub use crate::classification::*;
    pub use crate::result::*;
    pub use crate::errors::*;
}
