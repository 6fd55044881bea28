//! Sensitivity classification labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseClassificationError;

/// Discrete sensitivity label derived from the total risk score
///
/// Variants are declared from least to most sensitive so the derived
/// ordering matches sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Public")]
    Public,
    #[serde(rename = "Internal")]
    Internal,
    #[serde(rename = "Confidential")]
    Confidential,
    #[serde(rename = "Secret")]
    Secret,
    #[serde(rename = "Top Secret")]
    TopSecret,
}

impl Classification {
    /// All labels, least sensitive first
    pub const ALL: [Classification; 5] = [
        Classification::Public,
        Classification::Internal,
        Classification::Confidential,
        Classification::Secret,
        Classification::TopSecret,
    ];

    /// Label text used in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Public => "Public",
            Classification::Internal => "Internal",
            Classification::Confidential => "Confidential",
            Classification::Secret => "Secret",
            Classification::TopSecret => "Top Secret",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classification::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseClassificationError {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_sensitivity() {
        assert!(Classification::Public < Classification::Internal);
        assert!(Classification::Secret < Classification::TopSecret);
        assert_eq!(Classification::ALL.iter().max(), Some(&Classification::TopSecret));
    }

    #[test]
    fn test_top_secret_label_has_space() {
        assert_eq!(Classification::TopSecret.to_string(), "Top Secret");
        let json = serde_json::to_string(&Classification::TopSecret).unwrap();
        assert_eq!(json, "\"Top Secret\"");
    }

    #[test]
    fn test_parse_round_trip() {
        for class in Classification::ALL {
            assert_eq!(class.as_str().parse::<Classification>().unwrap(), class);
        }
        assert_eq!("top secret".parse::<Classification>().unwrap(), Classification::TopSecret);
        assert!("Restricted".parse::<Classification>().is_err());
    }
}
