//! Display languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "th")]
    Thai,
}

impl Language {
    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Thai => "th",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language: {value} (expected 'en' or 'th')")]
pub struct ParseLanguageError {
    pub value: String,
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "th" | "thai" => Ok(Language::Thai),
            _ => Err(ParseLanguageError {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("th".parse::<Language>().unwrap(), Language::Thai);
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Thai).unwrap(), "\"th\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
