//! Label catalogue
//!
//! Static descriptive text shown next to the assessment inputs, keyed by
//! field and language. Nothing in the scoring path reads from here.
//!
//! # Modules
//! - `language`: Supported display languages
//! - `thai`: Thai text
//! - `english`: English text

pub mod language;
mod english;
mod thai;

pub use language::{Language, ParseLanguageError};

use types::classification::Classification;
use types::pillar::{Pillar, SubPillar, IMPACT_MAX, IMPACT_MIN, LIKELIHOOD_MAX, LIKELIHOOD_MIN};

/// Per-language text table
pub(crate) struct Catalogue {
    /// Impact descriptions for reputation, usage, financial, legal (levels 1..=3)
    pub impact: [[&'static str; 3]; 4],
    /// Definitions of confidentiality, integrity, availability
    pub sub_definition: [&'static str; 3],
    /// Impact descriptions for confidentiality, integrity, availability (levels 1..=3)
    pub sub_impact: [[&'static str; 3]; 3],
    /// Likelihood option labels (levels 1..=5)
    pub likelihood: [&'static str; 5],
    /// Impact option labels (levels 1..=3)
    pub impact_level: [&'static str; 3],
    /// Classification names, least sensitive first
    pub classification: [&'static str; 5],
    /// Heading shown above each impact description list
    pub impact_heading: &'static str,
}

fn catalogue(language: Language) -> &'static Catalogue {
    match language {
        Language::English => &english::CATALOGUE,
        Language::Thai => &thai::CATALOGUE,
    }
}

fn simple_index(pillar: Pillar) -> Option<usize> {
    match pillar {
        Pillar::Reputation => Some(0),
        Pillar::Usage => Some(1),
        Pillar::Financial => Some(2),
        Pillar::Legal => Some(3),
        Pillar::National => None,
    }
}

fn sub_index(sub: SubPillar) -> usize {
    match sub {
        SubPillar::Confidentiality => 0,
        SubPillar::Integrity => 1,
        SubPillar::Availability => 2,
    }
}

fn impact_slot(level: u8) -> Option<usize> {
    (IMPACT_MIN..=IMPACT_MAX)
        .contains(&level)
        .then(|| usize::from(level - IMPACT_MIN))
}

/// Impact description for a simple pillar at a given level.
///
/// The national-interest pillar has no single description; use
/// `sub_impact_description` instead.
pub fn impact_description(pillar: Pillar, level: u8, language: Language) -> Option<&'static str> {
    let row = catalogue(language).impact.get(simple_index(pillar)?)?;
    row.get(impact_slot(level)?).copied()
}

/// What a national-interest sub-pillar protects
pub fn definition(sub: SubPillar, language: Language) -> &'static str {
    catalogue(language).sub_definition[sub_index(sub)]
}

/// Impact description for a national-interest sub-pillar at a given level
pub fn sub_impact_description(sub: SubPillar, level: u8, language: Language) -> Option<&'static str> {
    catalogue(language).sub_impact[sub_index(sub)]
        .get(impact_slot(level)?)
        .copied()
}

/// Likelihood option label, e.g. "Level 3: Moderate"
pub fn likelihood_label(level: u8, language: Language) -> Option<&'static str> {
    if !(LIKELIHOOD_MIN..=LIKELIHOOD_MAX).contains(&level) {
        return None;
    }
    catalogue(language)
        .likelihood
        .get(usize::from(level - LIKELIHOOD_MIN))
        .copied()
}

/// Impact option label: Low, Medium or High
pub fn impact_label(level: u8, language: Language) -> Option<&'static str> {
    catalogue(language).impact_level.get(impact_slot(level)?).copied()
}

pub fn classification_label(class: Classification, language: Language) -> &'static str {
    let idx = Classification::ALL
        .iter()
        .position(|c| *c == class)
        .unwrap_or(0);
    catalogue(language).classification[idx]
}

pub fn impact_heading(language: Language) -> &'static str {
    catalogue(language).impact_heading
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGUAGES: [Language; 2] = [Language::English, Language::Thai];

    #[test]
    fn test_every_simple_pillar_level_has_text() {
        for language in LANGUAGES {
            for pillar in [Pillar::Reputation, Pillar::Usage, Pillar::Financial, Pillar::Legal] {
                for level in 1..=3 {
                    let text = impact_description(pillar, level, language);
                    assert!(
                        text.is_some_and(|t| !t.trim().is_empty()),
                        "{pillar} level {level} {language:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_sub_pillar_level_has_text() {
        for language in LANGUAGES {
            for sub in SubPillar::ALL {
                assert!(!definition(sub, language).is_empty());
                for level in 1..=3 {
                    assert!(sub_impact_description(sub, level, language).is_some());
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_levels() {
        assert_eq!(impact_description(Pillar::Legal, 0, Language::English), None);
        assert_eq!(impact_description(Pillar::Legal, 4, Language::Thai), None);
        assert_eq!(impact_description(Pillar::National, 1, Language::English), None);
        assert_eq!(likelihood_label(6, Language::English), None);
        assert_eq!(impact_label(0, Language::English), None);
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(impact_label(1, Language::English), Some("Low"));
        assert_eq!(impact_label(3, Language::Thai), Some("High"));
        assert!(likelihood_label(1, Language::English).is_some_and(|l| l.starts_with("Level 1")));
        assert!(likelihood_label(5, Language::Thai).is_some_and(|l| l.starts_with("Level 5")));
    }

    #[test]
    fn test_classification_labels() {
        assert_eq!(
            classification_label(Classification::TopSecret, Language::English),
            "Top Secret"
        );
        assert_eq!(classification_label(Classification::Public, Language::Thai), "เปิดเผย");
    }
}
