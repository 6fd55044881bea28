//! Assessment input validation
//!
//! Rejects malformed submissions before they reach the engine. The
//! engine's `compute` assumes every check here has passed.

use types::assessment::AssessmentInput;
use types::errors::ValidationError;
use types::pillar::{PillarScore, IMPACT_MAX, IMPACT_MIN, LIKELIHOOD_MAX, LIKELIHOOD_MIN};

/// Validate an assessment.
///
/// Returns the first failing check.
///
/// Checks performed (in order):
/// 1. Data name is non-empty after trimming whitespace
/// 2. Reputation, usage, financial and legal ratings are within bounds
/// 3. National-interest likelihood is within bounds
/// 4. Confidentiality, integrity and availability ratings are within bounds
pub fn validate_input(input: &AssessmentInput) -> Result<(), ValidationError> {
    let result = run_checks(input);
    if let Err(err) = &result {
        tracing::debug!(data_name = %input.data_name, error = %err, "assessment rejected");
    }
    result
}

fn run_checks(input: &AssessmentInput) -> Result<(), ValidationError> {
    // 1. Data name
    if input.data_name.trim().is_empty() {
        return Err(ValidationError::EmptyDataName);
    }

    // 2. Simple pillars
    for (pillar, score) in input.simple_pillars() {
        check_rating(pillar.as_str(), score)?;
    }

    // 3. National-interest overall likelihood
    check_likelihood("national", input.national.likelihood)?;

    // 4. Sub-pillars
    for sub in types::pillar::SubPillar::ALL {
        let field = format!("national.{}", sub.as_str());
        check_rating(&field, input.national.sub_pillar(sub))?;
    }

    Ok(())
}

fn check_rating(field: &str, score: &PillarScore) -> Result<(), ValidationError> {
    check_likelihood(field, score.likelihood)?;
    if !score.impact_in_range() {
        return Err(ValidationError::ImpactOutOfRange {
            field: field.to_string(),
            value: score.impact,
            min: IMPACT_MIN,
            max: IMPACT_MAX,
        });
    }
    Ok(())
}

fn check_likelihood(field: &str, likelihood: u8) -> Result<(), ValidationError> {
    if !(LIKELIHOOD_MIN..=LIKELIHOOD_MAX).contains(&likelihood) {
        return Err(ValidationError::LikelihoodOutOfRange {
            field: field.to_string(),
            value: likelihood,
            min: LIKELIHOOD_MIN,
            max: LIKELIHOOD_MAX,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::assessment::NationalInterestScore;
    use types::pillar::Pillar;

    fn make_input() -> AssessmentInput {
        AssessmentInput::new("customer ledger")
    }

    #[test]
    fn test_minimum_ratings_pass() {
        assert_eq!(validate_input(&make_input()), Ok(()));
    }

    #[test]
    fn test_maximum_ratings_pass() {
        let mut input = make_input();
        for pillar in [Pillar::Reputation, Pillar::Usage, Pillar::Financial, Pillar::Legal] {
            input = input.with_pillar(pillar, PillarScore::new(5, 3));
        }
        input = input.with_national(NationalInterestScore::new(5, 3, 3, 3));
        assert_eq!(validate_input(&input), Ok(()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let input = AssessmentInput::new("");
        assert_eq!(validate_input(&input), Err(ValidationError::EmptyDataName));
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let input = AssessmentInput::new("  \t\n ");
        assert_eq!(validate_input(&input), Err(ValidationError::EmptyDataName));
    }

    #[test]
    fn test_name_checked_before_ratings() {
        let input = AssessmentInput::new(" ").with_pillar(Pillar::Legal, PillarScore::new(9, 9));
        assert_eq!(validate_input(&input), Err(ValidationError::EmptyDataName));
    }

    #[test]
    fn test_likelihood_out_of_range() {
        let input = make_input().with_pillar(Pillar::Usage, PillarScore::new(6, 1));
        let err = validate_input(&input).unwrap_err();
        assert_eq!(
            err,
            ValidationError::LikelihoodOutOfRange {
                field: "usage".to_string(),
                value: 6,
                min: 1,
                max: 5,
            }
        );
    }

    #[test]
    fn test_zero_impact_rejected() {
        let input = make_input().with_pillar(Pillar::Reputation, PillarScore::new(1, 0));
        let err = validate_input(&input).unwrap_err();
        assert!(matches!(err, ValidationError::ImpactOutOfRange { value: 0, .. }));
        assert_eq!(err.field(), Some("reputation"));
    }

    #[test]
    fn test_first_failure_reported() {
        let input = make_input()
            .with_pillar(Pillar::Financial, PillarScore::new(1, 4))
            .with_pillar(Pillar::Legal, PillarScore::new(0, 1));
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err.field(), Some("financial"));
    }

    #[test]
    fn test_national_likelihood_rejected() {
        let input = make_input().with_national(NationalInterestScore::new(0, 1, 1, 1));
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err.field(), Some("national"));
    }

    #[test]
    fn test_sub_pillar_impact_rejected() {
        let input = make_input().with_national(NationalInterestScore::new(2, 1, 4, 1));
        let err = validate_input(&input).unwrap_err();
        assert_eq!(err.field(), Some("national.integrity"));
    }
}
