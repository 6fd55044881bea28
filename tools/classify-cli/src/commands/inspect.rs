//! `classify inspect`
//!
//! Decodes a CSV or JSON export, re-scores its inputs and reports whether
//! the stored scores and classification still agree.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use export_formatter::{CsvExporter, ExportFormat, JsonExporter};
use labels::Language;
use scoring_engine::{validate_input, ScoringEngine};
use std::path::Path;
use types::assessment::AssessmentInput;
use types::classification::Classification;

use super::assess::{format_for_path, render_summary};
use crate::cli::InspectArgs;
use crate::config::AppConfig;

/// Scores as stored in an export file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredExport {
    pub input: AssessmentInput,
    pub total_score: u32,
    pub classification: Classification,
    pub timestamp: DateTime<Utc>,
}

pub fn run(args: &InspectArgs, config: &AppConfig, language: Language) -> Result<()> {
    let stored = load_export(&args.file)?;

    let mut engine_config = config.scoring;
    if let Some(rounding) = args.rounding {
        engine_config.impact_rounding = rounding;
    }
    let engine = ScoringEngine::with_config(engine_config);

    validate_input(&stored.input)
        .with_context(|| format!("Export contains invalid ratings: {}", args.file.display()))?;
    let result = engine.compute(&stored.input);

    print!("{}", render_summary(&stored.input, &result, language));
    println!("{:<20} {}", "Assessed at", stored.timestamp.to_rfc3339());

    check_consistency(&stored, result.total_score, result.classification)?;
    println!("\nStored classification matches.");
    Ok(())
}

/// Decode an export, choosing the decoder from the file extension.
pub fn load_export(path: &Path) -> Result<StoredExport> {
    let Some(format) = format_for_path(path) else {
        bail!("Cannot tell export format from file name: {}", path.display());
    };
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read export: {}", path.display()))?;

    let stored = match format {
        ExportFormat::Csv => {
            let row = CsvExporter::new()
                .read(&bytes)
                .with_context(|| format!("Failed to decode CSV export: {}", path.display()))?;
            StoredExport {
                input: row.to_input(),
                total_score: row.total_risk_score,
                classification: row.classification,
                timestamp: row.parsed_timestamp()?,
            }
        }
        ExportFormat::Json => {
            let doc = JsonExporter::new()
                .read(&bytes)
                .with_context(|| format!("Failed to decode JSON export: {}", path.display()))?;
            StoredExport {
                input: doc.input,
                total_score: doc.total_risk_score,
                classification: doc.classification,
                timestamp: doc.assessment_date,
            }
        }
    };
    tracing::debug!(path = %path.display(), %format, "export decoded");
    Ok(stored)
}

/// Fail if the recomputed score or classification differs from the stored one.
pub fn check_consistency(
    stored: &StoredExport,
    total_score: u32,
    classification: Classification,
) -> Result<()> {
    if stored.total_score != total_score || stored.classification != classification {
        bail!(
            "Stored result ({}, {}) does not match recomputed result ({}, {})",
            stored.total_score,
            stored.classification,
            total_score,
            classification
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoring_engine::{ImpactRounding, ScoringEngineConfig};
    use types::assessment::NationalInterestScore;
    use types::pillar::{Pillar, PillarScore};

    fn make_input() -> AssessmentInput {
        AssessmentInput::new("Vendor contracts")
            .with_pillar(Pillar::Reputation, PillarScore::new(3, 2))
            .with_national(NationalInterestScore::new(5, 1, 1, 2))
    }

    fn write_export(dir: &Path, format: ExportFormat) -> std::path::PathBuf {
        let input = make_input();
        let result = ScoringEngine::new().assess(&input).unwrap();
        let payload = export_formatter::format(&input, &result, Utc::now(), format).unwrap();
        crate::commands::assess::write_payload(&payload, dir).unwrap()
    }

    #[test]
    fn test_load_csv_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(dir.path(), ExportFormat::Csv);

        let stored = load_export(&path).unwrap();
        assert_eq!(stored.input, make_input());
        let result = ScoringEngine::new().compute(&stored.input);
        check_consistency(&stored, result.total_score, result.classification).unwrap();
    }

    #[test]
    fn test_load_json_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(dir.path(), ExportFormat::Json);

        let stored = load_export(&path).unwrap();
        assert_eq!(stored.input, make_input());
        assert_eq!(stored.total_score, 3);
        assert_eq!(stored.classification, Classification::Internal);
    }

    #[test]
    fn test_rounding_mismatch_detected() {
        // C/I/A impacts (1, 1, 2): half-up gives 1, ceiling gives 2
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(dir.path(), ExportFormat::Json);
        let stored = load_export(&path).unwrap();

        let ceiling = ScoringEngine::with_config(ScoringEngineConfig {
            impact_rounding: ImpactRounding::Ceiling,
            ..Default::default()
        });
        let result = ceiling.compute(&stored.input);
        assert_eq!(result.total_score, stored.total_score + 1);
        assert!(check_consistency(&stored, result.total_score, result.classification).is_err());
    }

    #[test]
    fn test_unknown_extension() {
        let err = load_export(Path::new("export.txt")).unwrap_err();
        assert!(err.to_string().contains("Cannot tell export format"));
    }

    #[test]
    fn test_corrupt_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        std::fs::write(&path, "Timestamp\n2024\n").unwrap();
        let err = load_export(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to decode CSV export"));
    }
}
