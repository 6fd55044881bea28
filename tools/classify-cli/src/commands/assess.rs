//! `classify assess`

use anyhow::{bail, Context, Result};
use chrono::Utc;
use export_formatter::{ExportFormat, ExportPayload};
use labels::Language;
use scoring_engine::ScoringEngine;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use types::assessment::AssessmentInput;
use types::pillar::{Pillar, PillarScore};
use types::result::AssessmentResult;

use crate::cli::AssessArgs;
use crate::config::AppConfig;

pub fn run(args: &AssessArgs, config: &AppConfig, language: Language) -> Result<()> {
    let input = build_input(args)?;

    let mut engine_config = config.scoring;
    if let Some(rounding) = args.rounding {
        engine_config.impact_rounding = rounding;
    }
    let engine = ScoringEngine::with_config(engine_config);

    let result = engine
        .assess(&input)
        .with_context(|| format!("Cannot score '{}'", input.data_name))?;
    tracing::info!(
        data_name = %input.data_name,
        total = result.total_score,
        classification = %result.classification,
        "assessment scored"
    );

    let summary = render_summary(&input, &result, language);
    if args.no_export {
        print!("{summary}");
        return Ok(());
    }

    let format = args.format.unwrap_or(config.export.format);
    let payload = export_formatter::format(&input, &result, Utc::now(), format)
        .context("Failed to encode export")?;

    if args.stdout {
        // Keep stdout clean for the payload
        eprint!("{summary}");
        let mut out = std::io::stdout().lock();
        out.write_all(&payload.bytes)?;
        out.flush()?;
        return Ok(());
    }

    print!("{summary}");
    let dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());
    let path = write_payload(&payload, &dir)?;
    println!("\nExported {} ({}) to {}", format, payload.mime_type, path.display());
    Ok(())
}

/// Build the assessment from the input file (if any) and the rating flags.
pub fn build_input(args: &AssessArgs) -> Result<AssessmentInput> {
    let mut input = match &args.input {
        Some(path) => read_input_file(path)?,
        None => {
            let Some(name) = &args.name else {
                bail!("Either --input or --name is required");
            };
            AssessmentInput::new(name.clone())
        }
    };

    if let Some(name) = &args.name {
        input.data_name = name.clone();
    }

    let simple: [(Pillar, Option<PillarScore>); 4] = [
        (Pillar::Reputation, args.reputation),
        (Pillar::Usage, args.usage),
        (Pillar::Financial, args.financial),
        (Pillar::Legal, args.legal),
    ];
    for (pillar, score) in simple {
        if let Some(score) = score {
            input = input.with_pillar(pillar, score);
        }
    }

    let national = &mut input.national;
    if let Some(likelihood) = args.national_likelihood {
        national.likelihood = likelihood;
        national.confidentiality.likelihood = likelihood;
        national.integrity.likelihood = likelihood;
        national.availability.likelihood = likelihood;
    }
    if let Some(impact) = args.confidentiality {
        national.confidentiality.impact = impact;
    }
    if let Some(impact) = args.integrity {
        national.integrity.impact = impact;
    }
    if let Some(impact) = args.availability {
        national.availability.impact = impact;
    }

    Ok(input)
}

fn read_input_file(path: &Path) -> Result<AssessmentInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse input file: {}", path.display()))
}

/// Human-readable result table
pub fn render_summary(
    input: &AssessmentInput,
    result: &AssessmentResult,
    language: Language,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", input.data_name);
    let _ = writeln!(out, "{}", "=".repeat(input.data_name.chars().count().max(8)));

    for (pillar, score) in input.simple_pillars() {
        let _ = writeln!(
            out,
            "{:<20} {} x {} = {:>2}",
            pillar.display_name(),
            score.likelihood,
            score.impact,
            result.pillar_scores.get(pillar)
        );
    }
    let _ = writeln!(
        out,
        "{:<20} {} x {} = {:>2}   (C {} / I {} / A {})",
        Pillar::National.display_name(),
        input.national.likelihood,
        result.national_impact,
        result.pillar_scores.national,
        input.national.confidentiality.impact,
        input.national.integrity.impact,
        input.national.availability.impact,
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<20} {}", "Total risk score", result.total_score);
    let _ = writeln!(
        out,
        "{:<20} {}",
        "Classification",
        labels::classification_label(result.classification, language)
    );
    out
}

/// Write the payload into `dir`, creating it if needed.
pub fn write_payload(payload: &ExportPayload, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    // Data names are free text; keep the file inside `dir`
    let file_name: String = payload
        .file_name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let path = dir.join(file_name);

    std::fs::write(&path, &payload.bytes)
        .with_context(|| format!("Failed to write export: {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = payload.bytes.len(), "export written");
    Ok(path)
}

/// Export format implied by a file extension
pub fn format_for_path(path: &Path) -> Option<ExportFormat> {
    let ext = path.extension()?.to_str()?;
    ext.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use export_formatter::{CSV_MIME_TYPE, JSON_MIME_TYPE};
    use types::classification::Classification;

    fn flags() -> AssessArgs {
        AssessArgs {
            name: Some("payroll".to_string()),
            reputation: Some(PillarScore::new(3, 2)),
            financial: Some(PillarScore::new(2, 3)),
            legal: Some(PillarScore::new(1, 2)),
            national_likelihood: Some(4),
            confidentiality: Some(3),
            integrity: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_input_from_flags() {
        let input = build_input(&flags()).unwrap();
        assert_eq!(input.data_name, "payroll");
        assert_eq!(input.reputation, PillarScore::new(3, 2));
        assert_eq!(input.usage, PillarScore::minimum());
        assert_eq!(input.national.likelihood, 4);
        assert_eq!(input.national.integrity, PillarScore::new(4, 2));
        assert_eq!(input.national.availability, PillarScore::new(4, 1));
    }

    #[test]
    fn test_build_input_requires_name() {
        let err = build_input(&AssessArgs::default()).unwrap_err();
        assert!(err.to_string().contains("--name"));
    }

    #[test]
    fn test_build_input_file_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        let base = AssessmentInput::new("from file")
            .with_pillar(Pillar::Usage, PillarScore::new(5, 3));
        std::fs::write(&path, serde_json::to_string(&base).unwrap()).unwrap();

        let args = AssessArgs {
            input: Some(path),
            legal: Some(PillarScore::new(2, 2)),
            ..Default::default()
        };
        let input = build_input(&args).unwrap();
        assert_eq!(input.data_name, "from file");
        assert_eq!(input.usage, PillarScore::new(5, 3));
        assert_eq!(input.legal, PillarScore::new(2, 2));
    }

    #[test]
    fn test_build_input_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        std::fs::write(&path, "{ not json").unwrap();
        let args = AssessArgs {
            input: Some(path),
            ..Default::default()
        };
        let err = build_input(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to parse input file"));
    }

    #[test]
    fn test_summary_localized() {
        let input = build_input(&flags()).unwrap();
        let result = ScoringEngine::new().assess(&input).unwrap();
        assert_eq!(result.classification, Classification::Confidential);

        let en = render_summary(&input, &result, Language::English);
        assert!(en.contains("Confidential"));
        assert!(en.contains("Total risk score     5"));

        let th = render_summary(&input, &result, Language::Thai);
        assert!(th.contains("ลับ"));
    }

    #[test]
    fn test_write_payload_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/out");
        let payload = ExportPayload {
            bytes: b"{}".to_vec(),
            file_name: "a/b_classification.json".to_string(),
            mime_type: JSON_MIME_TYPE,
        };

        let path = write_payload(&payload, &target).unwrap();
        assert_eq!(path, target.join("a_b_classification.json"));
        assert_eq!(std::fs::read(&path).unwrap(), b"{}");
    }

    #[test]
    fn test_end_to_end_csv_file() {
        let input = build_input(&flags()).unwrap();
        let result = ScoringEngine::new().assess(&input).unwrap();
        let payload =
            export_formatter::format(&input, &result, Utc::now(), ExportFormat::Csv).unwrap();
        assert_eq!(payload.mime_type, CSV_MIME_TYPE);

        let dir = tempfile::tempdir().unwrap();
        let path = write_payload(&payload, dir.path()).unwrap();
        assert_eq!(format_for_path(&path), Some(ExportFormat::Csv));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains(",payroll,Confidential,5,"));
    }

    #[test]
    fn test_format_for_path() {
        assert_eq!(format_for_path(Path::new("x.json")), Some(ExportFormat::Json));
        assert_eq!(format_for_path(Path::new("x.CSV")), Some(ExportFormat::Csv));
        assert_eq!(format_for_path(Path::new("x.txt")), None);
        assert_eq!(format_for_path(Path::new("noext")), None);
    }
}
