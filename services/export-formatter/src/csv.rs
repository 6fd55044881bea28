//! CSV export
//!
//! One header row of 22 fixed column names followed by exactly one data
//! row. Values containing a comma, double quote or line break are quoted
//! with inner quotes doubled.

use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use types::assessment::{AssessmentInput, NationalInterestScore};
use types::classification::Classification;
use types::pillar::PillarScore;

use crate::error::ExportError;
use crate::filename;
use crate::{ExportRecord, Exporter, CSV_MIME_TYPE};

/// Column names, in order
pub const CSV_HEADERS: [&str; 22] = [
    "Timestamp",
    "Data Name",
    "Classification",
    "Total Risk Score",
    "Reputation Risk Score",
    "Reputation Likelihood",
    "Reputation Impact",
    "Usage Risk Score",
    "Usage Likelihood",
    "Usage Impact",
    "Financial Risk Score",
    "Financial Likelihood",
    "Financial Impact",
    "Legal Risk Score",
    "Legal Likelihood",
    "Legal Impact",
    "National Interest Risk Score",
    "National Interest Likelihood",
    "National Interest Confidentiality",
    "National Interest Integrity",
    "National Interest Availability",
    "National Interest Impact",
];

/// One data row of the CSV export
///
/// Field order matches `CSV_HEADERS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Data Name")]
    pub data_name: String,
    #[serde(rename = "Classification")]
    pub classification: Classification,
    #[serde(rename = "Total Risk Score")]
    pub total_risk_score: u32,
    #[serde(rename = "Reputation Risk Score")]
    pub reputation_risk_score: u32,
    #[serde(rename = "Reputation Likelihood")]
    pub reputation_likelihood: u8,
    #[serde(rename = "Reputation Impact")]
    pub reputation_impact: u8,
    #[serde(rename = "Usage Risk Score")]
    pub usage_risk_score: u32,
    #[serde(rename = "Usage Likelihood")]
    pub usage_likelihood: u8,
    #[serde(rename = "Usage Impact")]
    pub usage_impact: u8,
    #[serde(rename = "Financial Risk Score")]
    pub financial_risk_score: u32,
    #[serde(rename = "Financial Likelihood")]
    pub financial_likelihood: u8,
    #[serde(rename = "Financial Impact")]
    pub financial_impact: u8,
    #[serde(rename = "Legal Risk Score")]
    pub legal_risk_score: u32,
    #[serde(rename = "Legal Likelihood")]
    pub legal_likelihood: u8,
    #[serde(rename = "Legal Impact")]
    pub legal_impact: u8,
    #[serde(rename = "National Interest Risk Score")]
    pub national_risk_score: u32,
    #[serde(rename = "National Interest Likelihood")]
    pub national_likelihood: u8,
    #[serde(rename = "National Interest Confidentiality")]
    pub national_confidentiality: u8,
    #[serde(rename = "National Interest Integrity")]
    pub national_integrity: u8,
    #[serde(rename = "National Interest Availability")]
    pub national_availability: u8,
    #[serde(rename = "National Interest Impact")]
    pub national_impact: u8,
}

impl CsvRow {
    pub fn from_record(record: &ExportRecord<'_>) -> Self {
        let input = record.input;
        let result = record.result;
        let scores = &result.pillar_scores;
        Self {
            timestamp: record.iso_timestamp(),
            data_name: input.data_name.clone(),
            classification: result.classification,
            total_risk_score: result.total_score,
            reputation_risk_score: scores.reputation,
            reputation_likelihood: input.reputation.likelihood,
            reputation_impact: input.reputation.impact,
            usage_risk_score: scores.usage,
            usage_likelihood: input.usage.likelihood,
            usage_impact: input.usage.impact,
            financial_risk_score: scores.financial,
            financial_likelihood: input.financial.likelihood,
            financial_impact: input.financial.impact,
            legal_risk_score: scores.legal,
            legal_likelihood: input.legal.likelihood,
            legal_impact: input.legal.impact,
            national_risk_score: scores.national,
            national_likelihood: input.national.likelihood,
            national_confidentiality: input.national.confidentiality.impact,
            national_integrity: input.national.integrity.impact,
            national_availability: input.national.availability.impact,
            national_impact: result.national_impact,
        }
    }

    /// Rebuild the assessment input from the row.
    ///
    /// The CSV layout does not carry sub-pillar likelihoods; they are
    /// restored from the national-interest likelihood.
    pub fn to_input(&self) -> AssessmentInput {
        AssessmentInput {
            data_name: self.data_name.clone(),
            reputation: PillarScore::new(self.reputation_likelihood, self.reputation_impact),
            usage: PillarScore::new(self.usage_likelihood, self.usage_impact),
            financial: PillarScore::new(self.financial_likelihood, self.financial_impact),
            legal: PillarScore::new(self.legal_likelihood, self.legal_impact),
            national: NationalInterestScore::new(
                self.national_likelihood,
                self.national_confidentiality,
                self.national_integrity,
                self.national_availability,
            ),
        }
    }

    /// Timestamp column parsed back into a UTC instant
    pub fn parsed_timestamp(&self) -> Result<DateTime<Utc>, ExportError> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| ExportError::InvalidExport {
                reason: format!("bad timestamp '{}': {e}", self.timestamp),
            })
    }
}

pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// Encode the header and the single data row.
    pub fn export(&self, record: &ExportRecord<'_>) -> Result<String, ExportError> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(vec![]);

        wtr.write_record(CSV_HEADERS)?;
        wtr.serialize(CsvRow::from_record(record))?;

        let data = wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
        String::from_utf8(data).map_err(|e| ExportError::InvalidExport {
            reason: format!("UTF-8 conversion error: {e}"),
        })
    }

    /// Decode a previously exported file.
    ///
    /// The header must match `CSV_HEADERS` exactly and exactly one data
    /// row must follow.
    pub fn read(&self, bytes: &[u8]) -> Result<CsvRow, ExportError> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(bytes);

        let headers = rdr.headers()?.clone();
        if !headers.iter().eq(CSV_HEADERS.iter().copied()) {
            return Err(ExportError::InvalidExport {
                reason: format!(
                    "unexpected header row: {}",
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            });
        }

        let mut rows = rdr.deserialize::<CsvRow>();
        let row = rows.next().ok_or_else(|| ExportError::InvalidExport {
            reason: "missing data row".to_string(),
        })??;
        if rows.next().is_some() {
            return Err(ExportError::InvalidExport {
                reason: "more than one data row".to_string(),
            });
        }
        Ok(row)
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for CsvExporter {
    fn render(&self, record: &ExportRecord<'_>) -> Result<Vec<u8>, ExportError> {
        Ok(self.export(record)?.into_bytes())
    }

    fn file_name(&self, record: &ExportRecord<'_>) -> String {
        filename::csv_file_name(&record.input.data_name, record.timestamp.date_naive())
    }

    fn mime_type(&self) -> &'static str {
        CSV_MIME_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use types::result::{AssessmentResult, PillarRiskScores};

    fn make_input(name: &str) -> AssessmentInput {
        AssessmentInput {
            data_name: name.to_string(),
            reputation: PillarScore::new(3, 2),
            usage: PillarScore::new(1, 1),
            financial: PillarScore::new(2, 3),
            legal: PillarScore::new(1, 2),
            national: NationalInterestScore::new(4, 3, 2, 1),
        }
    }

    fn make_result() -> AssessmentResult {
        AssessmentResult {
            pillar_scores: PillarRiskScores {
                reputation: 6,
                usage: 1,
                financial: 6,
                legal: 2,
                national: 8,
            },
            national_impact: 2,
            total_score: 5,
            classification: Classification::Confidential,
        }
    }

    fn export(name: &str) -> String {
        let input = make_input(name);
        let result = make_result();
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        CsvExporter::new()
            .export(&ExportRecord::new(&input, &result, ts))
            .unwrap()
    }

    #[test]
    fn test_header_and_single_row() {
        let out = export("payroll");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2); // header + 1 data row
        assert_eq!(lines[0], CSV_HEADERS.join(","));
        assert_eq!(lines[0].split(',').count(), 22);
    }

    #[test]
    fn test_data_row_values_in_order() {
        let out = export("payroll");
        let row = out.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "2024-03-15T10:00:00.000Z,payroll,Confidential,5,6,3,2,1,1,1,6,2,3,2,1,2,8,4,3,2,1,2"
        );
    }

    #[test]
    fn test_comma_in_name_is_quoted() {
        let out = export("names, addresses");
        assert!(out.contains("\"names, addresses\""));
    }

    #[test]
    fn test_quote_in_name_is_doubled() {
        let out = export("the \"vault\"");
        assert!(out.contains("\"the \"\"vault\"\"\""));
    }

    #[test]
    fn test_newline_in_name_is_quoted() {
        let out = export("line one\nline two");
        assert!(out.contains("\"line one\nline two\""));
    }

    #[test]
    fn test_plain_name_not_quoted() {
        let out = export("plain name");
        assert!(out.contains(",plain name,"));
    }

    #[test]
    fn test_top_secret_label_written() {
        let input = make_input("x");
        let mut result = make_result();
        result.classification = Classification::TopSecret;
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let out = CsvExporter::new()
            .export(&ExportRecord::new(&input, &result, ts))
            .unwrap();
        assert!(out.contains(",Top Secret,"));
    }

    #[test]
    fn test_read_back() {
        let out = export("names, \"quoted\"");
        let row = CsvExporter::new().read(out.as_bytes()).unwrap();
        assert_eq!(row.data_name, "names, \"quoted\"");
        assert_eq!(row.to_input(), make_input("names, \"quoted\""));
        assert_eq!(row.classification, Classification::Confidential);
        assert_eq!(
            row.parsed_timestamp().unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_read_rejects_wrong_header() {
        let bad = "Timestamp,Name\n2024-01-01T00:00:00.000Z,x\n";
        let err = CsvExporter::new().read(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::InvalidExport { .. }));
    }

    #[test]
    fn test_read_rejects_missing_row() {
        let header_only = format!("{}\n", CSV_HEADERS.join(","));
        let err = CsvExporter::new().read(header_only.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing data row"));
    }
}
