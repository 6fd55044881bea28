//! JSON export
//!
//! The assessment input flattened at the top level, extended with the
//! computed scores, the classification and the assessment date.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use types::assessment::AssessmentInput;
use types::classification::Classification;
use types::result::PillarRiskScores;

use crate::error::ExportError;
use crate::filename;
use crate::{ExportRecord, Exporter, JSON_MIME_TYPE};

/// Exported assessment document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(flatten)]
    pub input: AssessmentInput,
    pub pillar_risk_scores: PillarRiskScores,
    pub total_risk_score: u32,
    pub classification: Classification,
    pub assessment_date: DateTime<Utc>,
}

impl ExportDocument {
    pub fn from_record(record: &ExportRecord<'_>) -> Self {
        Self {
            input: record.input.clone(),
            pillar_risk_scores: record.result.pillar_scores,
            total_risk_score: record.result.total_score,
            classification: record.result.classification,
            assessment_date: record.timestamp,
        }
    }
}

pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn export(&self, record: &ExportRecord<'_>) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(&ExportDocument::from_record(record))?)
    }

    /// Decode a previously exported document.
    pub fn read(&self, bytes: &[u8]) -> Result<ExportDocument, ExportError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn render(&self, record: &ExportRecord<'_>) -> Result<Vec<u8>, ExportError> {
        Ok(self.export(record)?.into_bytes())
    }

    fn file_name(&self, record: &ExportRecord<'_>) -> String {
        filename::json_file_name(&record.input.data_name)
    }

    fn mime_type(&self) -> &'static str {
        JSON_MIME_TYPE
    }
}
