//! Export Formatter
//!
//! Serializes an assessment and its computed result into a downloadable
//! payload: the encoded bytes, a derived file name and a MIME type.
//! Nothing here touches the filesystem; delivering the payload is the
//! caller's job.
//!
//! # Modules
//! - `csv` — Fixed 22-column single-row CSV
//! - `json` — Pretty-printed assessment document
//! - `filename` — File name derivation from the data name
//! - `error` — Export error taxonomy

pub mod csv;
pub mod error;
pub mod filename;
pub mod json;

pub use self::csv::{CsvExporter, CsvRow, CSV_HEADERS};
pub use self::error::ExportError;
pub use self::json::{ExportDocument, JsonExporter};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use types::assessment::AssessmentInput;
use types::result::AssessmentResult;

/// MIME type of CSV payloads
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";
/// MIME type of JSON payloads
pub const JSON_MIME_TYPE: &str = "application/json";

/// Everything an exporter needs for one assessment
#[derive(Debug, Clone, Copy)]
pub struct ExportRecord<'a> {
    pub input: &'a AssessmentInput,
    pub result: &'a AssessmentResult,
    pub timestamp: DateTime<Utc>,
}

impl<'a> ExportRecord<'a> {
    pub fn new(
        input: &'a AssessmentInput,
        result: &'a AssessmentResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            input,
            result,
            timestamp,
        }
    }

    /// ISO-8601 UTC timestamp with millisecond precision
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Trait for export encodings
pub trait Exporter {
    fn render(&self, record: &ExportRecord<'_>) -> Result<Vec<u8>, ExportError>;
    fn file_name(&self, record: &ExportRecord<'_>) -> String;
    fn mime_type(&self) -> &'static str;
}

/// Supported encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    fn exporter(&self) -> &'static dyn Exporter {
        match self {
            ExportFormat::Csv => &CsvExporter,
            ExportFormat::Json => &JsonExporter,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format '{other}' (expected 'csv' or 'json')")),
        }
    }
}

/// Encoded export ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: &'static str,
}

/// Encode an assessment and its result.
pub fn format(
    input: &AssessmentInput,
    result: &AssessmentResult,
    timestamp: DateTime<Utc>,
    format: ExportFormat,
) -> Result<ExportPayload, ExportError> {
    let record = ExportRecord::new(input, result, timestamp);
    let exporter = format.exporter();
    Ok(ExportPayload {
        bytes: exporter.render(&record)?,
        file_name: exporter.file_name(&record),
        mime_type: exporter.mime_type(),
    })
}
