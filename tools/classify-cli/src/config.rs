//! Application configuration management
//!
//! Handles loading configuration from a TOML file (`./classify.toml` by
//! default) with `CLASSIFY_*` environment overrides.

use anyhow::{Context, Result};
use export_formatter::ExportFormat;
use labels::Language;
use scoring_engine::ScoringEngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "classify.toml";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scoring engine settings
    #[serde(default)]
    pub scoring: ScoringEngineConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportSettings,

    /// Display settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Export-specific settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Default export format
    #[serde(default)]
    pub format: ExportFormat,

    /// Directory exports are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            output_dir: default_output_dir(),
        }
    }
}

/// Display-specific settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Language for labels and descriptions
    #[serde(default)]
    pub language: Language,
}

impl AppConfig {
    /// Load `./classify.toml` if present, otherwise defaults
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Apply `CLASSIFY_OUTPUT_DIR`, `CLASSIFY_FORMAT` and `CLASSIFY_LANGUAGE`.
    ///
    /// `lookup` is usually `|k| std::env::var(k).ok()`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(dir) = lookup("CLASSIFY_OUTPUT_DIR") {
            self.export.output_dir = PathBuf::from(dir);
        }
        if let Some(format) = lookup("CLASSIFY_FORMAT") {
            self.export.format = format
                .parse()
                .map_err(anyhow::Error::msg)
                .context("Invalid CLASSIFY_FORMAT")?;
        }
        if let Some(language) = lookup("CLASSIFY_LANGUAGE") {
            self.display.language = language.parse().context("Invalid CLASSIFY_LANGUAGE")?;
        }
        Ok(())
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Example configuration file content
pub fn example_config() -> &'static str {
    r#"# Data classification calculator configuration
# Location: ./classify.toml

[scoring]
# Rounding of the mean confidentiality/integrity/availability impact:
# "half-up" or "ceiling"
impact_rounding = "half-up"

# Inclusive lower bounds of each label above Public
[scoring.thresholds]
internal = 3
confidential = 5
secret = 7
top_secret = 10

[export]
format = "csv"
output_dir = "."

[display]
# "en" or "th"
language = "en"
"#
}
