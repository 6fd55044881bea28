//! Command-line structure
//!
//! Root command with one subcommand per workflow: scoring a new
//! assessment, printing the rating guidance, re-checking an export and
//! showing the effective configuration.

use clap::{Args, Parser, Subcommand, ValueEnum};
use export_formatter::ExportFormat;
use labels::Language;
use scoring_engine::ImpactRounding;
use std::path::PathBuf;
use types::pillar::{Pillar, PillarScore};

/// Data classification calculator
///
/// Rates likelihood and impact across five risk pillars and maps the
/// weighted score to Public, Internal, Confidential, Secret or Top Secret.
#[derive(Parser, Debug)]
#[command(name = "classify")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file path (defaults to ./classify.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Display language for labels (en, th)
    #[arg(short, long, global = true)]
    pub language: Option<Language>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score an assessment and export the result
    Assess(AssessArgs),

    /// Print the likelihood and impact guidance for each pillar
    Describe(DescribeArgs),

    /// Re-score a previous export and check its stored classification
    Inspect(InspectArgs),

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug, Default)]
pub struct AssessArgs {
    /// Assessment JSON file; flags below override its values
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Name of the data set being classified
    #[arg(short, long)]
    pub name: Option<String>,

    /// Reputation rating as LIKELIHOOD:IMPACT (e.g. 3:2)
    #[arg(long, value_parser = parse_rating)]
    pub reputation: Option<PillarScore>,

    /// Operational usage rating as LIKELIHOOD:IMPACT
    #[arg(long, value_parser = parse_rating)]
    pub usage: Option<PillarScore>,

    /// Financial rating as LIKELIHOOD:IMPACT
    #[arg(long, value_parser = parse_rating)]
    pub financial: Option<PillarScore>,

    /// Legal rating as LIKELIHOOD:IMPACT
    #[arg(long, value_parser = parse_rating)]
    pub legal: Option<PillarScore>,

    /// National-interest likelihood (1-5)
    #[arg(long)]
    pub national_likelihood: Option<u8>,

    /// National-interest confidentiality impact (1-3)
    #[arg(long)]
    pub confidentiality: Option<u8>,

    /// National-interest integrity impact (1-3)
    #[arg(long)]
    pub integrity: Option<u8>,

    /// National-interest availability impact (1-3)
    #[arg(long)]
    pub availability: Option<u8>,

    /// Export format (csv, json)
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Rounding for the national-interest impact (half-up, ceiling)
    #[arg(long)]
    pub rounding: Option<ImpactRounding>,

    /// Directory to write the export into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Write the export to stdout instead of a file
    #[arg(long, conflicts_with = "no_export")]
    pub stdout: bool,

    /// Only print the result, do not export
    #[arg(long)]
    pub no_export: bool,
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Only describe one pillar
    #[arg(short, long)]
    pub pillar: Option<PillarArg>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// CSV or JSON export to check
    pub file: PathBuf,

    /// Rounding for the national-interest impact (half-up, ceiling)
    #[arg(long)]
    pub rounding: Option<ImpactRounding>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PillarArg {
    Reputation,
    Usage,
    Financial,
    Legal,
    National,
}

impl From<PillarArg> for Pillar {
    fn from(arg: PillarArg) -> Self {
        match arg {
            PillarArg::Reputation => Pillar::Reputation,
            PillarArg::Usage => Pillar::Usage,
            PillarArg::Financial => Pillar::Financial,
            PillarArg::Legal => Pillar::Legal,
            PillarArg::National => Pillar::National,
        }
    }
}

/// Parse `LIKELIHOOD:IMPACT`.
///
/// Only the syntax is checked here; range checks belong to the validator
/// so that every input path reports them the same way.
pub fn parse_rating(s: &str) -> Result<PillarScore, String> {
    let (likelihood, impact) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LIKELIHOOD:IMPACT, got '{s}'"))?;
    let likelihood = likelihood
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("invalid likelihood '{likelihood}': {e}"))?;
    let impact = impact
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("invalid impact '{impact}': {e}"))?;
    Ok(PillarScore::new(likelihood, impact))
}
