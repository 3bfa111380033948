use clap::Parser;
use std::path::PathBuf;

use crate::assistant::{Tone, Verbosity};
use crate::inventory::domain::DataMode;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'markdown'",
                s
            )),
        }
    }
}

/// Analyze a cryptographic asset inventory for quantum readiness
#[derive(Parser, Debug)]
#[command(name = "quasar")]
#[command(version)]
#[command(about = "Analyze a cryptographic asset inventory for quantum readiness", long_about = None)]
pub struct Args {
    /// Output format: json or markdown (default json; a config file may
    /// override the default)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to an uploaded CSV dataset for this session (must end in .csv)
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// How the upload combines with the bundled inventory:
    /// combined or upload-only
    #[arg(short, long)]
    pub mode: Option<DataMode>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the sample CSV template to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Ask the demo assistant a question instead of generating a report
    #[arg(long, value_name = "QUESTION")]
    pub ask: Option<String>,

    /// Assistant response length: short, medium or long
    #[arg(long, default_value = "medium")]
    pub verbosity: Verbosity,

    /// Assistant response register: technical or non-technical
    #[arg(long, default_value = "technical")]
    pub tone: Tone,

    /// Directory where the assistant interaction JSON is saved
    #[arg(long, value_name = "DIR")]
    pub save_response: Option<PathBuf>,

    /// Seed for simulated jitter (confidence scores, streaming delays)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reference date (YYYY-MM-DD) for the synthesized trend series;
    /// defaults to today
    #[arg(long, value_name = "DATE")]
    pub as_of: Option<NaiveDate>,

    /// Explicit config file path (default: ./quasar.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_json() {
        let format = OutputFormat::from_str("json").unwrap();
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        assert!(matches!(
            OutputFormat::from_str("JSON").unwrap(),
            OutputFormat::Json
        ));
        assert!(matches!(
            OutputFormat::from_str("Markdown").unwrap(),
            OutputFormat::Markdown
        ));
    }

    #[test]
    fn test_output_format_from_str_md_alias() {
        assert!(matches!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        ));
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("xml").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("xml"));
        assert!(error.contains("json"));
        assert!(error.contains("markdown"));
    }

    #[test]
    fn test_args_parse_report_flags() {
        let args = Args::parse_from([
            "quasar",
            "--format",
            "markdown",
            "--data",
            "upload.csv",
            "--mode",
            "upload-only",
            "--seed",
            "7",
            "--as-of",
            "2026-08-30",
        ]);
        assert!(matches!(args.format, Some(OutputFormat::Markdown)));
        assert_eq!(args.data.unwrap(), PathBuf::from("upload.csv"));
        assert_eq!(args.mode.unwrap(), DataMode::UploadOnly);
        assert_eq!(args.seed, Some(7));
        assert_eq!(
            args.as_of.unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
        );
    }

    #[test]
    fn test_args_parse_assistant_flags() {
        let args = Args::parse_from([
            "quasar",
            "--ask",
            "what is my risk?",
            "--verbosity",
            "short",
            "--tone",
            "non-technical",
        ]);
        assert_eq!(args.ask.as_deref(), Some("what is my risk?"));
        assert_eq!(args.verbosity, Verbosity::Short);
        assert_eq!(args.tone, Tone::NonTechnical);
    }
}
