use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - report generated, template written, or assistant answered
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (ingestion error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for inventory analysis.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum QuasarError {
    #[error("Missing required columns: {cols}\n\n💡 Hint: Download the sample template (--template) to see the expected header row", cols = columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("CSV must have a header row and at least one data row\n\n💡 Hint: The first line is treated as the header; add at least one asset row below it")]
    InsufficientData,

    #[error("Unsupported file type: {path}\n\n💡 Hint: Only files with a .csv suffix are accepted", path = path.display())]
    UnsupportedFileType { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions", path = path.display())]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions", path = path.display())]
    FileWriteError { path: PathBuf, details: String },

    #[error("{format} output generation failed\nDetails: {details}")]
    OutputGenerationError { format: String, details: String },

    #[error("Invalid configuration: {details}")]
    InvalidConfig { details: String },
}
