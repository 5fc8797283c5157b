use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish an attribution run that needs
/// operator remediation (unknown licenses) from a generic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - all outputs were written
    Success = 0,
    /// One or more license ids could not be resolved to a license text
    UnknownLicenses = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing input, network error, file I/O error, etc.)
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
            ExitCode::UnknownLicenses => write!(f, "Unknown Licenses (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for attribution generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AttributionError {
    #[error("SBOM file not found: {path}\n\n💡 Hint: {suggestion}")]
    SbomNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a CycloneDX JSON document")]
    SbomParseError { path: PathBuf, details: String },

    #[error("Failed to load license map: {source_name}\nDetails: {details}\n\n💡 Hint: The license map must be a JSON object mapping license strings to SPDX ids")]
    LicenseMapError { source_name: String, details: String },

    #[error("Failed to load filters: {source_name}\nDetails: {details}\n\n💡 Hint: Filters must be a JSON object with 'purlRegex' and 'suppliers' arrays of valid regular expressions")]
    FiltersError { source_name: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Aggregate failure listing every license id without a resolvable text
    #[error("Unknown license expressions found: {}", ids.join(", "))]
    UnknownLicenses { ids: Vec<String> },

    #[error("Timed out after {seconds}s while resolving license texts\n\n💡 Hint: Increase deadline_secs or check your network connection")]
    Timeout { seconds: u64 },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
