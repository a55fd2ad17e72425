//! Structured errors with codes, context, and recovery suggestions
//!
//! Every error carries:
//! - an error code for programmatic handling
//! - optional context describing what was being attempted
//! - an optional recovery suggestion
//! - a serializable report form, written by `verify --json` on failure

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Error codes for programmatic error handling
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // IO errors (2xxx)
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    // Configuration errors (3xxx)
    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,
    ConfigValidationError = 3003,

    // Validation errors (6xxx)
    ValidationError = 6000,
    MissingFiles = 6001,
    InvalidFormat = 6002,

    // Graphic errors (9xxx)
    GraphicError = 9000,
    InvalidColor = 9001,
    EncodeFailed = 9002,
}

impl ErrorCode {
    /// Get the numeric code
    #[must_use]
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            2 => "IO",
            3 => "Configuration",
            6 => "Validation",
            9 => "Graphic",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {ctx}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {suggestion}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Convert to a serializable report
    #[must_use]
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(ToString::to_string),
        }
    }

    /// I/O failure while inspecting or writing a specific path
    pub fn io_at(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        let err_text = err.to_string();
        let error = Self::new(code, format!("{}: {err_text}", path.as_ref().display())).with_source(err);
        if code == ErrorCode::PermissionDenied {
            error.with_suggestion("Check the permissions of the path and its parent directories")
        } else {
            error
        }
    }

    /// Explicitly requested configuration file is absent
    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a .playprep.toml file or use --config to specify a path")
    }

    /// Configuration parsed but holds unusable values
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigValidationError, message)
    }

    /// Validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Required publishing files are absent
    pub fn missing_files(missing: usize, total: usize) -> Self {
        Self::new(
            ErrorCode::MissingFiles,
            format!("{missing} of {total} required files are missing"),
        )
        .with_suggestion("Create the files marked missing, or use --report-only to only print the report")
    }

    /// Whether this error belongs to the configuration category
    #[must_use]
    pub fn is_config(&self) -> bool {
        self.code.code() / 1000 == 3
    }

    /// Process exit code for a command that failed with this error
    ///
    /// Bad colours are configuration mistakes even though the graphic
    /// crate reports them.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_config() || self.code == ErrorCode::InvalidColor {
            exit_codes::CONFIG_ERROR
        } else if self.code.category() == "Validation" {
            exit_codes::VALIDATION_ERROR
        } else {
            exit_codes::FAILURE
        }
    }
}

/// Serializable error report for logging and `--json` output
#[allow(missing_docs)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub code_str: String,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
#[allow(missing_docs)]
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const VALIDATION_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::InvalidFormat, format!("JSON error: {err}")).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {err}")).with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach context describing the failed operation
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::ConfigValidationError.to_string(), "E3003");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::MissingFiles.category(), "Validation");
        assert_eq!(ErrorCode::InvalidColor.category(), "Graphic");
    }

    #[test]
    fn test_error_display_includes_context_and_suggestion() {
        let err = Error::config_not_found("missing.toml").with_context("While loading configuration");
        let text = err.to_string();

        assert!(text.starts_with("[E3001] Configuration file not found: missing.toml"));
        assert!(text.contains("Context: While loading configuration"));
        assert!(text.contains("Suggestion:"));
        assert!(err.is_config());
    }

    #[test]
    fn test_io_at_permission_denied_has_suggestion() {
        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = Error::io_at("secret/file", io);

        assert_eq!(err.code, ErrorCode::PermissionDenied);
        assert!(err.message.starts_with("secret/file"));
        assert!(err.suggestion.is_some());
        assert!(!err.is_config());
    }

    #[test]
    fn test_exit_code_by_category() {
        assert_eq!(Error::config_invalid("bad").exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(Error::missing_files(1, 24).exit_code(), exit_codes::VALIDATION_ERROR);
        assert_eq!(Error::validation("too few").exit_code(), exit_codes::VALIDATION_ERROR);
        assert_eq!(Error::new(ErrorCode::InvalidColor, "teal").exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(Error::new(ErrorCode::EncodeFailed, "png").exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_missing_files_message() {
        let err = Error::missing_files(2, 24);
        assert_eq!(err.code, ErrorCode::MissingFiles);
        assert_eq!(err.message, "2 of 24 required files are missing");
        assert!(err.suggestion.unwrap().contains("--report-only"));
    }

    #[test]
    fn test_error_report_serialization() {
        let err = Error::validation("2 files missing").with_context("During verify");

        let report = err.to_report();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("E6000"));
        assert!(json.contains("Validation"));
        assert!(json.contains("During verify"));
    }
}
