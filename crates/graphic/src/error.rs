//! Error types for the graphic crate.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for graphic operations.
pub type Result<T> = std::result::Result<T, GraphicError>;

/// Errors that can occur while generating a graphic.
#[derive(Debug, Error)]
pub enum GraphicError {
    /// Colour string is not `#RGB` or `#RRGGBB`
    #[error("Invalid colour: {0:?} (expected #RRGGBB)")]
    InvalidColor(String),

    /// Filesystem error at a path
    #[error("IO error at {path}: {source}")]
    Io {
        /// Path being created or inspected
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Size or font size outside what the renderer accepts
    #[error("Invalid graphic settings: {0}")]
    InvalidConfig(#[source] playprep_core::Error),

    /// PNG encoding or writing failed
    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

impl From<GraphicError> for playprep_core::Error {
    fn from(err: GraphicError) -> Self {
        use playprep_core::ErrorCode;

        let err = match err {
            GraphicError::InvalidConfig(inner) => return inner,
            other => other,
        };
        let code = match &err {
            GraphicError::InvalidColor(_) => ErrorCode::InvalidColor,
            GraphicError::Io { .. } => ErrorCode::IoError,
            GraphicError::Encode(_) => ErrorCode::EncodeFailed,
            GraphicError::InvalidConfig(_) => ErrorCode::ConfigValidationError,
        };
        let error = playprep_core::Error::new(code, err.to_string());
        match code {
            ErrorCode::InvalidColor => error
                .with_suggestion("Use hex colours such as \"#009688\" in the [graphic] section")
                .with_source(err),
            _ => error.with_source(err),
        }
    }
}
