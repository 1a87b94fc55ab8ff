//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Cutpoint                               │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ├── ValidationError ───► VALIDATION_ERROR   (exit 2)            │
//! │         ├── UnsupportedVolume ─► UNSUPPORTED_VOLUME (exit 2)            │
//! │         ├── io::Error ─────────► IO_ERROR           (exit 1)            │
//! │         └── config::Error ─────► CONFIG_ERROR       (exit 1)            │
//! │                                                                         │
//! │  Human output: "[ValidationError] Por favor, ..." on stderr             │
//! │  JSON output:  { "code": "VALIDATION_ERROR", "message": "..." }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use cutpoint_core::{CoreError, ValidationError};
use serde::Serialize;

/// Error returned from CLI commands.
///
/// ## Serialization
/// This is what `--json` prints when a command fails:
/// ```json
/// {
///   "code": "UNSUPPORTED_VOLUME",
///   "message": "Unsupported bottle volume class: 800 cc (supported: 1000, 970, 925)"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for scripts
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Form input rejected before calculation
    ValidationError,

    /// Calculator rejected the bottle volume
    UnsupportedVolume,

    /// Reading input or writing output failed
    IoError,

    /// Configuration could not be loaded
    ConfigError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ConfigError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Process exit code for this error.
    ///
    /// Input problems exit with 2 so scripts can tell them apart from
    /// environment failures.
    pub fn exit_code(&self) -> ExitCode {
        match self.code {
            ErrorCode::ValidationError | ErrorCode::UnsupportedVolume => ExitCode::from(2),
            ErrorCode::IoError | ErrorCode::ConfigError | ErrorCode::Internal => {
                ExitCode::FAILURE
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnsupportedVolumeClass { .. } => {
                ApiError::new(ErrorCode::UnsupportedVolume, err.to_string())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O failure: {}", err);
        ApiError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::config(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::internal(format!("JSON serialization failed: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
