//! Error handling for bemtree.
//!
//! This module provides:
//! - [`BemError`]: The main error enum for all bemtree operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//!
//! Nothing here is fatal to a run. Errors are raised per unit of work
//! (one markup file, one block, the manifest) and the caller records them.

mod codes;

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for bemtree operations.
#[derive(Error, Debug)]
pub enum BemError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Cannot read {}: {source}", .path.display())]
    ReadSource { path: PathBuf, source: io::Error },

    #[error("Cannot read config {}: {source}", .path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("Cannot create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Cannot write {}: {source}", .path.display())]
    WriteFile { path: PathBuf, source: io::Error },
}

impl BemError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Toml(_) | Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Pattern { .. } => ErrorCode::PatternInvalid,
            Self::ReadSource { .. } => ErrorCode::SourceReadFailed,
            Self::ReadConfig { .. } => ErrorCode::ConfigUnreadable,
            Self::CreateDir { .. } => ErrorCode::DirectoryCreateFailed,
            Self::WriteFile { .. } => ErrorCode::FileWriteFailed,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::Pattern { pattern, .. } => Some(serde_json::json!({ "pattern": pattern })),
            Self::ReadSource { path, .. }
            | Self::ReadConfig { path, .. }
            | Self::CreateDir { path, .. }
            | Self::WriteFile { path, .. } => {
                Some(serde_json::json!({ "path": path.display().to_string() }))
            }
            _ => None,
        }
    }

    /// Render the error for `--robot` output.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let code = self.code();
        serde_json::json!({
            "error": true,
            "code": code,
            "numeric_code": code.numeric(),
            "category": code.category(),
            "message": self.to_string(),
            "suggestion": code.suggestion(),
            "context": self.context(),
        })
    }
}

/// A unit of work that failed without stopping the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub path: PathBuf,
    pub code: ErrorCode,
    pub message: String,
}

impl Failure {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, err: &BemError) -> Self {
        Self {
            path: path.into(),
            code: err.code(),
            message: err.to_string(),
        }
    }

    /// Replace the code derived from the underlying error.
    #[must_use]
    pub const fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = code;
        self
    }
}

/// Result type alias using `BemError`.
pub type Result<T> = std::result::Result<T, BemError>;
