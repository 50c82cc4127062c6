//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Source errors (markup discovery and reading)
//! - 2xx: Config errors
//! - 3xx: Output errors (directories, stylesheets, scripts, manifest)
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for robot mode output.
///
/// Each variant maps to a numeric code (e.g., `SourceReadFailed` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Source errors (1xx)
    // ========================================
    /// E101: A markup file could not be read
    SourceReadFailed,
    /// E102: The `from` glob pattern is malformed
    PatternInvalid,

    // ========================================
    // Config errors (2xx)
    // ========================================
    /// E201: A config source has invalid syntax or values
    ConfigInvalid,
    /// E202: A config source exists but cannot be read
    ConfigUnreadable,

    // ========================================
    // Output errors (3xx)
    // ========================================
    /// E301: A block directory could not be created
    DirectoryCreateFailed,
    /// E302: A stylesheet or script stub could not be written
    FileWriteFailed,
    /// E303: The shared script manifest could not be updated
    ManifestUpdateFailed,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: IO operation failed
    IoError,
    /// E902: JSON/TOML (de)serialization failed
    SerializationError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `SourceReadFailed` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::SourceReadFailed => 101,
            Self::PatternInvalid => 102,

            Self::ConfigInvalid => 201,
            Self::ConfigUnreadable => 202,

            Self::DirectoryCreateFailed => 301,
            Self::FileWriteFailed => 302,
            Self::ManifestUpdateFailed => 303,

            Self::IoError => 901,
            Self::SerializationError => 902,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::SourceReadFailed => "Check that the file is readable UTF-8 text; other files were still scanned",
            Self::PatternInvalid => "Fix the `from` pattern. Use `%` to separate alternatives, e.g. `src/**/*.+(html%php)`",
            Self::ConfigInvalid => "Check the `bemtree` block in package.json or bemtree.toml for syntax errors",
            Self::ConfigUnreadable => "Check permissions on the config file",
            Self::DirectoryCreateFailed => "Check that the `to` directory is writable",
            Self::FileWriteFailed => "Check permissions on the block directory and rerun; existing files are never overwritten",
            Self::ManifestUpdateFailed => "Check that the `js` manifest path is writable",
            Self::IoError => "Check file permissions and available disk space",
            Self::SerializationError => "Report this as a bug with the offending input attached",
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "source",
            2 => "config",
            3 => "output",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::SourceReadFailed,
            Self::PatternInvalid,
            Self::ConfigInvalid,
            Self::ConfigUnreadable,
            Self::DirectoryCreateFailed,
            Self::FileWriteFailed,
            Self::ManifestUpdateFailed,
            Self::IoError,
            Self::SerializationError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
