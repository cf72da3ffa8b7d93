//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not schema
//! rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading schemas or producing a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Schema file does not exist.
    #[error("Schema file not found: {path}")]
    SchemaNotFound { path: PathBuf },

    /// Schema extension is not one of the supported formats.
    #[error("Unsupported schema format: {path}")]
    UnsupportedSchemaFormat { path: PathBuf },

    /// Schema could not be read from disk.
    #[error("Failed to read schema {path}: {reason}")]
    SchemaRead { path: PathBuf, reason: String },

    /// Schema text is not valid for its format.
    #[error("Malformed {format} schema: {reason}")]
    MalformedSchema { format: &'static str, reason: String },

    /// Template rendering failed.
    #[error("Template rendering failed for {path}: {reason}")]
    RenderingFailed { path: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A shared in-memory resource was poisoned by a panicking writer.
    #[error("{resource} lock poisoned")]
    LockPoisoned { resource: &'static str },

    /// Packaging the generated tree failed.
    #[error("Failed to create archive {path}: {reason}")]
    ArchiveFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SchemaNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Check the --input path and try again".into(),
            ],
            Self::UnsupportedSchemaFormat { .. } => vec![
                "Supported schema extensions: .txt, .json, .yaml, .yml".into(),
                "Rename the file or convert it to one of these formats".into(),
            ],
            Self::SchemaRead { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check file permissions and that the file is UTF-8 text".into(),
            ],
            Self::MalformedSchema { format, .. } => vec![
                format!("Fix the {format} syntax error reported above"),
                "JSON needs a top-level object with a \"files\" array".into(),
                "YAML needs structure.files as a list of {path, class} entries".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "A template left a placeholder unresolved".into(),
                "This is a bug in a built-in template, please report it".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::LockPoisoned { resource } => vec![
                format!("The {resource} is unusable after an earlier panic"),
                "Re-run the command".into(),
            ],
            Self::ArchiveFailed { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check free disk space and write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SchemaNotFound { .. } => ErrorCategory::NotFound,
            Self::UnsupportedSchemaFormat { .. } | Self::MalformedSchema { .. } => {
                ErrorCategory::Validation
            }
            Self::SchemaRead { .. }
            | Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::LockPoisoned { .. }
            | Self::ArchiveFailed { .. } => ErrorCategory::Internal,
        }
    }
}
