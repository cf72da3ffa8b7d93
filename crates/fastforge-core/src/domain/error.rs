// ============================================================================
// domain/error.rs - SCHEMA MODEL ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("unknown architecture '{value}'")]
    InvalidArchitecture { value: String },

    #[error("unknown file type '{value}'")]
    UnknownFileType { value: String },

    #[error("class name '{class_name}' for '{path}' is not a valid identifier")]
    InvalidClassName { path: String, class_name: String },

    #[error("file path is empty")]
    EmptyPath,

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("path '{path}' escapes the project root")]
    PathEscapesRoot { path: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("schema declares no valid files")]
    EmptySchema,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArchitecture { value } => vec![
                format!("'{value}' is not a supported architecture"),
                "Supported architectures:".into(),
                "  • layered  - api/services/repositories/models".into(),
                "  • clean    - domain/application/infrastructure".into(),
                "  • modular  - routers/models/crud per feature".into(),
            ],
            Self::UnknownFileType { value } => vec![
                format!("'{value}' is not a known file type"),
                "Known types: model, schema, service, repository, router, use_case, config,".into(),
                "  database, main, package, crud, util, test, default".into(),
                "Use 'default' (or omit the field) to auto-detect".into(),
            ],
            Self::InvalidClassName { class_name, .. } => vec![
                format!("'{class_name}' must start with a letter or '_'"),
                "Use only letters, digits and underscores (e.g. User, OrderItem)".into(),
            ],
            Self::EmptyPath => vec!["Every file entry needs a non-empty path".into()],
            Self::AbsolutePathNotAllowed { .. } | Self::PathEscapesRoot { .. } => vec![
                "File paths must be relative to the project root".into(),
                "Remove leading '/' and any '..' segments".into(),
            ],
            Self::EmptySchema => vec![
                "No .py files were recognised in the schema".into(),
                "Tree schemas need lines like: user.py # → User".into(),
                "JSON/YAML entries need both a path and a class".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
