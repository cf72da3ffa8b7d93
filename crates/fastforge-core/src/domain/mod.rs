// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for fastforge.
//!
//! This module contains pure generation logic with no I/O. Reading schema
//! files, writing the project tree and archiving are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **Minimal crates**: std library + thiserror + serde (for reports)
//! - **Immutable entities**: Schemas are built once by a parser and never mutated
//! - **Table-driven rules**: Classification and template mapping are static data
//!
// Public API - what the world sees
pub mod classifier;
pub mod entities;
pub mod error;
pub mod render;
pub mod value_objects;

// Re-exports for convenience
pub use classifier::{detect_file_type, infer_architecture, resolve_template};
pub use entities::{
    common::RelativePath,
    project_file::ProjectFile,
    project_schema::{DEFAULT_PROJECT_NAME, ProjectSchema, SchemaStatistics},
    project_structure::{PACKAGE_MARKER, PackageMarker, StructurePlan},
    support_file::{ProjectIdentity, SupportFile, WritePolicy, project_slug},
    test_stub::TestStub,
};
pub use error::{DomainError, ErrorCategory};
pub use render::{FALLBACK_TEMPLATE, RenderContext, find_unresolved};
pub use value_objects::{Architecture, FileType, TemplateKey};

/// Build a file whose type and template are auto-detected from its path.
///
/// This is the shared path every parser uses when a schema entry carries
/// no explicit overrides.
pub fn classify_file(
    path: &str,
    class_name: &str,
    architecture: Architecture,
) -> Result<ProjectFile, DomainError> {
    let normalized = RelativePath::normalize(path);
    let file_type = detect_file_type(&normalized, architecture);
    ProjectFile::new(
        path,
        class_name,
        file_type,
        resolve_template(file_type, architecture),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Classification Pipeline Tests
    // ========================================================================

    #[test]
    fn clean_entity_resolves_to_domain_entity_template() {
        let file = classify_file("src/domain/entities/order.py", "Order", Architecture::Clean)
            .unwrap();

        assert_eq!(file.file_type(), FileType::Model);
        assert_eq!(file.template().as_str(), "domain_entity");
    }

    #[test]
    fn same_path_maps_to_plain_key_outside_clean() {
        let file =
            classify_file("src/domain/entities/order.py", "Order", Architecture::Modular).unwrap();
        assert_eq!(file.template().as_str(), "model");
    }

    #[test]
    fn classify_normalizes_before_detecting() {
        let file = classify_file(r"app\api\v1\endpoints\users.py", "Users", Architecture::Layered)
            .unwrap();
        assert_eq!(file.path().as_str(), "app/api/v1/endpoints/users.py");
        assert_eq!(file.file_type(), FileType::Router);
    }

    #[test]
    fn invalid_entries_surface_domain_errors() {
        assert!(matches!(
            classify_file("../escape.py", "X", Architecture::Layered),
            Err(DomainError::PathEscapesRoot { .. })
        ));
        assert!(matches!(
            classify_file("a.py", "not valid", Architecture::Layered),
            Err(DomainError::InvalidClassName { .. })
        ));
    }

    // ========================================================================
    // Error Metadata Tests
    // ========================================================================

    #[test]
    fn every_domain_error_has_suggestions() {
        let errors = [
            DomainError::InvalidArchitecture { value: "x".into() },
            DomainError::UnknownFileType { value: "x".into() },
            DomainError::InvalidClassName {
                path: "a.py".into(),
                class_name: "1".into(),
            },
            DomainError::EmptyPath,
            DomainError::AbsolutePathNotAllowed { path: "/a".into() },
            DomainError::PathEscapesRoot { path: "../a".into() },
            DomainError::EmptySchema,
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty(), "{err}");
            assert_eq!(err.category(), ErrorCategory::Validation);
        }
    }
}
