//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `fastforge-adapters` crate provides implementations.

use crate::domain::{Architecture, ProjectIdentity, ProjectSchema, RenderContext, SupportFile, TemplateKey};
use crate::error::ForgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `fastforge_adapters::filesystem::LocalFilesystem` (production)
/// - `fastforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `write_file` never creates parents; the service creates every
///   directory before rendering starts
/// - `create_dir_all` is idempotent
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `fastforge_adapters::template_store::InMemoryStore` (built-in templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Template body registered for `(architecture, key)`, if any.
    fn get(&self, architecture: Architecture, key: &TemplateKey) -> ForgeResult<Option<String>>;

    /// Project-level files (manifest, readme, lint config, ignore file,
    /// editor config, entry point) for a project.
    fn support_files(
        &self,
        architecture: Architecture,
        identity: &ProjectIdentity,
    ) -> ForgeResult<Vec<SupportFile>>;
}

/// Port for placeholder substitution.
///
/// Implemented by:
/// - `fastforge_adapters::renderer::SimpleRenderer` (fixed four-token substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Substitute `context` into `body`.
    ///
    /// Fails if any `{{ identifier }}` token is left in the output.
    fn render(&self, body: &str, context: &RenderContext) -> ForgeResult<String>;
}

/// Port for turning schema text into the canonical model.
///
/// Implemented by the three format parsers in
/// `fastforge_adapters::parsers`.
pub trait SchemaParser: Send + Sync {
    fn parse(&self, source: &str) -> ForgeResult<ProjectSchema>;
}

/// Port for packaging a generated tree.
///
/// Implemented by:
/// - `fastforge_adapters::archive::ZipArchiver`
pub trait Archiver: Send + Sync {
    /// Package every regular file under `source` into `destination`.
    /// Returns the number of entries written.
    fn archive(&self, source: &Path, destination: &Path) -> ForgeResult<usize>;
}
