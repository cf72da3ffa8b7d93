//! Infrastructure adapters for fastforge.
//!
//! This crate implements the ports defined in `fastforge-core::application::ports`.
//! It contains all external dependencies and I/O operations: schema
//! parsing, the built-in template catalog, filesystem access and zip
//! packaging.

pub mod archive;
pub mod filesystem;
pub mod parsers;
pub mod renderer;
pub mod template_store;
pub mod templates;

// Re-export commonly used adapters
pub use archive::ZipArchiver;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use parsers::{SchemaFormat, load_schema};
pub use renderer::SimpleRenderer;
pub use template_store::InMemoryStore;
