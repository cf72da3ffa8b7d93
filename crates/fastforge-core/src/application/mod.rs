//! Application layer for fastforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! classification or naming rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerateOptions, GenerateService, GenerationReport, WriteTally};

// Re-export port traits (for adapter implementation)
pub use ports::{Archiver, Filesystem, SchemaParser, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
