//! Built-in template catalog.
//!
//! Immutable data: architecture -> template key -> body. Every body uses
//! only the four placeholders understood by the renderer.

mod clean;
mod layered;
mod modular;
mod project_files;

use fastforge_core::domain::Architecture;

pub use project_files::support_files;

/// `(key, body)` pairs registered for an architecture.
pub fn catalog(architecture: Architecture) -> &'static [(&'static str, &'static str)] {
    match architecture {
        Architecture::Layered => layered::TEMPLATES,
        Architecture::Clean => clean::TEMPLATES,
        Architecture::Modular => modular::TEMPLATES,
    }
}
