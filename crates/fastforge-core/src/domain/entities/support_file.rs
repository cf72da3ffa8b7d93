use serde::Serialize;

/// A project-level file that does not come from the schema
/// (manifest, readme, lint config, ignore file, entry point).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportFile {
    pub path: String,
    pub content: String,
    pub policy: WritePolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Always rewritten.
    Overwrite,
    /// Written under the schema's root directory, only when absent.
    EntryPoint,
}

impl SupportFile {
    pub fn overwrite(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            policy: WritePolicy::Overwrite,
        }
    }

    pub fn entry_point(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            policy: WritePolicy::EntryPoint,
        }
    }
}

/// Names the generated project files refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    /// Output directory name, as given.
    pub dir_name: String,
    /// Python-friendly package name derived from `dir_name`.
    pub slug: String,
}

impl ProjectIdentity {
    pub fn from_dir_name(dir_name: impl Into<String>) -> Self {
        let dir_name = dir_name.into();
        Self {
            slug: project_slug(&dir_name),
            dir_name,
        }
    }
}

/// Lowercase, with spaces and dashes turned into underscores.
pub fn project_slug(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}
