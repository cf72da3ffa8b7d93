use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{
    entities::project_file::ProjectFile,
    error::DomainError,
    value_objects::{Architecture, FileType},
};

pub const DEFAULT_PROJECT_NAME: &str = "FastAPI Project";

/// Canonical, format-independent description of a project.
///
/// Every parser produces one of these; nothing downstream knows which
/// format the schema came from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProjectSchema {
    pub architecture: Architecture,
    pub files: Vec<ProjectFile>,
    pub metadata: BTreeMap<String, String>,
}

impl ProjectSchema {
    pub fn new(architecture: Architecture) -> Self {
        Self {
            architecture,
            ..Self::default()
        }
    }

    pub fn with_files(mut self, files: Vec<ProjectFile>) -> Self {
        self.files = files;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Display name (`metadata.name`).
    pub fn project_name(&self) -> &str {
        self.meta("name").unwrap_or(DEFAULT_PROJECT_NAME)
    }

    pub fn description(&self) -> &str {
        self.meta("description").unwrap_or_default()
    }

    /// Declared root directory, without trailing slash. Empty when unset.
    pub fn root_dir(&self) -> &str {
        self.meta("root_dir")
            .map(|dir| dir.trim_end_matches('/'))
            .unwrap_or_default()
    }

    fn meta(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// A schema must declare at least one file to be generated.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptySchema);
        }
        Ok(())
    }

    pub fn statistics(&self) -> SchemaStatistics {
        let count = |types: &[FileType]| {
            self.files
                .iter()
                .filter(|f| types.contains(&f.file_type()))
                .count()
        };

        SchemaStatistics {
            entities: count(&[FileType::Model]),
            services: count(&[FileType::Service, FileType::UseCase]),
            routers: count(&[FileType::Router]),
            total: self.files.len(),
        }
    }
}

/// File counts by role, shown in the generation summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SchemaStatistics {
    pub entities: usize,
    pub services: usize,
    pub routers: usize,
    pub total: usize,
}
