use serde::Serialize;

use crate::domain::{
    entities::common::RelativePath,
    error::DomainError,
    value_objects::{FileType, TemplateKey},
};

/// One file declared by a schema.
///
/// Immutable once built. Derived names (`module_name`, `table_name`) are
/// computed from `class_name` so they can never be absent at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFile {
    path: RelativePath,
    class_name: String,
    file_type: FileType,
    template: TemplateKey,
}

impl ProjectFile {
    pub fn new(
        path: &str,
        class_name: &str,
        file_type: FileType,
        template: TemplateKey,
    ) -> Result<Self, DomainError> {
        let path = RelativePath::try_new(path)?;
        let class_name = class_name.trim();

        if !is_identifier(class_name) {
            return Err(DomainError::InvalidClassName {
                path: path.to_string(),
                class_name: class_name.to_string(),
            });
        }

        Ok(Self {
            path,
            class_name: class_name.to_string(),
            file_type,
            template,
        })
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn template(&self) -> &TemplateKey {
        &self.template
    }

    /// Lowercased class name.
    pub fn module_name(&self) -> String {
        self.class_name.to_lowercase()
    }

    /// Naive plural of the module name.
    pub fn table_name(&self) -> String {
        format!("{}s", self.module_name())
    }

    pub fn filename(&self) -> &str {
        self.path.file_name()
    }

    pub fn parent_dir(&self) -> Option<&str> {
        self.path.parent()
    }

    /// Same file relocated under `root`.
    pub fn with_root(&self, root: &str) -> Result<Self, DomainError> {
        Ok(Self {
            path: self.path.prefixed(root)?,
            ..self.clone()
        })
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
