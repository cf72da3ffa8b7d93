//! Placeholder vocabulary shared by every template.

use crate::domain::entities::project_file::{ProjectFile, is_identifier};

pub const CLASS_NAME: &str = "{{ class_name }}";
pub const MODULE_NAME: &str = "{{ module_name }}";
pub const TABLE_NAME: &str = "{{ table_name }}";
pub const FILE_PATH: &str = "{{ file_path }}";

/// Body used when an architecture has no template for a key.
pub const FALLBACK_TEMPLATE: &str = r#"# {{ file_path }}


class {{ class_name }}:
    """Auto-generated placeholder for {{ class_name }} ({{ file_path }})."""

    pass
"#;

/// Values for the four placeholders of one file.
///
/// All four are always present: they are derived from the class name and
/// the normalized path, never read from optional schema fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub class_name: String,
    pub module_name: String,
    pub table_name: String,
    pub file_path: String,
}

impl RenderContext {
    pub fn for_file(file: &ProjectFile) -> Self {
        Self {
            class_name: file.class_name().to_string(),
            module_name: file.module_name(),
            table_name: file.table_name(),
            file_path: file.path().to_string(),
        }
    }

    /// `(token, value)` pairs. Tokens never contain one another, so the
    /// order of substitution does not matter.
    pub fn placeholders(&self) -> [(&'static str, &str); 4] {
        [
            (CLASS_NAME, self.class_name.as_str()),
            (MODULE_NAME, self.module_name.as_str()),
            (TABLE_NAME, self.table_name.as_str()),
            (FILE_PATH, self.file_path.as_str()),
        ]
    }
}

/// First `{{ identifier }}` token left in `text`, if any.
///
/// Braces around anything that is not an identifier (e.g. a dict literal)
/// are ignored.
pub fn find_unresolved(text: &str) -> Option<&str> {
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            return None;
        };
        let inner = after[..end].trim();
        if is_identifier(inner) {
            return Some(&rest[start..start + 2 + end + 2]);
        }
        rest = &after[end + 2..];
    }
    None
}
