//! JSON schemas.
//!
//! ```json
//! {
//!   "architecture": "modular",
//!   "project_name": "Shop",
//!   "files": [{ "path": "app/models/item.py", "class": "Item" }]
//! }
//! ```
//!
//! Legacy `file` / `class_name` keys are accepted. Type and template are
//! always detected from the path.

use fastforge_core::{
    application::{ApplicationError, ports::SchemaParser},
    domain::{DEFAULT_PROJECT_NAME, ProjectSchema},
    error::ForgeResult,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::entry::{self, Entry};

#[derive(Debug, Deserialize)]
struct Document {
    architecture: Option<String>,
    project_name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    files: Vec<Value>,
}

/// Parser for `.json` schemas.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl JsonParser {
    pub fn new() -> Self {
        Self
    }
}

fn field<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| item.get(key).and_then(Value::as_str))
        .find(|value| !value.trim().is_empty())
}

impl SchemaParser for JsonParser {
    #[instrument(skip_all, fields(format = "json"))]
    fn parse(&self, source: &str) -> ForgeResult<ProjectSchema> {
        let document: Document =
            serde_json::from_str(source).map_err(|e| ApplicationError::MalformedSchema {
                format: "JSON",
                reason: e.to_string(),
            })?;

        let architecture = entry::architecture(document.architecture.as_deref())?;

        let mut files = Vec::with_capacity(document.files.len());
        for item in &document.files {
            if !item.is_object() {
                debug!(entry = %item, "Dropping non-object file entry");
                continue;
            }
            let raw = Entry {
                path: field(item, &["path", "file"]),
                class_name: field(item, &["class", "class_name"]),
                ..Entry::default()
            };
            if let Some(file) = raw.into_file(architecture, "")? {
                files.push(file);
            }
        }

        Ok(ProjectSchema::new(architecture)
            .with_files(files)
            .with_metadata(
                "name",
                document.project_name.as_deref().unwrap_or(DEFAULT_PROJECT_NAME),
            )
            .with_metadata("description", document.description.unwrap_or_default())
            .with_metadata("architecture", architecture.as_str()))
    }
}
