//! YAML schemas.
//!
//! ```yaml
//! metadata:
//!   name: Blog
//!   architecture: layered
//! structure:
//!   root_dir: blog
//!   files:
//!     - path: app/models/post.py
//!       class: Post
//!     - path: app/core/helpers.py
//!       class: Helpers
//!       type: util
//!       template: default
//! ```

use std::collections::BTreeMap;

use fastforge_core::{
    application::{ApplicationError, ports::SchemaParser},
    domain::{ProjectSchema, RelativePath},
    error::ForgeResult,
};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use tracing::{debug, instrument};

use super::entry::{self, Entry};

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    metadata: Mapping,
    #[serde(default)]
    structure: Structure,
}

#[derive(Debug, Default, Deserialize)]
struct Structure {
    #[serde(default)]
    root_dir: Option<String>,
    #[serde(default)]
    files: Vec<Value>,
}

/// Parser for `.yaml` / `.yml` schemas.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl YamlParser {
    pub fn new() -> Self {
        Self
    }
}

/// Scalar metadata values as strings; nested values are dropped.
fn scalar_metadata(metadata: &Mapping) -> BTreeMap<String, String> {
    metadata
        .iter()
        .filter_map(|(key, value)| {
            let key = key.as_str()?;
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.to_string(), value))
        })
        .collect()
}

fn text<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str)
}

impl SchemaParser for YamlParser {
    #[instrument(skip_all, fields(format = "yaml"))]
    fn parse(&self, source: &str) -> ForgeResult<ProjectSchema> {
        let document: Document =
            serde_yaml::from_str(source).map_err(|e| ApplicationError::MalformedSchema {
                format: "YAML",
                reason: e.to_string(),
            })?;

        let mut metadata = scalar_metadata(&document.metadata);
        let architecture = entry::architecture(metadata.get("architecture").map(String::as_str))?;
        metadata.insert("architecture".into(), architecture.as_str().into());

        let root_dir = RelativePath::normalize(document.structure.root_dir.as_deref().unwrap_or(""));
        if !root_dir.is_empty() {
            metadata.insert("root_dir".into(), root_dir.clone());
        }

        let mut files = Vec::with_capacity(document.structure.files.len());
        for item in &document.structure.files {
            if !item.is_mapping() {
                debug!(entry = ?item, "Dropping non-mapping file entry");
                continue;
            }
            let raw = Entry {
                path: text(item, "path"),
                class_name: text(item, "class"),
                file_type: text(item, "type"),
                template: text(item, "template"),
            };
            if let Some(file) = raw.into_file(architecture, &root_dir)? {
                files.push(file);
            }
        }

        let mut schema = ProjectSchema::new(architecture).with_files(files);
        schema.metadata = metadata;
        Ok(schema)
    }
}
