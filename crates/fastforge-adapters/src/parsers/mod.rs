//! Schema parsers.
//!
//! Three input formats produce the same [`ProjectSchema`]. The format is
//! chosen by file extension.

mod delimited;
mod entry;
mod json;
mod yaml;

use std::{fmt, path::Path};

use fastforge_core::{
    application::{ApplicationError, ports::SchemaParser},
    domain::ProjectSchema,
    error::ForgeResult,
};
use tracing::{info, instrument};

pub use delimited::DelimitedTextParser;
pub use json::JsonParser;
pub use yaml::YamlParser;

/// Supported schema formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// `.txt` tree drawing
    DelimitedText,
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl SchemaFormat {
    pub const ALL: [SchemaFormat; 3] = [Self::DelimitedText, Self::Json, Self::Yaml];

    /// Select a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "txt" => Some(Self::DelimitedText),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DelimitedText => "txt",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Parse `source` with this format's parser.
    pub fn parse(&self, source: &str) -> ForgeResult<ProjectSchema> {
        match self {
            Self::DelimitedText => DelimitedTextParser::new().parse(source),
            Self::Json => JsonParser::new().parse(source),
            Self::Yaml => YamlParser::new().parse(source),
        }
    }
}

impl fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read, parse and validate a schema file.
///
/// Fails before anything is generated if the file is missing, has an
/// unsupported extension, is malformed, or declares no usable files.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_schema(path: &Path) -> ForgeResult<ProjectSchema> {
    if !path.is_file() {
        return Err(ApplicationError::SchemaNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let format = SchemaFormat::from_path(path).ok_or_else(|| {
        ApplicationError::UnsupportedSchemaFormat {
            path: path.to_path_buf(),
        }
    })?;

    let source = std::fs::read_to_string(path).map_err(|e| ApplicationError::SchemaRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let schema = format.parse(&source)?;
    schema.validate()?;

    info!(
        %format,
        architecture = %schema.architecture,
        files = schema.files.len(),
        "Schema loaded"
    );
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_follows_extension() {
        let cases = [
            ("tree.txt", Some(SchemaFormat::DelimitedText)),
            ("schema.JSON", Some(SchemaFormat::Json)),
            ("schema.yaml", Some(SchemaFormat::Yaml)),
            ("schema.yml", Some(SchemaFormat::Yaml)),
            ("schema.toml", None),
            ("schema", None),
        ];
        for (name, expected) in cases {
            assert_eq!(SchemaFormat::from_path(Path::new(name)), expected, "{name}");
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_schema(&PathBuf::from("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("Schema file not found"));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.toml");
        std::fs::write(&path, "x = 1").unwrap();

        let err = load_schema(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported schema format"));
    }

    #[test]
    fn schema_without_files_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, r#"{"files": [{"path": "app/main.py"}]}"#).unwrap();

        let err = load_schema(&path).unwrap_err();
        assert!(err.to_string().contains("no valid files"));
    }

    #[test]
    fn loads_each_format_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let sources = [
            ("s.txt", "app/\n└── main.py  # → App\n"),
            ("s.json", r#"{"files": [{"path": "app/main.py", "class": "App"}]}"#),
            ("s.yml", "structure:\n  files:\n    - path: app/main.py\n      class: App\n"),
        ];

        for (name, source) in sources {
            let path = dir.path().join(name);
            std::fs::write(&path, source).unwrap();
            let schema = load_schema(&path).unwrap();
            assert_eq!(schema.files[0].path().as_str(), "app/main.py", "{name}");
        }
    }
}
