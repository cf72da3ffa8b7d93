//! Domain value objects: Architecture, FileType, TemplateKey.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! They hold NO classification logic. Path inspection and template mapping
//! live in `classifier.rs`. This file's only job is to define the types,
//! their string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

// ── Architecture ─────────────────────────────────────────────────────────────

/// A supported project layout.
///
/// Selects the template set and directory conventions used for generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    #[default]
    Layered,
    Clean,
    Modular,
}

impl Architecture {
    pub const ALL: [Architecture; 3] = [Self::Layered, Self::Clean, Self::Modular];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Layered => "layered",
            Self::Clean => "clean",
            Self::Modular => "modular",
        }
    }

    /// Root entry point written next to the schema files, if the
    /// architecture has one.
    pub const fn entry_point(&self) -> Option<&'static str> {
        match self {
            Self::Layered => Some("app/main.py"),
            Self::Clean => Some("src/main.py"),
            Self::Modular => None,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "layered" => Ok(Self::Layered),
            "clean" => Ok(Self::Clean),
            "modular" => Ok(Self::Modular),
            _ => Err(DomainError::InvalidArchitecture { value: s.into() }),
        }
    }
}

// ── FileType ─────────────────────────────────────────────────────────────────

/// Semantic role of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Model,
    Schema,
    Service,
    Repository,
    Router,
    UseCase,
    Config,
    Database,
    Main,
    Package,
    Crud,
    Util,
    Test,
    Default,
}

impl FileType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Schema => "schema",
            Self::Service => "service",
            Self::Repository => "repository",
            Self::Router => "router",
            Self::UseCase => "use_case",
            Self::Config => "config",
            Self::Database => "database",
            Self::Main => "main",
            Self::Package => "package",
            Self::Crud => "crud",
            Self::Util => "util",
            Self::Test => "test",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "model" => Ok(Self::Model),
            "schema" => Ok(Self::Schema),
            "service" => Ok(Self::Service),
            "repository" => Ok(Self::Repository),
            "router" => Ok(Self::Router),
            "use_case" | "use-case" | "usecase" => Ok(Self::UseCase),
            "config" => Ok(Self::Config),
            "database" => Ok(Self::Database),
            "main" => Ok(Self::Main),
            "package" => Ok(Self::Package),
            "crud" => Ok(Self::Crud),
            "util" => Ok(Self::Util),
            "test" => Ok(Self::Test),
            "default" => Ok(Self::Default),
            _ => Err(DomainError::UnknownFileType { value: s.into() }),
        }
    }
}

// ── TemplateKey ──────────────────────────────────────────────────────────────

/// Identifier of a template body within an architecture's template set.
///
/// Open-ended: keys like `domain_entity` or `api_router` have no `FileType`
/// counterpart, and schema documents may name any key explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TemplateKey(Cow<'static, str>);

impl TemplateKey {
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    pub fn new(key: impl Into<String>) -> Self {
        Self(Cow::Owned(key.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<FileType> for TemplateKey {
    fn from(file_type: FileType) -> Self {
        Self::from_static(file_type.as_str())
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architecture_parses_case_insensitively() {
        assert_eq!("Clean".parse::<Architecture>().unwrap(), Architecture::Clean);
        assert_eq!(" modular ".parse::<Architecture>().unwrap(), Architecture::Modular);
        assert!(matches!(
            "hexagonal".parse::<Architecture>(),
            Err(DomainError::InvalidArchitecture { .. })
        ));
    }

    #[test]
    fn architecture_entry_points() {
        assert_eq!(Architecture::Layered.entry_point(), Some("app/main.py"));
        assert_eq!(Architecture::Clean.entry_point(), Some("src/main.py"));
        assert_eq!(Architecture::Modular.entry_point(), None);
    }

    #[test]
    fn file_type_round_trips_through_str() {
        for ty in [
            FileType::Model,
            FileType::UseCase,
            FileType::Package,
            FileType::Default,
        ] {
            assert_eq!(ty.as_str().parse::<FileType>().unwrap(), ty);
        }
        assert!("widget".parse::<FileType>().is_err());
    }

    #[test]
    fn template_key_from_file_type_is_identity() {
        assert_eq!(TemplateKey::from(FileType::Router).as_str(), "router");
        assert_eq!(TemplateKey::new("api_router"), TemplateKey::from_static("api_router"));
    }
}
