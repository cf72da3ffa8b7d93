use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;

/// A normalized, project-relative file path.
///
/// Invariant: forward slashes only, no empty or `.` segments, no `..`
/// segments, never absolute, never empty. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RelativePath(String);

impl RelativePath {
    /// Normalize a raw path string without validating it.
    ///
    /// Backslashes become `/`, empty and `.` segments are dropped.
    /// Idempotent: normalizing a normalized path returns it unchanged.
    pub fn normalize(raw: &str) -> String {
        raw.replace('\\', "/")
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Fallible constructor.
    pub fn try_new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if is_absolute(trimmed) {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: trimmed.to_string(),
            });
        }

        let normalized = Self::normalize(trimmed);
        if normalized.is_empty() {
            return Err(DomainError::EmptyPath);
        }
        if normalized.split('/').any(|segment| segment == "..") {
            return Err(DomainError::PathEscapesRoot { path: normalized });
        }

        Ok(Self(normalized))
    }

    /// Prefix this path with `root`, unless it already starts with it.
    pub fn prefixed(&self, root: &str) -> Result<Self, DomainError> {
        let root = Self::normalize(root);
        if root.is_empty() || self.starts_with_dir(&root) {
            return Ok(self.clone());
        }
        Self::try_new(&format!("{root}/{}", self.0))
    }

    /// True if the first segments of this path equal `dir`.
    pub fn starts_with_dir(&self, dir: &str) -> bool {
        self.0 == dir
            || self
                .0
                .strip_prefix(dir)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Everything before the last segment, `None` for top-level files.
    pub fn parent(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(parent, _)| parent)
    }

    /// Every proper ancestor directory, shallowest first.
    ///
    /// `a/b/c.py` yields `a` then `a/b`.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        self.0
            .match_indices('/')
            .map(move |(idx, _)| &self.0[..idx])
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_absolute(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    raw.starts_with('/')
        || raw.starts_with('\\')
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}
