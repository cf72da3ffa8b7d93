use std::collections::BTreeSet;

use crate::domain::entities::project_file::ProjectFile;

pub const PACKAGE_MARKER: &str = "__init__.py";

/// Directories a project needs before any file is rendered.
///
/// Exactly the proper ancestors of every declared file path: no extras, no
/// omissions, no duplicates. Order-independent by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructurePlan {
    directories: BTreeSet<String>,
}

impl StructurePlan {
    pub fn from_files<'a>(files: impl IntoIterator<Item = &'a ProjectFile>) -> Self {
        let directories = files
            .into_iter()
            .flat_map(|f| f.path().ancestors())
            .map(str::to_string)
            .collect();
        Self { directories }
    }

    /// Directories, shallowest first within each branch.
    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.directories.iter().map(String::as_str)
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// One package marker per directory.
    pub fn markers(&self) -> impl Iterator<Item = PackageMarker> + '_ {
        self.directories().map(PackageMarker::for_dir)
    }
}

/// An `__init__.py` for a single directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMarker {
    pub path: String,
    pub content: String,
}

impl PackageMarker {
    pub fn for_dir(dir: &str) -> Self {
        let path = format!("{dir}/{PACKAGE_MARKER}");
        Self {
            content: format!("# {path}\n"),
            path,
        }
    }
}
