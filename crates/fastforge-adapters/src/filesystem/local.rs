//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use fastforge_core::{
    application::ports::Filesystem,
    error::{ForgeError, ForgeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ForgeError {
    ForgeError::filesystem(path, format!("Failed to {operation}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_does_not_create_parents() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let nested = dir.path().join("app/models/user.py");
        let err = fs.write_file(&nested, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));

        fs.create_dir_all(nested.parent().unwrap()).unwrap();
        fs.write_file(&nested, "class User: ...\n").unwrap();
        assert_eq!(std::fs::read_to_string(&nested).unwrap(), "class User: ...\n");
    }

    #[test]
    fn remove_dir_all_clears_tree() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let root = dir.path().join("out");

        fs.create_dir_all(&root.join("app")).unwrap();
        fs.write_file(&root.join("app/__init__.py"), "").unwrap();
        assert!(fs.exists(&root));

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }
}
