use std::collections::HashSet;

use crate::domain::{entities::project_file::ProjectFile, value_objects::Architecture};

/// Filenames that never get a test stub.
const SKIPPED_FILENAMES: &[&str] = &[
    "config.py",
    "settings.py",
    "database.py",
    "main.py",
    "conftest.py",
    "env.py",
    "alembic.ini",
    "pyproject.toml",
];

/// A pytest skeleton for one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestStub {
    pub path: String,
    pub content: String,
}

impl TestStub {
    /// Stubs for every eligible file, deduplicated by source path, in
    /// declaration order.
    pub fn plan(files: &[ProjectFile], architecture: Architecture) -> Vec<TestStub> {
        let mut seen = HashSet::new();
        files
            .iter()
            .filter(|f| is_testable(f))
            .filter(|f| seen.insert(f.path().as_str()))
            .map(|f| Self::for_file(f, architecture))
            .collect()
    }

    pub fn for_file(file: &ProjectFile, architecture: Architecture) -> Self {
        let segments = source_segments(file, architecture);
        let (name, parents) = segments
            .split_last()
            .map_or((file.filename(), &[][..]), |(name, parents)| (*name, parents));

        let mut path = String::from("tests/");
        if architecture == Architecture::Clean {
            path.push_str("src/");
        }
        for dir in parents {
            path.push_str(dir);
            path.push('/');
        }
        path.push_str("test_");
        path.push_str(name);

        let import_path = segments.join(".");
        let import_path = import_path.strip_suffix(".py").unwrap_or(&import_path);
        let content = render_stub(&path, import_path, file);

        Self { path, content }
    }
}

fn is_testable(file: &ProjectFile) -> bool {
    let name = file.filename();
    let under_tests = file.path().segments().any(|s| s.eq_ignore_ascii_case("tests"));

    name != "__init__.py"
        && !under_tests
        && !name.starts_with("test_")
        && !SKIPPED_FILENAMES.contains(&name)
}

/// Path segments used for both the stub location and the import line.
/// Clean projects drop their leading `src`.
fn source_segments(file: &ProjectFile, architecture: Architecture) -> Vec<&str> {
    let mut segments: Vec<&str> = file.path().segments().collect();
    if architecture == Architecture::Clean && segments.len() > 1 && segments[0] == "src" {
        segments.remove(0);
    }
    segments
}

fn render_stub(test_path: &str, import_path: &str, file: &ProjectFile) -> String {
    let class_name = file.class_name();
    let module_name = file.module_name();
    format!(
        r#"# {test_path}

from {import_path} import {class_name}
import pytest


class Test{class_name}:
    """Tests for {class_name}."""

    def test_{module_name}_creation(self):
        """{class_name} can be created."""
        assert True

    def test_{module_name}_methods(self):
        """{class_name} methods behave."""
        assert True


def test_{module_name}_function():
    """Module-level checks for {class_name}."""
    assert True
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FileType;

    fn file(path: &str, class_name: &str) -> ProjectFile {
        ProjectFile::new(path, class_name, FileType::Model, FileType::Model.into()).unwrap()
    }

    #[test]
    fn layered_stub_mirrors_source_tree() {
        let stub = TestStub::for_file(&file("app/models/user.py", "User"), Architecture::Layered);
        assert_eq!(stub.path, "tests/app/models/test_user.py");
        assert!(stub.content.starts_with("# tests/app/models/test_user.py\n"));
        assert!(stub.content.contains("from app.models.user import User"));
        assert!(stub.content.contains("class TestUser:"));
        assert!(stub.content.contains("def test_user_creation(self):"));
    }

    #[test]
    fn clean_stub_drops_leading_src() {
        let stub = TestStub::for_file(
            &file("src/domain/entities/order.py", "Order"),
            Architecture::Clean,
        );
        assert_eq!(stub.path, "tests/src/domain/entities/test_order.py");
        assert!(stub.content.contains("from domain.entities.order import Order"));
    }

    #[test]
    fn top_level_file_stub() {
        let stub = TestStub::for_file(&file("worker.py", "Worker"), Architecture::Modular);
        assert_eq!(stub.path, "tests/test_worker.py");
        assert!(stub.content.contains("from worker import Worker"));
    }

    #[test]
    fn plan_skips_ineligible_and_duplicate_files() {
        let files = vec![
            file("app/models/user.py", "User"),
            file("app/models/__init__.py", "Pkg"),
            file("app/main.py", "App"),
            file("app/core/config.py", "Settings"),
            file("tests/test_user.py", "TestUser"),
            file("app/test_helpers.py", "Helpers"),
            file("app/models/user.py", "User"),
        ];
        let stubs = TestStub::plan(&files, Architecture::Layered);

        let paths: Vec<_> = stubs.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, vec!["tests/app/models/test_user.py"]);
    }
}
