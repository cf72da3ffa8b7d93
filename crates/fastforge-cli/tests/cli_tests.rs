//! Integration tests for the fastforge binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const BLOG_SCHEMA: &str = "app/\n\
├── models/\n\
│   └── post.py  # → Post\n\
├── services/\n\
│   └── post_service.py  # → PostService\n\
└── routers/\n\
\x20   └── posts.py  # → PostsRouter\n";

/// A command running inside `dir`, isolated from the user's config and env.
fn fastforge(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("fastforge");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("FASTFORGE_GENERATION__OUTPUT")
        .env_remove("FASTFORGE_GENERATION__WITH_TESTS")
        .env_remove("FASTFORGE_OUTPUT__FORMAT");
    cmd
}

fn workspace_with_schema(name: &str, body: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(name), body).unwrap();
    temp
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_generation_flags() {
    let temp = TempDir::new().unwrap();
    fastforge(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--zip-only"))
        .stdout(predicate::str::contains("--with-tests"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    fastforge(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    fastforge(temp.path()).assert().failure().code(2);
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn generates_project_in_default_directory() {
    let temp = workspace_with_schema("blog.txt", BLOG_SCHEMA);

    fastforge(temp.path())
        .args(["--input", "blog.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Architecture: modular"))
        .stdout(predicate::str::contains("Next steps:"));

    let root = temp.path().join("fastapi_project");
    let model = fs::read_to_string(root.join("app/models/post.py")).unwrap();
    assert!(model.contains("class Post(Base):"));
    assert!(root.join("app/__init__.py").is_file());
    assert!(root.join("pyproject.toml").is_file());
}

#[test]
fn previous_output_is_replaced() {
    let temp = workspace_with_schema("blog.txt", BLOG_SCHEMA);
    let stale = temp.path().join("blog_api/stale.py");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "# left over").unwrap();

    fastforge(temp.path())
        .args(["-i", "blog.txt", "-o", "blog_api"])
        .assert()
        .success();

    assert!(!stale.exists());
    assert!(temp.path().join("blog_api/app/models/post.py").is_file());
}

#[test]
fn no_init_and_with_tests_flags() {
    let temp = workspace_with_schema("blog.txt", BLOG_SCHEMA);

    fastforge(temp.path())
        .args(["-i", "blog.txt", "-o", "out", "--no-init", "--with-tests"])
        .assert()
        .success();

    let root = temp.path().join("out");
    assert!(!root.join("app/__init__.py").exists());
    assert!(root.join("tests/app/models/test_post.py").is_file());
}

#[test]
fn zip_only_leaves_just_the_archive() {
    let temp = workspace_with_schema("blog.txt", BLOG_SCHEMA);

    fastforge(temp.path())
        .args(["-i", "blog.txt", "-o", "blog", "--zip-only"])
        .assert()
        .success();

    assert!(!temp.path().join("blog").exists());
    let archive = zip::ZipArchive::new(fs::File::open(temp.path().join("blog.zip")).unwrap())
        .unwrap();
    let names: Vec<&str> = archive.file_names().collect();
    assert!(names.contains(&"blog/app/models/post.py"), "{names:?}");
}

#[test]
fn json_output_is_a_single_document() {
    let temp = workspace_with_schema(
        "shop.json",
        r#"{"architecture": "clean", "project_name": "shop", "files": [
            {"path": "src/domain/entities/order.py", "class": "Order"}
        ]}"#,
    );

    let assert = fastforge(temp.path())
        .args(["-i", "shop.json", "-o", "shop", "--zip", "--output-format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["project_name"], "shop");
    assert_eq!(report["architecture"], "clean");
    assert_eq!(report["statistics"]["entities"], 1);
    assert_eq!(report["tree_removed"], false);
    assert!(report["archive"].as_str().unwrap().ends_with("shop.zip"));
}

#[test]
fn config_file_supplies_defaults() {
    let temp = workspace_with_schema("blog.txt", BLOG_SCHEMA);
    let config = temp.path().join("fastforge.toml");
    fs::write(&config, "[generation]\noutput = \"from_config\"\nwith_tests = true\n").unwrap();

    fastforge(temp.path())
        .args(["-c", "fastforge.toml", "-i", "blog.txt"])
        .assert()
        .success();

    let root = temp.path().join("from_config");
    assert!(root.join("tests/app/services/test_post_service.py").is_file());
}

// ============================================================================
// Errors and Exit Codes
// ============================================================================

#[test]
fn missing_schema_exits_not_found() {
    let temp = TempDir::new().unwrap();
    fastforge(temp.path())
        .args(["-i", "nope.txt"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn unsupported_extension_exits_user_error() {
    let temp = workspace_with_schema("schema.toml", "files = []\n");
    fastforge(temp.path())
        .args(["-i", "schema.toml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn empty_schema_does_not_touch_existing_output() {
    let temp = workspace_with_schema("empty.json", r#"{"files": []}"#);
    let keep = temp.path().join("fastapi_project/keep.py");
    fs::create_dir_all(keep.parent().unwrap()).unwrap();
    fs::write(&keep, "# keep").unwrap();

    fastforge(temp.path())
        .args(["-i", "empty.json"])
        .assert()
        .failure()
        .code(2);

    assert!(keep.is_file());
}

#[test]
fn missing_explicit_config_exits_configuration_error() {
    let temp = workspace_with_schema("blog.txt", BLOG_SCHEMA);
    fastforge(temp.path())
        .args(["-c", "absent.toml", "-i", "blog.txt"])
        .assert()
        .failure()
        .code(4);
}

// ============================================================================
// Subcommands
// ============================================================================

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    fastforge(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fastforge"));
}

#[test]
fn config_init_then_show() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("conf/fastforge.toml");
    let path_arg = path.to_str().unwrap();

    fastforge(temp.path())
        .args(["config", "init", "-c", path_arg])
        .assert()
        .success();
    assert!(path.is_file());

    fastforge(temp.path())
        .args(["config", "init", "-c", path_arg])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    fastforge(temp.path())
        .args(["config", "show", "-c", path_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("output = \"fastapi_project\""));

    fastforge(temp.path())
        .args(["config", "path", "-c", path_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("fastforge.toml"));
}
