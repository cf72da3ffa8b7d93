//! Tree-drawing text schemas.
//!
//! ```text
//! blog/
//! ├── app/
//! │   ├── models/
//! │   │   └── post.py  # → Post
//! │   └── main.py      # → App
//! ```
//!
//! Every four indent glyphs is one nesting level. Directories end in `/`,
//! files carry their class after a `# →` (or `# ->`) annotation.

use std::sync::LazyLock;

use fastforge_core::{
    application::ports::SchemaParser,
    domain::{ProjectSchema, RelativePath, classify_file, infer_architecture},
    error::ForgeResult,
};
use regex::Regex;
use tracing::{debug, instrument};

const INDENT_WIDTH: usize = 4;

static INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[├└│─\s]*").expect("indent pattern is valid"));

static FILE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9_.-]+\.py)\s*#\s*(?:→|->)\s*([A-Za-z_]\w*)")
        .expect("file line pattern is valid")
});

/// Parser for `.txt` tree schemas.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedTextParser;

impl DelimitedTextParser {
    pub fn new() -> Self {
        Self
    }
}

/// A classified line of the tree.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Directory { level: usize, name: &'a str },
    File { level: usize, filename: &'a str, class_name: &'a str },
    Ignored,
}

fn classify_line(raw: &str) -> Line<'_> {
    if raw.trim().is_empty() {
        return Line::Ignored;
    }

    let indent = INDENT.find(raw).map_or("", |m| m.as_str());
    let level = indent.chars().count() / INDENT_WIDTH;
    let text = raw[indent.len()..].trim();

    if text.starts_with('#') && !text.contains(".py") {
        return Line::Ignored;
    }

    let head = text.split_once('#').map_or(text, |(head, _)| head).trim_end();
    if head.ends_with('/') {
        return Line::Directory {
            level,
            name: head.trim_end_matches('/'),
        };
    }

    match FILE_LINE.captures(text) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(filename), Some(class_name)) => Line::File {
                level,
                filename: filename.as_str(),
                class_name: class_name.as_str(),
            },
            _ => Line::Ignored,
        },
        None => {
            if text.contains(".py") {
                debug!(line = text, "Python file without class annotation, skipping");
            }
            Line::Ignored
        }
    }
}

/// Directories currently open, innermost last.
#[derive(Debug, Default)]
struct PathStack<'a> {
    entries: Vec<(usize, &'a str)>,
}

impl<'a> PathStack<'a> {
    /// Close every directory at or below `level`.
    fn unwind(&mut self, level: usize) {
        while self.entries.last().is_some_and(|(l, _)| *l >= level) {
            self.entries.pop();
        }
    }

    fn push(&mut self, level: usize, name: &'a str) {
        self.unwind(level);
        self.entries.push((level, name));
    }

    fn join(&self, filename: &str) -> String {
        self.entries
            .iter()
            .map(|(_, name)| *name)
            .chain(std::iter::once(filename))
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl SchemaParser for DelimitedTextParser {
    #[instrument(skip_all, fields(format = "txt"))]
    fn parse(&self, source: &str) -> ForgeResult<ProjectSchema> {
        let mut stack = PathStack::default();
        let mut roots: Vec<&str> = Vec::new();
        let mut declared = Vec::new();

        for raw in source.lines() {
            match classify_line(raw) {
                Line::Directory { level, name } => {
                    if level == 0 && !roots.contains(&name) {
                        roots.push(name);
                    }
                    stack.push(level, name);
                }
                Line::File {
                    level,
                    filename,
                    class_name,
                } => {
                    stack.unwind(level);
                    declared.push((RelativePath::normalize(&stack.join(filename)), class_name));
                }
                Line::Ignored => {}
            }
        }

        let architecture = infer_architecture(declared.iter().map(|(path, _)| path.as_str()));
        debug!(files = declared.len(), %architecture, "Parsed tree schema");

        let files = declared
            .iter()
            .map(|(path, class_name)| classify_file(path, class_name, architecture))
            .collect::<Result<Vec<_>, _>>()?;

        let mut schema = ProjectSchema::new(architecture)
            .with_files(files)
            .with_metadata("name", "Generated from TXT")
            .with_metadata("description", "Generated from a tree schema")
            .with_metadata("architecture", architecture.as_str());
        if let Some(root_dir) = enclosing_root(&roots, &declared) {
            schema = schema.with_metadata("root_dir", root_dir);
        }

        Ok(schema)
    }
}

/// The single top-level directory that contains every declared file, if any.
fn enclosing_root(roots: &[&str], declared: &[(String, &str)]) -> Option<String> {
    let [root] = roots else {
        return None;
    };
    let root = RelativePath::normalize(root);
    if root.is_empty() {
        return None;
    }
    let prefix = format!("{root}/");
    declared
        .iter()
        .all(|(path, _)| path.starts_with(&prefix))
        .then_some(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastforge_core::domain::{Architecture, FileType};

    fn parse(source: &str) -> ProjectSchema {
        DelimitedTextParser::new().parse(source).unwrap()
    }

    fn paths(schema: &ProjectSchema) -> Vec<&str> {
        schema.files.iter().map(|f| f.path().as_str()).collect()
    }

    // ========================================================================
    // Line Classification Tests
    // ========================================================================

    #[test]
    fn indent_counts_glyphs_not_bytes() {
        assert_eq!(
            classify_line("│   └── user.py  # → User"),
            Line::File {
                level: 2,
                filename: "user.py",
                class_name: "User"
            }
        );
    }

    #[test]
    fn directory_with_trailing_comment() {
        assert_eq!(
            classify_line("├── models/   # ORM layer"),
            Line::Directory {
                level: 1,
                name: "models"
            }
        );
    }

    #[test]
    fn comments_and_unannotated_files_are_ignored() {
        assert_eq!(classify_line("# project layout"), Line::Ignored);
        assert_eq!(classify_line("├── helpers.py"), Line::Ignored);
        assert_eq!(classify_line("   "), Line::Ignored);
        assert_eq!(classify_line("├── README.md"), Line::Ignored);
    }

    #[test]
    fn ascii_arrow_is_accepted() {
        assert_eq!(
            classify_line("crud.py # -> ItemCRUD"),
            Line::File {
                level: 0,
                filename: "crud.py",
                class_name: "ItemCRUD"
            }
        );
    }

    // ========================================================================
    // Parser Tests
    // ========================================================================

    #[test]
    fn nested_tree_builds_full_paths() {
        let schema = parse(
            "blog/\n\
             ├── app/\n\
             │   ├── models/\n\
             │   │   └── post.py  # → Post\n\
             │   ├── services/\n\
             │   │   └── post_service.py  # → PostService\n\
             │   ├── repositories/\n\
             │   │   └── post_repository.py  # → PostRepository\n\
             │   └── main.py  # → App\n",
        );

        assert_eq!(
            paths(&schema),
            vec![
                "blog/app/models/post.py",
                "blog/app/services/post_service.py",
                "blog/app/repositories/post_repository.py",
                "blog/app/main.py",
            ]
        );
        assert_eq!(schema.architecture, Architecture::Layered);
        assert_eq!(schema.root_dir(), "blog");
        assert_eq!(schema.project_name(), "Generated from TXT");
        assert_eq!(schema.files[3].file_type(), FileType::Main);
    }

    #[test]
    fn several_top_level_directories_leave_root_unset() {
        let schema = parse(
            "app/\n\
             └── api/\n\
             \x20   └── v1/\n\
             \x20       └── endpoints/\n\
             \x20           └── users.py  # → UsersRouter\n\
             scripts/\n\
             └── seed.py  # → Seeder\n",
        );

        assert_eq!(
            paths(&schema),
            vec!["app/api/v1/endpoints/users.py", "scripts/seed.py"]
        );
        assert_eq!(schema.architecture, Architecture::Layered);
        assert_eq!(schema.root_dir(), "");
    }

    #[test]
    fn top_level_file_outside_root_leaves_root_unset() {
        let schema = parse("app/\n└── models/\n    └── user.py  # → User\nmanage.py  # → Manage\n");
        assert_eq!(paths(&schema), vec!["app/models/user.py", "manage.py"]);
        assert_eq!(schema.root_dir(), "");
    }

    #[test]
    fn clean_paths_get_clean_templates() {
        let schema = parse(
            "src/\n\
             ├── domain/\n\
             │   └── entities/\n\
             │       └── order.py  # → Order\n\
             └── application/\n\
             \x20   └── use_cases/\n\
             \x20       └── create_order.py  # → CreateOrder\n",
        );

        assert_eq!(schema.architecture, Architecture::Clean);
        assert_eq!(
            paths(&schema),
            vec![
                "src/domain/entities/order.py",
                "src/application/use_cases/create_order.py"
            ]
        );
        assert_eq!(schema.files[0].template().as_str(), "domain_entity");
        assert_eq!(schema.files[1].template().as_str(), "use_case");
    }

    #[test]
    fn flat_tree_without_root_is_modular() {
        let schema = parse(
            "app/\n\
             ├── models/\n\
             │   └── item.py  # → Item\n\
             └── routers/\n\
             \x20   └── items.py  # → ItemRouter\n",
        );

        assert_eq!(schema.architecture, Architecture::Modular);
        assert_eq!(paths(&schema), vec!["app/models/item.py", "app/routers/items.py"]);
        assert_eq!(schema.files[1].file_type(), FileType::Router);
    }

    #[test]
    fn sibling_directory_closes_previous_branch() {
        let schema = parse(
            "app/\n\
             ├── models/\n\
             │   └── user.py  # → User\n\
             ├── schemas/\n\
             │   └── user.py  # → UserSchema\n\
             └── config.py  # → Settings\n",
        );

        assert_eq!(
            paths(&schema),
            vec!["app/models/user.py", "app/schemas/user.py", "app/config.py"]
        );
    }

    #[test]
    fn invalid_path_is_fatal() {
        let result = DelimitedTextParser::new().parse("../\n└── escape.py  # → Escape\n");
        assert!(result.is_err());
    }

    #[test]
    fn nothing_recognised_yields_empty_schema() {
        let schema = parse("# just a comment\n\nREADME.md\n");
        assert!(schema.is_empty());
        assert!(schema.validate().is_err());
    }
}
