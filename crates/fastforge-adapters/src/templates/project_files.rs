//! Project-level files written next to the schema's tree.

use fastforge_core::domain::{Architecture, ProjectIdentity, SupportFile};

pub fn support_files(architecture: Architecture, identity: &ProjectIdentity) -> Vec<SupportFile> {
    let mut files = vec![
        SupportFile::overwrite("pyproject.toml", pyproject(architecture, identity)),
        SupportFile::overwrite("README.md", readme(architecture, identity)),
        SupportFile::overwrite("ruff.toml", RUFF_TOML),
        SupportFile::overwrite(".gitignore", GITIGNORE),
        SupportFile::overwrite(".editorconfig", EDITORCONFIG),
    ];

    if let Some(path) = architecture.entry_point() {
        files.push(SupportFile::entry_point(path, entry_point(architecture, identity)));
    }

    files
}

fn pyproject(architecture: Architecture, identity: &ProjectIdentity) -> String {
    format!(
        r#"[project]
name = "{slug}"
version = "0.1.0"
description = "FastAPI project with {architecture} architecture"
readme = "README.md"
requires-python = ">=3.12"
dependencies = [
    "fastapi[standard]>=0.110.0",
    "uvicorn>=0.27.0",
    "sqlalchemy>=2.0.0",
    "pydantic>=2.0.0",
    "pydantic-settings>=2.0.0",
]

[dependency-groups]
dev = [
    "pytest>=8.0.0",
    "ruff>=0.14.0",
]
"#,
        slug = identity.slug,
    )
}

fn readme(architecture: Architecture, identity: &ProjectIdentity) -> String {
    format!(
        r#"# {name}

FastAPI project with {architecture} architecture.

## Quick Start

```bash
uv sync
uv run fastapi dev
```

## Architecture

```
{diagram}```
"#,
        name = identity.dir_name,
        diagram = diagram(architecture),
    )
}

fn diagram(architecture: Architecture) -> &'static str {
    match architecture {
        Architecture::Layered => {
            "project/
├── app/
│   ├── api/v1/endpoints/
│   ├── core/
│   ├── models/
│   ├── schemas/
│   ├── services/
│   ├── repositories/
│   └── db/
├── tests/
└── pyproject.toml
"
        }
        Architecture::Clean => {
            "project/
├── src/
│   ├── domain/entities/
│   ├── domain/repositories/
│   ├── application/use_cases/
│   ├── infrastructure/database/
│   ├── infrastructure/web/
│   └── interface_adapters/
├── tests/
└── pyproject.toml
"
        }
        Architecture::Modular => {
            "project/
├── app/
│   ├── routers/
│   ├── models/
│   ├── schemas/
│   ├── crud/
│   └── dependencies/
├── tests/
└── pyproject.toml
"
        }
    }
}

fn entry_point(architecture: Architecture, identity: &ProjectIdentity) -> String {
    format!(
        r#"from fastapi import FastAPI

app = FastAPI(title="{slug}")


@app.get("/")
def read_root():
    return {{"message": "FastAPI with {architecture} architecture"}}
"#,
        slug = identity.slug,
    )
}

const RUFF_TOML: &str = r#"exclude = [
    ".git",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
    ".venv",
    "__pypackages__",
    "build",
    "dist",
    "venv",
    "migrations",
]

line-length = 120
target-version = "py312"

[lint]
preview = true
select = ["A", "B", "C", "E", "F", "I", "W", "UP", "PL", "RET", "COM"]
fixable = ["E", "F401", "I", "W", "COM"]
unfixable = ["A", "B", "C", "PL", "RET", "UP"]
ignore = ["RET501", "RET504", "B904", "UP031", "PLR6301", "PLC0415", "B008", "COM812"]
dummy-variable-rgx = "^(_+|(_+[a-zA-Z0-9_]*[a-zA-Z0-9]+?))$"

[lint.mccabe]
max-complexity = 7

[lint.pylint]
max-args = 6
max-branches = 10
max-statements = 50

[lint.per-file-ignores]
"**/__init__.py" = ["F401"]
"**/test*.py" = ["PLR2004", "PLR0913", "PLR0915", "C901"]

[lint.isort]
combine-as-imports = true
relative-imports-order = "closest-to-furthest"
"#;

const GITIGNORE: &str = r#"# Byte-compiled / optimized files
__pycache__/
*.py[cod]
*$py.class

# Distribution / packaging
build/
dist/
*.egg-info/
.eggs/

# Test / coverage reports
htmlcov/
.coverage
.coverage.*
.pytest_cache/
.hypothesis/

# Environments
.env
.venv
env/
venv/

# Tooling caches
.mypy_cache/
.ruff_cache/
.uv/

# Editors and OS files
.vscode/
.idea/
*.swp
.DS_Store
Thumbs.db

# Local databases and runtime files
*.db
*.sqlite
*.sqlite3
*.log
uploads/
temp/
"#;

const EDITORCONFIG: &str = r#"# https://editorconfig.org
root = true

[*]
end_of_line = lf
insert_final_newline = true
trim_trailing_whitespace = true
charset = utf-8
indent_style = space

[*.{js,html,css,scss,toml,yaml,yml}]
indent_size = 2

[*.py]
indent_size = 4

[{Makefile,**.mk}]
indent_style = tab
"#;
