//! File-type classification, template mapping and architecture inference.
//!
//! Every rule lives in a static table so priority order is visible at a
//! glance and shared by all parsers and the generation service.

use crate::domain::value_objects::{Architecture, FileType, TemplateKey};

// ── Rule tables ──────────────────────────────────────────────────────────────

/// Exact filename matches (case-insensitive). Checked before segment rules.
const FILENAME_RULES: &[(&str, FileType)] = &[
    ("__init__.py", FileType::Package),
    ("main.py", FileType::Main),
    ("config.py", FileType::Config),
    ("settings.py", FileType::Config),
    ("database.py", FileType::Database),
    ("db.py", FileType::Database),
];

/// Substring matches against the whole lowercased path. First row wins.
const SEGMENT_RULES: &[(&[&str], FileType)] = &[
    (&["model", "entity"], FileType::Model),
    (&["schema", "dto"], FileType::Schema),
    (&["service", "use_case"], FileType::Service),
    (&["repository"], FileType::Repository),
    (&["router", "endpoint"], FileType::Router),
    (&["crud"], FileType::Crud),
    (&["test"], FileType::Test),
    (&["util", "helper"], FileType::Util),
];

const FALLBACK_TYPE: FileType = FileType::Model;

/// Template vocabulary overrides. Anything not listed maps to its own name.
const TEMPLATE_OVERRIDES: &[(Architecture, FileType, &str)] = &[
    (Architecture::Clean, FileType::Model, "domain_entity"),
    (Architecture::Clean, FileType::Repository, "domain_repository"),
    (Architecture::Clean, FileType::Service, "use_case"),
];

const CLEAN_SIGNATURES: &[&str] = &["domain/entities", "application/use_cases"];
const LAYERED_ENDPOINT_SIGNATURE: &str = "api/v1/endpoints";

// ── Classification ───────────────────────────────────────────────────────────

/// Classify a normalized path by architectural role.
///
/// Pure in `(path, architecture)`. The rule tables are currently the same
/// for every architecture.
pub fn detect_file_type(path: &str, _architecture: Architecture) -> FileType {
    let lowered = path.to_lowercase();
    let filename = lowered.rsplit('/').next().unwrap_or(&lowered);

    if let Some((_, ty)) = FILENAME_RULES.iter().find(|(name, _)| *name == filename) {
        return *ty;
    }

    SEGMENT_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lowered.contains(n)))
        .map_or(FALLBACK_TYPE, |(_, ty)| *ty)
}

/// Map a file role to the template key used for `architecture`.
pub fn resolve_template(file_type: FileType, architecture: Architecture) -> TemplateKey {
    TEMPLATE_OVERRIDES
        .iter()
        .find(|(arch, ty, _)| *arch == architecture && *ty == file_type)
        .map_or_else(
            || TemplateKey::from(file_type),
            |(_, _, key)| TemplateKey::from_static(key),
        )
}

/// Guess the architecture from the full set of declared paths.
///
/// Order matters: clean signatures beat layered ones, and modular is the
/// fallback.
pub fn infer_architecture<'a, I>(paths: I) -> Architecture
where
    I: IntoIterator<Item = &'a str>,
{
    let paths: Vec<&str> = paths.into_iter().collect();
    let seen = |needle: &str| paths.iter().any(|p| p.contains(needle));

    if CLEAN_SIGNATURES.iter().any(|sig| seen(*sig)) {
        Architecture::Clean
    } else if (seen("services/") && seen("repositories/")) || seen(LAYERED_ENDPOINT_SIGNATURE) {
        Architecture::Layered
    } else {
        Architecture::Modular
    }
}
