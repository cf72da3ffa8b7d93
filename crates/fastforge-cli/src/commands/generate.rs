//! Implementation of project generation (`fastforge --input <FILE>`).
//!
//! Responsibility: resolve options from flags and config, load the schema,
//! call the core generate service, package the result and display it.
//! No business logic lives here.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use fastforge_adapters::{InMemoryStore, LocalFilesystem, SimpleRenderer, ZipArchiver, load_schema};
use fastforge_core::{
    application::{Archiver, GenerateOptions, GenerateService, GenerationReport},
    domain::ProjectSchema,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Files listed in the schema preview before it is truncated.
const PREVIEW_LIMIT: usize = 10;

/// Everything the run decided, resolved from flags and config.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Plan {
    input: PathBuf,
    root: PathBuf,
    options: GenerateOptions,
    zip: bool,
    keep_tree: bool,
}

/// Result of one run, as printed by `--output-format json`.
#[derive(Debug, Serialize)]
struct RunSummary {
    #[serde(flatten)]
    report: GenerationReport,
    archive: Option<PathBuf>,
    archived_files: usize,
    tree_removed: bool,
}

/// Execute project generation.
///
/// Sequence:
/// 1. Resolve output directory and options
/// 2. Load and validate the schema (nothing is touched on failure)
/// 3. Remove a previous output directory
/// 4. Generate the tree
/// 5. Zip, and for `--zip-only` remove the tree again
/// 6. Print the summary
#[instrument(skip_all)]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let plan = resolve_plan(args, &config)?;
    debug!(?plan, "Generation plan resolved");

    let schema = load_schema(&plan.input)?;
    if output.format() != OutputFormat::Json {
        show_schema(&schema, &output)?;
    }

    let service = GenerateService::new(
        Box::new(InMemoryStore::with_builtin()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    if service.reset_output(&plan.root)? {
        info!(root = %plan.root.display(), "Previous output removed");
    }

    output.header(&format!(
        "Creating FastAPI project: {} ({})",
        schema.project_name(),
        schema.architecture
    ))?;
    let report = service.generate(&schema, &plan.root, &plan.options)?;

    let mut summary = RunSummary {
        report,
        archive: None,
        archived_files: 0,
        tree_removed: false,
    };

    if plan.zip {
        let destination = archive_path(&plan.root);
        output.info(&format!("Packing archive: {}", destination.display()))?;
        summary.archived_files = ZipArchiver::new().archive(&plan.root, &destination)?;
        summary.archive = Some(destination);

        if !plan.keep_tree {
            output.info(&format!("Removing generated tree: {}", plan.root.display()))?;
            summary.tree_removed = service.reset_output(&plan.root)?;
        }
    }

    match output.format() {
        OutputFormat::Json => output.json(&summary)?,
        _ => show_summary(&summary, &output)?,
    }

    Ok(())
}

fn resolve_plan(args: GenerateArgs, config: &AppConfig) -> CliResult<Plan> {
    let input = args.input.ok_or_else(|| CliError::InvalidInput {
        message: "--input <FILE> is required".into(),
        source: None,
    })?;

    let name = args
        .output
        .unwrap_or_else(|| config.generation.output.clone());
    let root = PathBuf::from(name.trim());
    if root.file_name().is_none() {
        return Err(CliError::InvalidInput {
            message: format!("'{name}' is not a usable output directory name"),
            source: None,
        });
    }

    Ok(Plan {
        input,
        root,
        options: GenerateOptions {
            package_markers: !args.no_init && config.generation.package_markers,
            with_tests: args.with_tests || config.generation.with_tests,
        },
        zip: args.zip || args.zip_only,
        keep_tree: !args.zip_only,
    })
}

/// `<output>.zip`, next to the output directory.
fn archive_path(root: &Path) -> PathBuf {
    let mut name = OsString::from(root.as_os_str());
    name.push(".zip");
    PathBuf::from(name)
}

// ── Display ───────────────────────────────────────────────────────────────────

fn show_schema(schema: &ProjectSchema, output: &OutputManager) -> CliResult<()> {
    output.info("Parsed schema:")?;
    output.print(&format!("   Architecture: {}", schema.architecture))?;
    output.print(&format!("   Files:        {}", schema.files.len()))?;
    output.print(&format!("   Project:      {}", schema.project_name()))?;
    if !schema.description().is_empty() {
        output.print(&format!("   Description:  {}", schema.description()))?;
    }

    for (i, file) in schema.files.iter().take(PREVIEW_LIMIT).enumerate() {
        output.print(&format!("   {i}: {} -> {}", file.path(), file.class_name()))?;
    }
    if schema.files.len() > PREVIEW_LIMIT {
        output.print(&format!(
            "   ... and {} more files",
            schema.files.len() - PREVIEW_LIMIT
        ))?;
    }
    Ok(())
}

fn show_summary(summary: &RunSummary, output: &OutputManager) -> CliResult<()> {
    let report = &summary.report;
    let stats = report.statistics;

    output.success(&format!(
        "Project '{}' generated in {}",
        report.project_name,
        report.root.display()
    ))?;
    output.print("Statistics:")?;
    output.print(&format!("   Architecture:      {}", report.architecture))?;
    output.print(&format!("   Models/Entities:   {}", stats.entities))?;
    output.print(&format!("   Services/UseCases: {}", stats.services))?;
    output.print(&format!("   Routers:           {}", stats.routers))?;
    output.print(&format!("   Total files:       {}", stats.total))?;
    output.print(&format!("   Directories:       {}", report.directories))?;
    if report.tests.written + report.tests.skipped > 0 {
        output.print(&format!(
            "   Test stubs:        {} written, {} kept",
            report.tests.written, report.tests.skipped
        ))?;
    }
    if report.tests.skipped > 0 {
        output.warning(&format!(
            "{} existing test file(s) were left untouched",
            report.tests.skipped
        ))?;
    }

    if let Some(archive) = &summary.archive {
        output.success(&format!(
            "Zip archive: {} ({} files)",
            archive.display(),
            summary.archived_files
        ))?;
    }

    if !summary.tree_removed {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.root.display()))?;
        output.print("  uv sync")?;
        output.print("  uv run fastapi dev")?;
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            input: input.map(PathBuf::from),
            output: None,
            no_init: false,
            zip: false,
            zip_only: false,
            with_tests: false,
        }
    }

    #[test]
    fn plan_uses_config_defaults() {
        let plan = resolve_plan(args(Some("schema.txt")), &AppConfig::default()).unwrap();

        assert_eq!(plan.root, PathBuf::from("fastapi_project"));
        assert!(plan.options.package_markers);
        assert!(!plan.options.with_tests);
        assert!(!plan.zip);
        assert!(plan.keep_tree);
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.generation.with_tests = true;

        let plan = resolve_plan(
            GenerateArgs {
                output: Some("blog".into()),
                no_init: true,
                zip_only: true,
                ..args(Some("schema.yaml"))
            },
            &config,
        )
        .unwrap();

        assert_eq!(plan.root, PathBuf::from("blog"));
        assert!(!plan.options.package_markers);
        assert!(plan.options.with_tests);
        assert!(plan.zip);
        assert!(!plan.keep_tree);
    }

    #[test]
    fn current_directory_is_not_an_output() {
        for name in [".", "..", ""] {
            let result = resolve_plan(
                GenerateArgs {
                    output: Some(name.into()),
                    ..args(Some("schema.txt"))
                },
                &AppConfig::default(),
            );
            assert!(matches!(result, Err(CliError::InvalidInput { .. })), "{name:?}");
        }
    }

    #[test]
    fn missing_input_is_user_error() {
        let err = resolve_plan(args(None), &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn archive_sits_next_to_output() {
        assert_eq!(archive_path(Path::new("blog")), PathBuf::from("blog.zip"));
        assert_eq!(
            archive_path(Path::new("out/my.api")),
            PathBuf::from("out/my.api.zip")
        );
    }
}
