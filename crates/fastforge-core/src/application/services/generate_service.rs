//! Generate Service - main application orchestrator.
//!
//! This service turns a parsed `ProjectSchema` into a project tree:
//! 1. Create every directory the schema needs (plus package markers)
//! 2. Render each declared file through its template
//! 3. Write project-level support files
//! 4. Optionally write test stubs
//!
//! Directory creation always completes before the first file is rendered.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateStore},
    domain::{
        Architecture, FALLBACK_TEMPLATE, ProjectFile, ProjectIdentity, ProjectSchema,
        RelativePath, RenderContext, SchemaStatistics, StructurePlan, TestStub, WritePolicy,
    },
    error::ForgeResult,
};

/// Switches that change what gets written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Write `__init__.py` into every generated directory.
    pub package_markers: bool,
    /// Write a pytest stub for every eligible file.
    pub with_tests: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            package_markers: true,
            with_tests: false,
        }
    }
}

/// Counts of written and skipped files for one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WriteTally {
    pub written: usize,
    pub skipped: usize,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub project_name: String,
    pub architecture: Architecture,
    pub statistics: SchemaStatistics,
    pub directories: usize,
    pub files_written: usize,
    pub markers: WriteTally,
    pub support_files: WriteTally,
    pub tests: WriteTally,
}

/// Main generation service.
pub struct GenerateService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use fastforge_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     Box::new(store),      // impl TemplateStore
    ///     Box::new(renderer),   // impl TemplateRenderer
    ///     Box::new(filesystem), // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Remove a previous run's output. Returns whether anything was removed.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn reset_output(&self, root: &Path) -> ForgeResult<bool> {
        if !self.filesystem.exists(root) {
            return Ok(false);
        }
        info!("Removing existing output directory");
        self.filesystem.remove_dir_all(root)?;
        Ok(true)
    }

    /// Generate the whole project for `schema` under `root`.
    #[instrument(
        skip_all,
        fields(
            architecture = %schema.architecture,
            files = schema.files.len(),
            root = %root.display()
        )
    )]
    pub fn generate(
        &self,
        schema: &ProjectSchema,
        root: &Path,
        options: &GenerateOptions,
    ) -> ForgeResult<GenerationReport> {
        schema.validate()?;

        let plan = StructurePlan::from_files(&schema.files);
        let markers = self.build_structure(&plan, root, options.package_markers)?;
        let files_written = self.render_files(schema, root)?;
        let support_files = self.write_support_files(schema, root)?;
        let tests = if options.with_tests {
            self.render_tests(schema, root)?
        } else {
            WriteTally::default()
        };

        info!(files = files_written, "Generation completed");

        Ok(GenerationReport {
            root: root.to_path_buf(),
            project_name: schema.project_name().to_string(),
            architecture: schema.architecture,
            statistics: schema.statistics(),
            directories: plan.directory_count(),
            files_written,
            markers,
            support_files,
            tests,
        })
    }

    /// Create every planned directory, then the package markers.
    ///
    /// Idempotent: existing directories are fine and existing markers are
    /// left untouched.
    #[instrument(skip_all, fields(directories = plan.directory_count()))]
    pub fn build_structure(
        &self,
        plan: &StructurePlan,
        root: &Path,
        package_markers: bool,
    ) -> ForgeResult<WriteTally> {
        self.filesystem.create_dir_all(root)?;
        for dir in plan.directories() {
            self.filesystem.create_dir_all(&root.join(dir))?;
        }

        let mut tally = WriteTally::default();
        if !package_markers {
            return Ok(tally);
        }

        for marker in plan.markers() {
            let path = root.join(&marker.path);
            if self.filesystem.exists(&path) {
                debug!(path = %marker.path, "Package marker exists, skipping");
                tally.skipped += 1;
                continue;
            }
            self.filesystem.write_file(&path, &marker.content)?;
            tally.written += 1;
        }

        Ok(tally)
    }

    /// Render one declared file to text.
    ///
    /// Falls back to a stub class body when the architecture has no
    /// template for the file's key.
    pub fn render_file(&self, architecture: Architecture, file: &ProjectFile) -> ForgeResult<String> {
        let body = match self.store.get(architecture, file.template())? {
            Some(body) => body,
            None => {
                debug!(
                    template = %file.template(),
                    path = %file.path(),
                    "No template registered, using fallback"
                );
                FALLBACK_TEMPLATE.to_string()
            }
        };

        self.renderer.render(&body, &RenderContext::for_file(file))
    }

    /// Render and write every declared file. Later duplicates overwrite
    /// earlier ones.
    #[instrument(skip_all)]
    fn render_files(&self, schema: &ProjectSchema, root: &Path) -> ForgeResult<usize> {
        for file in &schema.files {
            let content = self.render_file(schema.architecture, file)?;
            self.filesystem
                .write_file(&root.join(file.path().as_str()), &content)?;
            debug!(path = %file.path(), template = %file.template(), "Rendered");
        }
        Ok(schema.files.len())
    }

    #[instrument(skip_all)]
    fn write_support_files(&self, schema: &ProjectSchema, root: &Path) -> ForgeResult<WriteTally> {
        let identity = ProjectIdentity::from_dir_name(
            root.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| schema.project_name().to_string()),
        );

        let mut tally = WriteTally::default();
        for file in self.store.support_files(schema.architecture, &identity)? {
            match file.policy {
                WritePolicy::Overwrite => {
                    self.filesystem.write_file(&root.join(&file.path), &file.content)?;
                }
                WritePolicy::EntryPoint => {
                    let relative = RelativePath::try_new(&file.path)?.prefixed(schema.root_dir())?;
                    let path = root.join(relative.as_str());
                    if self.filesystem.exists(&path) {
                        debug!(path = %relative, "Entry point declared by schema, keeping it");
                        tally.skipped += 1;
                        continue;
                    }
                    self.ensure_parent(&path)?;
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
            tally.written += 1;
        }

        Ok(tally)
    }

    #[instrument(skip_all)]
    fn render_tests(&self, schema: &ProjectSchema, root: &Path) -> ForgeResult<WriteTally> {
        let stubs = TestStub::plan(&schema.files, schema.architecture);
        info!(count = stubs.len(), "Generating test stubs");

        let mut tally = WriteTally::default();
        for stub in stubs {
            let path = root.join(&stub.path);
            if self.filesystem.exists(&path) {
                warn!(path = %stub.path, "Test already exists, skipping");
                tally.skipped += 1;
                continue;
            }
            self.ensure_parent(&path)?;
            self.filesystem.write_file(&path, &stub.content)?;
            tally.written += 1;
        }

        Ok(tally)
    }

    fn ensure_parent(&self, path: &Path) -> ForgeResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.filesystem.create_dir_all(parent),
            _ => Ok(()),
        }
    }
}
