//! Shared conversion from a raw schema entry to a `ProjectFile`.

use fastforge_core::{
    domain::{
        Architecture, DomainError, FileType, ProjectFile, RelativePath, TemplateKey,
        classify_file, detect_file_type, resolve_template,
    },
    error::ForgeResult,
};
use tracing::debug;

/// Value meaning "detect from the path" for type and template overrides.
const AUTO: &str = "default";

/// One file entry as written in a schema, before classification.
#[derive(Debug, Default)]
pub(crate) struct Entry<'a> {
    pub path: Option<&'a str>,
    pub class_name: Option<&'a str>,
    pub file_type: Option<&'a str>,
    pub template: Option<&'a str>,
}

impl Entry<'_> {
    /// Build the file, or `None` when the entry lacks a path or class.
    ///
    /// `root` is prepended to the path unless the path already lives
    /// under it.
    pub fn into_file(
        self,
        architecture: Architecture,
        root: &str,
    ) -> ForgeResult<Option<ProjectFile>> {
        let (Some(path), Some(class_name)) = (non_empty(self.path), non_empty(self.class_name))
        else {
            debug!(path = ?self.path, class = ?self.class_name, "Dropping incomplete entry");
            return Ok(None);
        };

        let path = RelativePath::try_new(path)?.prefixed(root)?;

        let file_type = match self.file_type.filter(|t| !t.eq_ignore_ascii_case(AUTO)) {
            Some(explicit) => Some(explicit.parse::<FileType>()?),
            None => None,
        };
        let template = self
            .template
            .filter(|t| !t.eq_ignore_ascii_case(AUTO))
            .map(TemplateKey::new);

        let file = match (file_type, template) {
            (None, None) => classify_file(path.as_str(), class_name, architecture)?,
            (file_type, template) => {
                let file_type =
                    file_type.unwrap_or_else(|| detect_file_type(path.as_str(), architecture));
                let template =
                    template.unwrap_or_else(|| resolve_template(file_type, architecture));
                ProjectFile::new(path.as_str(), class_name, file_type, template)?
            }
        };

        Ok(Some(file))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse an architecture name, keeping the domain error for diagnostics.
pub(crate) fn architecture(value: Option<&str>) -> Result<Architecture, DomainError> {
    match non_empty(value) {
        Some(name) => name.parse(),
        None => Ok(Architecture::default()),
    }
}
