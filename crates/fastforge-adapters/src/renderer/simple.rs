//! Simple variable substitution renderer.

use fastforge_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{RenderContext, find_unresolved},
    error::ForgeResult,
};
use tracing::instrument;

/// Simple renderer using plain text substitution of the four fixed
/// placeholders.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(path = %context.file_path))]
    fn render(&self, body: &str, context: &RenderContext) -> ForgeResult<String> {
        let rendered = context
            .placeholders()
            .into_iter()
            .fold(body.to_string(), |text, (token, value)| {
                text.replace(token, value)
            });

        if let Some(token) = find_unresolved(&rendered) {
            return Err(ApplicationError::RenderingFailed {
                path: context.file_path.clone(),
                reason: format!("unresolved placeholder {token}"),
            }
            .into());
        }

        Ok(rendered)
    }
}
