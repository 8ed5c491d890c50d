//! Template rendering engine for Stencil.
//! Wraps MiniJinja and registers case-conversion filters so templates and
//! parameter defaults can derive identifiers from free-form values
//! (e.g. `{{ stencil.project_name | snake_case }}`).

use crate::error::{Error, Result};
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with the case-conversion filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("snake_case", |value: String| cruet::to_snake_case(&value));
        env.add_filter("kebab_case", |value: String| cruet::to_kebab_case(&value));
        env.add_filter("camel_case", |value: String| cruet::to_camel_case(&value));
        env.add_filter("pascal_case", |value: String| cruet::to_pascal_case(&value));
        env.add_filter("title_case", |value: String| cruet::to_title_case(&value));
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if:
    ///   - Template addition fails
    ///   - Template retrieval fails
    ///   - Template rendering fails
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}
