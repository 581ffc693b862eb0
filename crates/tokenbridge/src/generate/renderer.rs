//! Pre-compiled artifact renderer.

use minijinja::{AutoEscape, Environment, Error};
use serde::Serialize;

use super::filters::register_filters;

/// Name of the variable map module template.
pub const VARIABLES_TEMPLATE: &str = "css-variables.ts";
/// Name of the theme stylesheet template.
pub const THEME_TEMPLATE: &str = "theme.css";

/// A renderer with the artifact templates pre-registered.
///
/// Templates are compiled once and rendered with trailing newlines kept and
/// block tags trimmed, so the output is exactly what gets committed. Output
/// is never escaped: the artifacts are source code, not HTML.
///
/// # Example
///
/// ```rust
/// use tokenbridge::Renderer;
///
/// let mut renderer = Renderer::new().unwrap();
/// renderer.add_template("probe", "{{ name | css_var }}\n").unwrap();
///
/// let out = renderer
///     .render("probe", &serde_json::json!({ "name": "SpacingBase" }))
///     .unwrap();
/// assert_eq!(out, "var(--spacing-base)\n");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer with the built-in artifact templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env);

        env.add_template(
            VARIABLES_TEMPLATE,
            include_str!("templates/css-variables.ts.tmpl"),
        )?;
        env.add_template(THEME_TEMPLATE, include_str!("templates/theme.css.tmpl"))?;
        Ok(Self { env })
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }
}
