//! MiniJinja filter registration.

use minijinja::Environment;

use crate::naming::pascal_to_kebab;
use crate::transform::TransformOptions;

/// Registers the naming filters used by the artifact templates.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // {{ "SpacingXXL" | kebab }} -> spacing-xxl
    env.add_filter("kebab", |name: String| -> String { pascal_to_kebab(&name) });

    // {{ "SpacingXXL" | css_var }} -> var(--spacing-xxl)
    let options = TransformOptions::default();
    env.add_filter("css_var", move |name: String| -> String {
        format!("var({})", options.variable_name(&name))
    });
}
