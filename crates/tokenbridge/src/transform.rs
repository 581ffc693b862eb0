//! Token to CSS variable transformation.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Result, TokenError};
use crate::naming::pascal_to_kebab;
use crate::source::{value_type_name, TokenMap};

/// Naming strategy turning a token name into a CSS property suffix.
pub type NamingFn = fn(&str) -> String;

/// Options controlling how a token name becomes a CSS variable.
///
/// # Example
///
/// ```rust
/// use tokenbridge::{transform_token, TransformOptions};
/// use serde_json::json;
///
/// let value = json!("#ff6b35");
///
/// let wrapped = transform_token("ColorOrange500", &value, &TransformOptions::default()).unwrap();
/// assert_eq!(wrapped, "var(--color-orange-500)");
///
/// let bare = TransformOptions::default().wrap_in_var(false);
/// assert_eq!(transform_token("ColorOrange500", &value, &bare).unwrap(), "--color-orange-500");
///
/// let prefixed = TransformOptions::default().prefix("--apollo-");
/// assert_eq!(
///     transform_token("ColorOrange500", &value, &prefixed).unwrap(),
///     "var(--apollo-color-orange-500)"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TransformOptions {
    css_var_prefix: String,
    wrap_in_var: bool,
    naming_fn: NamingFn,
}

impl TransformOptions {
    /// Sets the custom property prefix (default `--`).
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.css_var_prefix = prefix.into();
        self
    }

    /// Whether to wrap the property name in `var(...)` (default `true`).
    pub fn wrap_in_var(mut self, wrap: bool) -> Self {
        self.wrap_in_var = wrap;
        self
    }

    /// Replaces the naming strategy (default [`pascal_to_kebab`]).
    pub fn naming_fn(mut self, naming_fn: NamingFn) -> Self {
        self.naming_fn = naming_fn;
        self
    }

    /// The custom property name for a token, e.g. `--color-orange-500`.
    pub fn variable_name(&self, name: &str) -> String {
        format!("{}{}", self.css_var_prefix, (self.naming_fn)(name))
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            css_var_prefix: "--".to_string(),
            wrap_in_var: true,
            naming_fn: pascal_to_kebab,
        }
    }
}

/// Transforms one token into a CSS variable reference.
///
/// Only string and number values are accepted. The value itself never
/// appears in the output; it lives in the CSS variable source and is
/// resolved by the cascade.
///
/// # Errors
///
/// Returns [`TokenError::InvalidTokenValue`] naming the token and the actual
/// type when the value is neither a string nor a number.
pub fn transform_token(name: &str, value: &Value, options: &TransformOptions) -> Result<String> {
    if !matches!(value, Value::String(_) | Value::Number(_)) {
        return Err(TokenError::InvalidTokenValue {
            name: name.to_string(),
            actual: value_type_name(value),
        });
    }

    let variable = options.variable_name(name);
    if options.wrap_in_var {
        Ok(format!("var({})", variable))
    } else {
        Ok(variable)
    }
}

/// Transforms every token of a collection, preserving order.
///
/// Fails on the first invalid token; no partial map is returned.
pub fn transform_tokens(
    tokens: &TokenMap,
    options: &TransformOptions,
) -> Result<IndexMap<String, String>> {
    tokens
        .iter()
        .map(|(name, value)| Ok((name.clone(), transform_token(name, value, options)?)))
        .collect()
}
