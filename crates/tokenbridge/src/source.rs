//! Token source loading.
//!
//! The token source of truth is a set of flat, named collections, one per
//! [`TokenCategory`]. Each collection maps a PascalCase token name to a
//! string or number. Collections are read from JSON or YAML files and keep
//! the order in which tokens appear in the file; that order flows through to
//! every generated artifact.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::error::{Result, TokenError};

/// A flat token collection: token name to raw value, in source order.
pub type TokenMap = IndexMap<String, Value>;

/// The categories a token can belong to.
///
/// Membership is decided by the collection a token is defined in, never by
/// parsing its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Color,
    Spacing,
    Typography,
    Shadow,
    Border,
    Icon,
    Padding,
    FontFamily,
}

impl TokenCategory {
    /// All categories, in output-map order.
    pub const ALL: [TokenCategory; 8] = [
        TokenCategory::Color,
        TokenCategory::Spacing,
        TokenCategory::Typography,
        TokenCategory::Shadow,
        TokenCategory::Border,
        TokenCategory::Icon,
        TokenCategory::Padding,
        TokenCategory::FontFamily,
    ];

    /// Key of this category in the generated variable map.
    pub fn key(self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Typography => "typography",
            TokenCategory::Shadow => "shadow",
            TokenCategory::Border => "border",
            TokenCategory::Icon => "icon",
            TokenCategory::Padding => "padding",
            TokenCategory::FontFamily => "fontFamily",
        }
    }

    /// Human readable label used in stylesheet section comments.
    pub fn label(self) -> &'static str {
        match self {
            TokenCategory::Color => "Colors",
            TokenCategory::Spacing => "Spacing",
            TokenCategory::Typography => "Typography",
            TokenCategory::Shadow => "Shadows",
            TokenCategory::Border => "Borders",
            TokenCategory::Icon => "Icons",
            TokenCategory::Padding => "Padding",
            TokenCategory::FontFamily => "Font Families",
        }
    }
}

/// The complete set of token collections for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TokenSource {
    #[serde(default)]
    pub colors: TokenMap,
    #[serde(default)]
    pub spacing: TokenMap,
    #[serde(default)]
    pub typography: TokenMap,
    #[serde(default)]
    pub shadow: TokenMap,
    #[serde(default)]
    pub border: TokenMap,
    #[serde(default)]
    pub icon: TokenMap,
    #[serde(default)]
    pub padding: TokenMap,
    #[serde(default)]
    pub font_family: TokenMap,
}

impl TokenSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token to a category, returning the updated source for chaining.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokenbridge::{TokenCategory, TokenSource};
    ///
    /// let source = TokenSource::new()
    ///     .add(TokenCategory::Color, "ColorOrange500", "#ff6b35")
    ///     .add(TokenCategory::Spacing, "SpacingBase", "16px");
    ///
    /// assert_eq!(source.category(TokenCategory::Color).len(), 1);
    /// ```
    pub fn add(mut self, category: TokenCategory, name: &str, value: impl Into<Value>) -> Self {
        self.category_mut(category)
            .insert(name.to_string(), value.into());
        self
    }

    /// Returns the collection for one category.
    pub fn category(&self, category: TokenCategory) -> &TokenMap {
        match category {
            TokenCategory::Color => &self.colors,
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::Typography => &self.typography,
            TokenCategory::Shadow => &self.shadow,
            TokenCategory::Border => &self.border,
            TokenCategory::Icon => &self.icon,
            TokenCategory::Padding => &self.padding,
            TokenCategory::FontFamily => &self.font_family,
        }
    }

    fn category_mut(&mut self, category: TokenCategory) -> &mut TokenMap {
        match category {
            TokenCategory::Color => &mut self.colors,
            TokenCategory::Spacing => &mut self.spacing,
            TokenCategory::Typography => &mut self.typography,
            TokenCategory::Shadow => &mut self.shadow,
            TokenCategory::Border => &mut self.border,
            TokenCategory::Icon => &mut self.icon,
            TokenCategory::Padding => &mut self.padding,
            TokenCategory::FontFamily => &mut self.font_family,
        }
    }

    /// Total number of tokens across all categories.
    pub fn len(&self) -> usize {
        TokenCategory::ALL
            .iter()
            .map(|c| self.category(*c).len())
            .sum()
    }

    /// Returns true if no category holds any token.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parses a JSON token source.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| TokenError::Source {
            origin: "<json>".to_string(),
            message: e.to_string(),
        })
    }

    /// Parses a YAML token source.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| TokenError::Source {
            origin: "<yaml>".to_string(),
            message: e.to_string(),
        })
    }

    /// Loads a token source file, picking the format from its extension.
    ///
    /// `.json` is read as JSON; `.yaml` and `.yml` as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let parse: fn(&str) -> Result<Self> = match ext.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => {
                return Err(TokenError::UnsupportedSourceFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| TokenError::io(path, e))?;
        let source = parse(&content).map_err(|e| match e {
            TokenError::Source { message, .. } => TokenError::Source {
                origin: path.display().to_string(),
                message,
            },
            other => other,
        })?;

        tracing::debug!(path = %path.display(), tokens = source.len(), "loaded token source");
        Ok(source)
    }
}

/// Names the runtime type of a raw token value.
///
/// Uses the JavaScript `typeof` vocabulary: `null`, arrays and objects are
/// all `object`.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
    }
}
