//! Artifact generation.
//!
//! Two artifacts are produced from one [`TokenSource`]:
//!
//! - the variable map module (`css-variables.ts`), exporting the
//!   [`TokenOutputMap`] as a constant plus derived type aliases
//! - the theme stylesheet (`theme.css`), a single `@theme` block with one
//!   pass-through declaration per token followed by the curated
//!   [bridge tables](crate::bridge)
//!
//! Both are pure functions of the source: running a generator twice on
//! unchanged input yields byte-identical text.

mod filters;
mod renderer;

pub use renderer::{Renderer, THEME_TEMPLATE, VARIABLES_TEMPLATE};

use serde::Serialize;

use crate::bridge::{BridgeEntry, BRIDGE_TABLES};
use crate::error::Result;
use crate::output::TokenOutputMap;
use crate::source::{TokenCategory, TokenSource};
use crate::transform::{transform_tokens, TransformOptions};

/// Banner placed at the top of every generated artifact.
pub const GENERATED_HEADER: &str =
    "This file is auto-generated by tokenbridge. Do not edit it directly; regenerate it instead.";

/// Category order of the pass-through declarations in the stylesheet.
pub const THEME_CATEGORY_ORDER: [TokenCategory; 7] = [
    TokenCategory::Color,
    TokenCategory::Spacing,
    TokenCategory::Padding,
    TokenCategory::FontFamily,
    TokenCategory::Typography,
    TokenCategory::Shadow,
    TokenCategory::Border,
];

/// Default utility framework import of the theme stylesheet.
pub const DEFAULT_FRAMEWORK_IMPORT: &str = "tailwindcss";
/// Default raw CSS variable import of the theme stylesheet.
pub const DEFAULT_VARIABLES_IMPORT: &str = "./css-variables.css";

/// Import targets of the theme stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCssOptions {
    framework_import: String,
    variables_import: String,
}

impl ThemeCssOptions {
    /// Sets the utility framework import (default `tailwindcss`).
    pub fn framework_import(mut self, import: impl Into<String>) -> Self {
        self.framework_import = import.into();
        self
    }

    /// Sets the raw CSS variable source import (default `./css-variables.css`).
    pub fn variables_import(mut self, import: impl Into<String>) -> Self {
        self.variables_import = import.into();
        self
    }
}

impl Default for ThemeCssOptions {
    fn default() -> Self {
        Self {
            framework_import: DEFAULT_FRAMEWORK_IMPORT.to_string(),
            variables_import: DEFAULT_VARIABLES_IMPORT.to_string(),
        }
    }
}

/// Builds the typed variable map.
pub fn generate_output_map(source: &TokenSource) -> Result<TokenOutputMap> {
    TokenOutputMap::build(source)
}

/// Generates the variable map module.
///
/// # Example
///
/// ```rust
/// use tokenbridge::{generate_file_content, TokenCategory, TokenSource};
///
/// let source = TokenSource::new().add(TokenCategory::Color, "ColorOrange500", "#ff6b35");
/// let content = generate_file_content(&source).unwrap();
///
/// assert!(content.contains(r#""500": "var(--color-orange-500)""#));
/// assert_eq!(content, generate_file_content(&source).unwrap());
/// ```
pub fn generate_file_content(source: &TokenSource) -> Result<String> {
    let map = generate_output_map(source)?;
    let renderer = Renderer::new()?;

    #[derive(Serialize)]
    struct ModuleContext<'a> {
        header: &'a str,
        variables: String,
    }

    let content = renderer.render(
        VARIABLES_TEMPLATE,
        &ModuleContext {
            header: GENERATED_HEADER,
            variables: map.to_json_pretty()?,
        },
    )?;
    Ok(content)
}

#[derive(Debug, Serialize)]
struct ThemeSection<'a> {
    title: &'static str,
    tokens: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct BridgeSection {
    title: &'static str,
    entries: Vec<BridgeRow>,
}

#[derive(Debug, Serialize)]
struct BridgeRow {
    framework: &'static str,
    token: &'static str,
}

impl From<&BridgeEntry> for BridgeRow {
    fn from(entry: &BridgeEntry) -> Self {
        BridgeRow {
            framework: entry.framework,
            token: entry.token,
        }
    }
}

#[derive(Debug, Serialize)]
struct ThemeContext<'a> {
    header: &'static str,
    framework_import: &'a str,
    variables_import: &'a str,
    sections: Vec<ThemeSection<'a>>,
    bridges: Vec<BridgeSection>,
}

/// Generates the theme stylesheet.
///
/// Every token value is type checked before anything is rendered.
/// Categories without tokens are left out of the pass-through section.
pub fn generate_theme_css(source: &TokenSource, options: &ThemeCssOptions) -> Result<String> {
    let transform = TransformOptions::default();
    let mut sections = Vec::new();
    for category in THEME_CATEGORY_ORDER {
        let tokens = source.category(category);
        transform_tokens(tokens, &transform)?;
        if tokens.is_empty() {
            continue;
        }
        sections.push(ThemeSection {
            title: category.label(),
            tokens: tokens.keys().map(String::as_str).collect(),
        });
    }

    let bridges = BRIDGE_TABLES
        .iter()
        .map(|table| BridgeSection {
            title: table.title,
            entries: table.entries.iter().map(BridgeRow::from).collect(),
        })
        .collect();

    let context = ThemeContext {
        header: GENERATED_HEADER,
        framework_import: &options.framework_import,
        variables_import: &options.variables_import,
        sections,
        bridges,
    };

    let renderer = Renderer::new()?;
    Ok(renderer.render(THEME_TEMPLATE, &context)?)
}
