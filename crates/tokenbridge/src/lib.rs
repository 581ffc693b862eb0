//! # tokenbridge - design tokens to CSS variables and utility themes
//!
//! `tokenbridge` turns flat, PascalCase design token collections into the
//! artifacts a component library and a utility-class framework consume:
//!
//! - a CSS variable map (`css-variables.ts`): every token mapped to a
//!   `var(--kebab-name)` reference, colors split into palette scales and
//!   theme-agnostic semantic entries
//! - a theme stylesheet (`theme.css`): one `@theme` block binding the
//!   framework's spacing, radius and line-height scales to those variables
//!
//! ## Quick start
//!
//! ```rust
//! use tokenbridge::{generate_file_content, generate_theme_css, ThemeCssOptions, TokenCategory, TokenSource};
//!
//! let source = TokenSource::new()
//!     .add(TokenCategory::Color, "ColorOrange500", "#ff6b35")
//!     .add(TokenCategory::Color, "ColorBackgroundLight", "#ffffff")
//!     .add(TokenCategory::Color, "ColorBackgroundDark", "#121212")
//!     .add(TokenCategory::Spacing, "SpacingBase", "16px");
//!
//! let module = generate_file_content(&source).unwrap();
//! assert!(module.contains(r#""background": "var(--color-background)""#));
//!
//! let css = generate_theme_css(&source, &ThemeCssOptions::default()).unwrap();
//! assert!(css.contains("--spacing-4: var(--spacing-base);"));
//! ```
//!
//! ## Semantic colors and themes
//!
//! Theme variants of a semantic color (`Light`, `Dark`, `LightHc`,
//! `DarkHc`) collapse to one generic variable. Consumers write
//! `var(--color-background)` once; theme classes re-scope its value at
//! runtime through the cascade. The first variant seen for a base name wins.
//!
//! ## Errors
//!
//! Generation is all-or-nothing. Token values must be strings or numbers;
//! anything else fails with [`TokenError::InvalidTokenValue`] naming the
//! token, before any artifact is written.

pub mod bridge;
mod color;
mod error;
mod generate;
mod naming;
mod output;
mod source;
mod transform;
mod write;

pub use color::{
    classify_color, group_color_tokens, group_color_tokens_with, ColorClass, ColorGroups,
    PaletteName, ThemeSuffix,
};
pub use error::{Result, TokenError};
pub use generate::{
    generate_file_content, generate_output_map, generate_theme_css, Renderer, ThemeCssOptions,
    DEFAULT_FRAMEWORK_IMPORT, DEFAULT_VARIABLES_IMPORT, GENERATED_HEADER, THEME_CATEGORY_ORDER, THEME_TEMPLATE, VARIABLES_TEMPLATE,
};
pub use naming::{lower_camel, pascal_to_kebab};
pub use output::{TokenOutputMap, VariableMap};
pub use source::{value_type_name, TokenCategory, TokenMap, TokenSource};
pub use transform::{transform_token, transform_tokens, NamingFn, TransformOptions};
pub use write::{check_artifact, write_artifact, write_artifacts, Artifact, ArtifactStatus};

/// Default file name of the variable map module.
pub const VARIABLES_FILE: &str = "css-variables.ts";
/// Default file name of the theme stylesheet.
pub const THEME_FILE: &str = "theme.css";
