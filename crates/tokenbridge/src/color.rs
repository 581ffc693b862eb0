//! Color token classification and grouping.
//!
//! Color tokens fall into two families:
//!
//! - **Palette** colors are numbered shades of a named hue
//!   (`ColorOrange500`, `ColorInk050`). They never vary by theme.
//! - **Semantic** colors are named by purpose (`ColorBackgroundLight`,
//!   `ColorWhite`). Theme variants of one concept share a single generic
//!   variable (`--color-background`); the theme class swaps its value at
//!   runtime, so consumers only ever reference one name.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, TokenError};
use crate::naming::{lower_camel, pascal_to_kebab};
use crate::source::TokenMap;
use crate::transform::{transform_token, TransformOptions};

const COLOR_PREFIX: &str = "Color";

/// The closed set of hues that own a numbered palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteName {
    Orange,
    Blue,
    BlueSecondary,
    Green,
    Yellow,
    Red,
    Purple,
    LightBlue,
    Pink,
    Ink,
}

impl PaletteName {
    pub const ALL: [PaletteName; 10] = [
        PaletteName::Orange,
        PaletteName::Blue,
        PaletteName::BlueSecondary,
        PaletteName::Green,
        PaletteName::Yellow,
        PaletteName::Red,
        PaletteName::Purple,
        PaletteName::LightBlue,
        PaletteName::Pink,
        PaletteName::Ink,
    ];

    /// Name as it appears inside token names.
    pub fn pascal(self) -> &'static str {
        match self {
            PaletteName::Orange => "Orange",
            PaletteName::Blue => "Blue",
            PaletteName::BlueSecondary => "BlueSecondary",
            PaletteName::Green => "Green",
            PaletteName::Yellow => "Yellow",
            PaletteName::Red => "Red",
            PaletteName::Purple => "Purple",
            PaletteName::LightBlue => "LightBlue",
            PaletteName::Pink => "Pink",
            PaletteName::Ink => "Ink",
        }
    }

    /// Key of this palette in the generated map (`blue-secondary`).
    pub fn kebab(self) -> String {
        pascal_to_kebab(self.pascal())
    }

    fn from_pascal(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.pascal() == name)
    }
}

/// Theme and contrast variants a semantic color may be defined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeSuffix {
    Light,
    Dark,
    LightHc,
    DarkHc,
}

impl ThemeSuffix {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "Light" => Some(ThemeSuffix::Light),
            "Dark" => Some(ThemeSuffix::Dark),
            "LightHc" => Some(ThemeSuffix::LightHc),
            "DarkHc" => Some(ThemeSuffix::DarkHc),
            _ => None,
        }
    }
}

static PALETTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<&str> = PaletteName::ALL.iter().map(|p| p.pascal()).collect();
    Regex::new(&format!(r"^Color({})([0-9]+)$", names.join("|"))).expect("valid regex")
});

static THEME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Color(.+?)(LightHc|DarkHc|Light|Dark)$").expect("valid regex"));

/// How a single color token name was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorClass {
    /// A numbered shade of a palette hue. The shade is kept verbatim so
    /// `050` never collapses to `50`.
    Palette { palette: PaletteName, shade: String },
    /// A semantic color defined for one theme variant.
    ThemeVariant { base: String, suffix: ThemeSuffix },
    /// A semantic color with no theme suffix (`ColorWhite`).
    Semantic { base: String },
}

impl ColorClass {
    /// The camelCase key of a semantic class, `None` for palette shades.
    pub fn semantic_key(&self) -> Option<String> {
        match self {
            ColorClass::Palette { .. } => None,
            ColorClass::ThemeVariant { base, .. } | ColorClass::Semantic { base } => {
                Some(lower_camel(base))
            }
        }
    }
}

/// Classifies a color token by name.
///
/// Palette matches take precedence over theme variants, which take
/// precedence over the generic semantic fallback.
///
/// # Errors
///
/// Returns [`TokenError::UnclassifiableColorToken`] when the name does not
/// start with `Color` followed by at least one character.
pub fn classify_color(name: &str) -> Result<ColorClass> {
    if let Some(caps) = PALETTE_PATTERN.captures(name) {
        if let Some(palette) = PaletteName::from_pascal(&caps[1]) {
            return Ok(ColorClass::Palette {
                palette,
                shade: caps[2].to_string(),
            });
        }
    }

    if let Some(caps) = THEME_PATTERN.captures(name) {
        if let Some(suffix) = ThemeSuffix::from_suffix(&caps[2]) {
            return Ok(ColorClass::ThemeVariant {
                base: caps[1].to_string(),
                suffix,
            });
        }
    }

    match name.strip_prefix(COLOR_PREFIX) {
        Some(base) if !base.is_empty() => Ok(ColorClass::Semantic {
            base: base.to_string(),
        }),
        _ => Err(TokenError::UnclassifiableColorToken {
            name: name.to_string(),
        }),
    }
}

/// Color tokens split into palette scales and semantic references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorGroups {
    /// Palette key (`orange`) to shade (`"500"`) to variable reference.
    pub palette: IndexMap<String, IndexMap<String, String>>,
    /// camelCase semantic key to generic variable reference.
    pub semantic: IndexMap<String, String>,
}

/// Groups color tokens with default transform options.
///
/// # Example
///
/// ```rust
/// use tokenbridge::{group_color_tokens, TokenCategory, TokenSource};
///
/// let source = TokenSource::new()
///     .add(TokenCategory::Color, "ColorInk050", "#f7f7f7")
///     .add(TokenCategory::Color, "ColorBackgroundLight", "#ffffff")
///     .add(TokenCategory::Color, "ColorBackgroundDark", "#1a1a1a");
///
/// let groups = group_color_tokens(&source.colors).unwrap();
/// assert_eq!(groups.palette["ink"]["050"], "var(--color-ink-050)");
/// assert_eq!(groups.semantic["background"], "var(--color-background)");
/// assert_eq!(groups.semantic.len(), 1);
/// ```
pub fn group_color_tokens(tokens: &TokenMap) -> Result<ColorGroups> {
    group_color_tokens_with(tokens, &TransformOptions::default())
}

/// Groups color tokens, building references with the given options.
///
/// Every value is type checked before it is classified, including theme
/// variants that end up dropped as duplicates.
pub fn group_color_tokens_with(
    tokens: &TokenMap,
    options: &TransformOptions,
) -> Result<ColorGroups> {
    let mut groups = ColorGroups::default();

    for (name, value) in tokens {
        let reference = transform_token(name, value, options)?;
        match classify_color(name)? {
            ColorClass::Palette { palette, shade } => {
                groups
                    .palette
                    .entry(palette.kebab())
                    .or_default()
                    .insert(shade, reference);
            }
            ColorClass::ThemeVariant { base, suffix } => {
                let key = lower_camel(&base);
                if groups.semantic.contains_key(&key) {
                    tracing::debug!(token = %name, ?suffix, %key, "theme variant collapsed");
                    continue;
                }
                let generic = generic_reference(&base, value, options)?;
                groups.semantic.insert(key, generic);
            }
            ColorClass::Semantic { base } => {
                tracing::debug!(token = %name, "color classified as generic semantic");
                groups.semantic.insert(lower_camel(&base), reference);
            }
        }
    }

    Ok(groups)
}

fn generic_reference(base: &str, value: &Value, options: &TransformOptions) -> Result<String> {
    transform_token(&format!("{COLOR_PREFIX}{base}"), value, options)
}
