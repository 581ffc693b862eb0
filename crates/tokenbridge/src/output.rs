//! The generated CSS variable map.

use indexmap::IndexMap;
use serde::Serialize;

use crate::color::{group_color_tokens, ColorGroups};
use crate::error::Result;
use crate::source::{TokenCategory, TokenSource};
use crate::transform::{transform_tokens, TransformOptions};

/// Flat token name to variable reference map of one category.
pub type VariableMap = IndexMap<String, String>;

/// Every token category mapped to CSS variable references.
///
/// Built once per generation run and never mutated afterwards. Keys keep the
/// order of the token source so serialization is byte-stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOutputMap {
    pub color: ColorGroups,
    pub spacing: VariableMap,
    pub typography: VariableMap,
    pub shadow: VariableMap,
    pub border: VariableMap,
    pub icon: VariableMap,
    pub padding: VariableMap,
    pub font_family: VariableMap,
}

impl TokenOutputMap {
    /// Builds the map from a token source using default transform options.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid token value or unclassifiable color; no
    /// partial map is produced.
    pub fn build(source: &TokenSource) -> Result<Self> {
        let options = TransformOptions::default();
        let flat = |category: TokenCategory| transform_tokens(source.category(category), &options);

        Ok(Self {
            color: group_color_tokens(source.category(TokenCategory::Color))?,
            spacing: flat(TokenCategory::Spacing)?,
            typography: flat(TokenCategory::Typography)?,
            shadow: flat(TokenCategory::Shadow)?,
            border: flat(TokenCategory::Border)?,
            icon: flat(TokenCategory::Icon)?,
            padding: flat(TokenCategory::Padding)?,
            font_family: flat(TokenCategory::FontFamily)?,
        })
    }

    /// Serializes the map as pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenSource {
        TokenSource::new()
            .add(TokenCategory::Color, "ColorOrange500", "#ff6b35")
            .add(TokenCategory::Color, "ColorBackgroundLight", "#fff")
            .add(TokenCategory::Spacing, "SpacingBase", "16px")
            .add(TokenCategory::Typography, "FontH1Bold", "700")
            .add(TokenCategory::Shadow, "ShadowDp24", "0 24px 38px rgba(0,0,0,.14)")
            .add(TokenCategory::FontFamily, "FontFamilyBase", "Noto Sans")
    }

    #[test]
    fn test_build_all_categories() {
        let map = TokenOutputMap::build(&sample()).unwrap();
        assert_eq!(map.color.palette["orange"]["500"], "var(--color-orange-500)");
        assert_eq!(map.color.semantic["background"], "var(--color-background)");
        assert_eq!(map.spacing["SpacingBase"], "var(--spacing-base)");
        assert_eq!(map.typography["FontH1Bold"], "var(--font-h1-bold)");
        assert_eq!(map.shadow["ShadowDp24"], "var(--shadow-dp-24)");
        assert_eq!(map.font_family["FontFamilyBase"], "var(--font-family-base)");
        assert!(map.icon.is_empty());
    }

    #[test]
    fn test_json_key_order() {
        let json = TokenOutputMap::build(&sample())
            .unwrap()
            .to_json_pretty()
            .unwrap();
        let order = [
            "\"color\"",
            "\"spacing\"",
            "\"typography\"",
            "\"shadow\"",
            "\"border\"",
            "\"icon\"",
            "\"padding\"",
            "\"fontFamily\"",
        ];
        let positions: Vec<usize> = order.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_source_serializes_empty_shape() {
        let json = TokenOutputMap::build(&TokenSource::new())
            .unwrap()
            .to_json_pretty()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["color"]["palette"], serde_json::json!({}));
        assert_eq!(value["fontFamily"], serde_json::json!({}));
    }

    #[test]
    fn test_build_fails_without_partial_output() {
        let source = sample().add(TokenCategory::Border, "BorderWidth", true);
        let err = TokenOutputMap::build(&source).unwrap_err();
        assert!(err.to_string().contains("BorderWidth"));
    }
}
