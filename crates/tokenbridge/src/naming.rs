//! Token name conversion.
//!
//! Token names arrive in PascalCase (`ColorOrange500`, `SpacingXXL`,
//! `FontH1Bold`). CSS custom properties use kebab-case. The conversion keeps
//! acronyms and heading levels glued together: `XXL` becomes `xxl` and `H1`
//! becomes `h1`, never `x-x-l` or `h-1`.

use once_cell::sync::Lazy;
use regex::Regex;

static LOWER_OR_DIGIT_THEN_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));
static LOWER_THEN_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([0-9])").expect("valid regex"));
static ACRONYM_THEN_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex"));

/// Converts a PascalCase token name to a kebab-case CSS property suffix.
///
/// The passes run in order, each on the output of the previous one:
///
/// 1. hyphen between a lowercase letter or digit and an uppercase letter
/// 2. hyphen between a lowercase letter and a digit (an uppercase letter
///    followed by a digit stays joined)
/// 3. hyphen between an acronym and a following capitalized word
/// 4. lowercase everything
///
/// # Example
///
/// ```rust
/// use tokenbridge::pascal_to_kebab;
///
/// assert_eq!(pascal_to_kebab("ColorOrange500"), "color-orange-500");
/// assert_eq!(pascal_to_kebab("ShadowDp24"), "shadow-dp-24");
/// assert_eq!(pascal_to_kebab("FontH1Bold"), "font-h1-bold");
/// assert_eq!(pascal_to_kebab("SpacingXXL"), "spacing-xxl");
/// ```
pub fn pascal_to_kebab(name: &str) -> String {
    let step = LOWER_OR_DIGIT_THEN_UPPER.replace_all(name, "$1-$2");
    let step = LOWER_THEN_DIGIT.replace_all(&step, "$1-$2");
    let step = ACRONYM_THEN_WORD.replace_all(&step, "$1-$2");
    step.to_lowercase()
}

/// Lowercases the first character, turning a PascalCase fragment into a
/// camelCase key (`ForegroundLight` becomes `foregroundLight`).
pub fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_palette_name() {
        assert_eq!(pascal_to_kebab("ColorOrange500"), "color-orange-500");
    }

    #[test]
    fn test_lowercase_then_digit_is_split() {
        assert_eq!(pascal_to_kebab("ShadowDp24"), "shadow-dp-24");
    }

    #[test]
    fn test_uppercase_then_digit_is_kept() {
        assert_eq!(pascal_to_kebab("FontH1Bold"), "font-h1-bold");
        assert_eq!(pascal_to_kebab("H1"), "h1");
    }

    #[test]
    fn test_acronyms_are_not_split() {
        assert_eq!(pascal_to_kebab("XXL"), "xxl");
        assert_eq!(pascal_to_kebab("SpacingXXL"), "spacing-xxl");
        assert_eq!(pascal_to_kebab("HTMLElement"), "html-element");
    }

    #[test]
    fn test_multi_word_palette() {
        assert_eq!(
            pascal_to_kebab("ColorBlueSecondary050"),
            "color-blue-secondary-050"
        );
        assert_eq!(pascal_to_kebab("ColorLightBlue625"), "color-light-blue-625");
    }

    #[test]
    fn test_theme_suffix() {
        assert_eq!(
            pascal_to_kebab("ColorBackgroundLightHc"),
            "color-background-light-hc"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(pascal_to_kebab(""), "");
    }

    #[test]
    fn test_lower_camel() {
        assert_eq!(lower_camel("ForegroundLight"), "foregroundLight");
        assert_eq!(lower_camel("White"), "white");
        assert_eq!(lower_camel(""), "");
    }

    proptest! {
        #[test]
        fn prop_output_has_no_uppercase(name in "[A-Za-z0-9]{0,24}") {
            let kebab = pascal_to_kebab(&name);
            prop_assert!(!kebab.chars().any(|c| c.is_ascii_uppercase()));
        }

        #[test]
        fn prop_capitalized_words_join_with_hyphens(words in prop::collection::vec("[A-Z][a-z]{1,6}", 1..5)) {
            let name: String = words.concat();
            let expected = words
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join("-");
            prop_assert_eq!(pascal_to_kebab(&name), expected);
        }

        #[test]
        fn prop_conversion_is_deterministic(name in "[A-Za-z0-9]{0,24}") {
            prop_assert_eq!(pascal_to_kebab(&name), pascal_to_kebab(&name));
        }
    }
}
