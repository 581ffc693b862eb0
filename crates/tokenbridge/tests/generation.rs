//! End-to-end generation tests against the fixture token sources.

use serde_json::Value;
use tokenbridge::{
    check_artifact, generate_file_content, generate_output_map, generate_theme_css,
    write_artifacts, Artifact, ArtifactStatus, ThemeCssOptions, TokenCategory, TokenError,
    TokenSource, THEME_FILE, VARIABLES_FILE,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/tokens.json");
const YAML_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/tokens.yaml");

fn fixture() -> TokenSource {
    TokenSource::load(FIXTURE).expect("fixture should load")
}

/// Extracts the object literal between `cssVariables = ` and ` as const`.
fn exported_json(module: &str) -> Value {
    let start = module.find("cssVariables = ").unwrap() + "cssVariables = ".len();
    let end = module.find(" as const;").unwrap();
    serde_json::from_str(&module[start..end]).expect("exported object should be valid JSON")
}

#[test]
fn test_output_map_palette_and_semantic() {
    let map = generate_output_map(&fixture()).unwrap();

    let palettes: Vec<&str> = map.color.palette.keys().map(String::as_str).collect();
    assert_eq!(
        palettes,
        ["orange", "blue", "blue-secondary", "green", "light-blue", "ink"]
    );
    assert_eq!(map.color.palette["ink"]["050"], "var(--color-ink-050)");
    assert_eq!(
        map.color.palette["blue-secondary"]["250"],
        "var(--color-blue-secondary-250)"
    );

    let semantic: Vec<&str> = map.color.semantic.keys().map(String::as_str).collect();
    assert_eq!(
        semantic,
        ["white", "black", "background", "foregroundLight", "borderGrid"]
    );
    assert_eq!(map.color.semantic["background"], "var(--color-background)");
    assert_eq!(
        map.color.semantic["foregroundLight"],
        "var(--color-foreground-light)"
    );
}

#[test]
fn test_flat_categories_have_reference_shape() {
    let map = generate_output_map(&fixture()).unwrap();
    let shape = regex::Regex::new(r"^var\(--[a-z][a-z0-9-]*\)$").unwrap();

    for category in [
        &map.spacing,
        &map.typography,
        &map.shadow,
        &map.border,
        &map.icon,
        &map.padding,
        &map.font_family,
    ] {
        for (name, reference) in category {
            assert!(shape.is_match(reference), "{name} -> {reference}");
        }
    }
    assert_eq!(map.padding["PaddingXXL"], "var(--padding-xxl)");
    assert_eq!(map.shadow["ShadowDp24"], "var(--shadow-dp-24)");
}

#[test]
fn test_module_is_parseable_and_stable() {
    let source = fixture();
    let first = generate_file_content(&source).unwrap();
    let second = generate_file_content(&source).unwrap();
    assert_eq!(first, second);

    let json = exported_json(&first);
    assert_eq!(json["color"]["palette"]["ink"]["050"], "var(--color-ink-050)");
    assert_eq!(json["fontFamily"]["FontFamilyMono"], "var(--font-family-mono)");
    assert_eq!(json["icon"]["IconSizeM"], "var(--icon-size-m)");
}

#[test]
fn test_theme_css_sections() {
    let css = generate_theme_css(&fixture(), &ThemeCssOptions::default()).unwrap();

    let headers = [
        "  /* Colors */",
        "  /* Spacing */",
        "  /* Padding */",
        "  /* Font Families */",
        "  /* Typography */",
        "  /* Shadows */",
        "  /* Borders */",
        "  /* Spacing scale */",
        "  /* Border radius scale */",
        "  /* Line height scale */",
    ];
    let positions: Vec<usize> = headers
        .iter()
        .map(|h| css.find(h).unwrap_or_else(|| panic!("missing {h}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(css.contains("  --color-background-light-hc: var(--color-background-light-hc);\n"));
    assert!(css.contains("  --spacing-1: var(--spacing-micro);\n"));
    assert_eq!(css.matches("@theme {").count(), 1);
}

#[test]
fn test_yaml_source_generates_same_shape() {
    let source = TokenSource::load(YAML_FIXTURE).unwrap();
    let map = generate_output_map(&source).unwrap();
    assert_eq!(map.color.semantic["surface"], "var(--color-surface)");
    assert_eq!(map.icon["IconSizeM"], "var(--icon-size-m)");
}

#[test]
fn test_invalid_value_fails_both_generators() {
    let source = fixture().add(TokenCategory::Spacing, "SpacingBroken", Value::Null);

    match generate_file_content(&source) {
        Err(TokenError::InvalidTokenValue { name, actual }) => {
            assert_eq!(name, "SpacingBroken");
            assert_eq!(actual, "object");
        }
        other => panic!("expected invalid token value, got {other:?}"),
    }
    assert!(generate_theme_css(&source, &ThemeCssOptions::default()).is_err());
}

#[test]
fn test_written_artifacts_check_fresh() {
    let source = fixture();
    let dir = tempfile::tempdir().unwrap();
    let artifacts = [
        Artifact::new(
            dir.path().join(VARIABLES_FILE),
            generate_file_content(&source).unwrap(),
        ),
        Artifact::new(
            dir.path().join(THEME_FILE),
            generate_theme_css(&source, &ThemeCssOptions::default()).unwrap(),
        ),
    ];
    write_artifacts(&artifacts).unwrap();

    for artifact in &artifacts {
        assert_eq!(
            check_artifact(&artifact.path, &artifact.contents).unwrap(),
            ArtifactStatus::Fresh
        );
    }

    let changed = generate_file_content(
        &source.add(TokenCategory::Color, "ColorPink500", "#e91e63"),
    )
    .unwrap();
    assert_eq!(
        check_artifact(dir.path().join(VARIABLES_FILE), &changed).unwrap(),
        ArtifactStatus::Stale
    );
}
