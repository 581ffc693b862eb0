//! Curated tables binding the utility framework's theme scales to tokens.
//!
//! No naming convention links spacing step `5` to the `m` token or the
//! `default` radius to `base`; these tables are the only source of that
//! mapping and are emitted verbatim.

/// A framework scale variable aliased to a token variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeEntry {
    /// Framework variable, without the leading `--`.
    pub framework: &'static str,
    /// Token variable, without the leading `--`.
    pub token: &'static str,
}

const fn entry(framework: &'static str, token: &'static str) -> BridgeEntry {
    BridgeEntry { framework, token }
}

/// Named spacing steps on the numeric spacing scale. Steps 7 and 9 are
/// intentionally absent.
pub const SPACING_SCALE: [BridgeEntry; 8] = [
    entry("spacing-1", "spacing-micro"),
    entry("spacing-2", "spacing-xs"),
    entry("spacing-3", "spacing-s"),
    entry("spacing-4", "spacing-base"),
    entry("spacing-5", "spacing-m"),
    entry("spacing-6", "spacing-l"),
    entry("spacing-8", "spacing-xl"),
    entry("spacing-10", "spacing-xxl"),
];

/// Border radius tokens on the `none/sm/default/md/lg` radius scale.
pub const RADIUS_SCALE: [BridgeEntry; 5] = [
    entry("radius-none", "border-radius-none"),
    entry("radius-sm", "border-radius-s"),
    entry("radius", "border-radius-base"),
    entry("radius-md", "border-radius-m"),
    entry("radius-lg", "border-radius-l"),
];

/// Line height roles bound to the font line-height variables.
pub const LINE_HEIGHT_SCALE: [BridgeEntry; 10] = [
    entry("leading-micro", "font-line-height-micro"),
    entry("leading-xs", "font-line-height-xs"),
    entry("leading-s", "font-line-height-s"),
    entry("leading-m", "font-line-height-m"),
    entry("leading-l", "font-line-height-l"),
    entry("leading-hero", "font-line-height-hero"),
    entry("leading-h1", "font-line-height-h1"),
    entry("leading-h2", "font-line-height-h2"),
    entry("leading-h3", "font-line-height-h3"),
    entry("leading-h4", "font-line-height-h4"),
];

/// A titled bridge table as emitted in the stylesheet.
#[derive(Debug, Clone, Copy)]
pub struct BridgeTable {
    pub title: &'static str,
    pub entries: &'static [BridgeEntry],
}

/// All bridge tables, in stylesheet order.
pub const BRIDGE_TABLES: [BridgeTable; 3] = [
    BridgeTable {
        title: "Spacing scale",
        entries: &SPACING_SCALE,
    },
    BridgeTable {
        title: "Border radius scale",
        entries: &RADIUS_SCALE,
    },
    BridgeTable {
        title: "Line height scale",
        entries: &LINE_HEIGHT_SCALE,
    },
];
