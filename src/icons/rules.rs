//! Resolution rules
//!
//! Icon variants are identified purely by their pixel size. The table is
//! matched by exact equality only; there is no nearest-size fallback.

use std::path::Path;

/// Extension every normalized variant ends up with
pub const NORMALIZED_EXTENSION: &str = "png";

/// Extensions (lowercase) the normalizer will look at
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// One exact (width, height) -> canonical name mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionRule {
    pub width: u32,
    pub height: u32,
    pub name: &'static str,
}

/// Known monochrome icon variants, checked in order
pub const SIZE_RULES: [ResolutionRule; 4] = [
    ResolutionRule {
        width: 240,
        height: 240,
        name: "monochrome",
    },
    ResolutionRule {
        width: 240,
        height: 820,
        name: "monochrome_1x2",
    },
    ResolutionRule {
        width: 820,
        height: 240,
        name: "monochrome_2x1",
    },
    ResolutionRule {
        width: 704,
        height: 704,
        name: "monochrome_2x2",
    },
];

/// Find the rule for an exact pixel size
pub fn match_rule(width: u32, height: u32) -> Option<&'static ResolutionRule> {
    SIZE_RULES
        .iter()
        .find(|rule| rule.width == width && rule.height == height)
}

/// Canonical name for an exact pixel size, if any
pub fn canonical_name(width: u32, height: u32) -> Option<&'static str> {
    match_rule(width, height).map(|rule| rule.name)
}

/// File name a variant is renamed to, e.g. `monochrome.png`
pub fn target_file_name(name: &str) -> String {
    format!("{}.{}", name, NORMALIZED_EXTENSION)
}

/// Whether a path carries one of the supported image extensions
pub fn has_image_extension(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map_or(false, |ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
