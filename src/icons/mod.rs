/// Icon package processing
///
/// This module handles:
/// - Creating one package folder per source icon (scaffold)
/// - Matching icon variants to canonical names by pixel size (rules)
/// - Renaming and re-encoding variants as RGBA PNG (normalize, png)
/// - Sorted single-level directory listings shared by both stages (listing)

pub mod listing;
pub mod normalize;
pub mod png;
pub mod rules;
pub mod scaffold;

pub use normalize::process_icons;
pub use scaffold::scaffold_packages;
