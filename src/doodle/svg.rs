//! SVG fragment extraction from raw model output.

use crate::error::{DoodleError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// Greedy on purpose: the match runs from the first opening tag to the LAST
// closing tag, so svg-ish content nested inside a doodle cannot truncate it.
// Case-insensitive, spans newlines.
static SVG_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<svg.*</svg>").unwrap());

/// Extracts the `<svg>...</svg>` block from raw model output.
///
/// Models often wrap the markup in prose or a code fence; everything outside
/// the block is discarded. Output without an extractable block is a terminal
/// [`DoodleError::MissingSvg`], never repaired.
pub fn extract_svg(raw: &str) -> Result<&str> {
    SVG_BLOCK
        .find(raw)
        .map(|m| m.as_str())
        .ok_or(DoodleError::MissingSvg)
}
