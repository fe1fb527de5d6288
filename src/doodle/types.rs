//! Core types for doodle generation.

use crate::error::{DoodleError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// MIME type of every doodle payload.
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Prefix shared by every data URL this crate produces.
pub const DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

/// A request to generate a doodle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoodleRequest {
    /// The text describing the trend or concept to illustrate.
    pub prompt: String,
}

impl DoodleRequest {
    /// Creates a new request with the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Metadata about the generation process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoodleMetadata {
    /// Model used for generation.
    pub model: Option<String>,
    /// Generation duration in milliseconds.
    pub duration_ms: Option<u64>,
}

/// A generated doodle: the SVG markup plus generation metadata.
#[derive(Debug, Clone)]
#[must_use = "generated doodle should be saved or encoded"]
pub struct Doodle {
    /// The SVG fragment, from the opening `<svg` tag through the closing tag.
    pub svg: String,
    /// Generation metadata.
    pub metadata: DoodleMetadata,
}

impl Doodle {
    /// Creates a new doodle.
    pub fn new(svg: impl Into<String>, metadata: DoodleMetadata) -> Self {
        Self {
            svg: svg.into(),
            metadata,
        }
    }

    /// Returns the size of the SVG markup in bytes.
    pub fn size(&self) -> usize {
        self.svg.len()
    }

    /// Saves the SVG markup to the specified path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, &self.svg)?;
        Ok(())
    }

    /// Encodes the SVG markup as base64.
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.svg)
    }

    /// Returns the doodle as a `data:image/svg+xml;base64,` URL.
    pub fn to_data_url(&self) -> String {
        format!("{}{}", DATA_URL_PREFIX, self.to_base64())
    }

    /// Decodes a data URL produced by [`Doodle::to_data_url`] back into a
    /// doodle. The metadata of the round-tripped doodle is empty.
    pub fn from_data_url(url: &str) -> Result<Self> {
        use base64::Engine;

        let encoded = url.strip_prefix(DATA_URL_PREFIX).ok_or_else(|| {
            DoodleError::Decode(format!("not an {} data URL", SVG_MIME_TYPE))
        })?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| DoodleError::Decode(e.to_string()))?;
        let svg = String::from_utf8(bytes).map_err(|e| DoodleError::Decode(e.to_string()))?;

        Ok(Self::new(svg, DoodleMetadata::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str =
        r##"<svg width="400" height="300" viewBox="0 0 400 300"><rect width="400" height="300" fill="#f4e4c3"/></svg>"##;

    #[test]
    fn test_request_new() {
        let request = DoodleRequest::new("AI co-pilots in every workflow");
        assert_eq!(request.prompt, "AI co-pilots in every workflow");
    }

    #[test]
    fn test_data_url_prefix_and_mime() {
        let doodle = Doodle::new(FRAGMENT, DoodleMetadata::default());
        let url = doodle.to_data_url();
        assert!(url.starts_with("data:image/svg+xml;base64,"));
        assert!(!url.contains('<'));
    }

    #[test]
    fn test_data_url_round_trip_is_identity() {
        let doodle = Doodle::new(FRAGMENT, DoodleMetadata::default());
        let back = Doodle::from_data_url(&doodle.to_data_url()).unwrap();
        assert_eq!(back.svg, FRAGMENT);
    }

    #[test]
    fn test_base64_decodes_byte_for_byte() {
        use base64::Engine;

        let doodle = Doodle::new(FRAGMENT, DoodleMetadata::default());
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(doodle.to_base64())
            .unwrap();
        assert_eq!(decoded, FRAGMENT.as_bytes());
    }

    #[test]
    fn test_from_data_url_rejects_other_schemes() {
        assert!(Doodle::from_data_url("https://example.com/doodle.svg").is_err());
        assert!(Doodle::from_data_url("data:image/png;base64,AAAA").is_err());
    }

    #[test]
    fn test_from_data_url_rejects_bad_base64() {
        let err = Doodle::from_data_url("data:image/svg+xml;base64,@@not-base64@@");
        assert!(matches!(err, Err(DoodleError::Decode(_))));
    }

    #[test]
    fn test_size_counts_bytes() {
        let doodle = Doodle::new("<svg></svg>", DoodleMetadata::default());
        assert_eq!(doodle.size(), 11);
    }

    #[test]
    fn test_save_writes_markup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doodle.svg");

        let doodle = Doodle::new(FRAGMENT, DoodleMetadata::default());
        doodle.save(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), FRAGMENT);
    }
}
