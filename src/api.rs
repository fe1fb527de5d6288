//! Wire types for the doodle HTTP API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The text prompt describing the trend to illustrate.
    pub prompt: String,
}

/// Successful response from `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Base64 data URL carrying the generated SVG.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Error body returned by the API. Never carries an image URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub error: String,
    /// Upstream or internal detail, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates an error body without details.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Creates an error body with a detail string.
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_uses_camel_case_key() {
        let body = GenerateResponse {
            image_url: "data:image/svg+xml;base64,AAAA".into(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["imageUrl"], "data:image/svg+xml;base64,AAAA");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_error_body_omits_absent_details() {
        let json = serde_json::to_value(ErrorResponse::new("Failed to generate SVG.")).unwrap();
        assert_eq!(json["error"], "Failed to generate SVG.");
        assert!(json.get("details").is_none());
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_error_body_carries_details_when_present() {
        let json = serde_json::to_value(ErrorResponse::with_details(
            "Failed to generate SVG.",
            "Rate limit reached",
        ))
        .unwrap();
        assert_eq!(json["details"], "Rate limit reached");
    }

    #[test]
    fn test_request_round_trip() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"prompt": "hybrid rituals"}"#).unwrap();
        assert_eq!(request.prompt, "hybrid rituals");
    }
}
