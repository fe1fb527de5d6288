//! Error types for doodle generation.

/// Errors that can occur while generating or handling a doodle.
#[derive(Debug, thiserror::Error)]
pub enum DoodleError {
    /// API key missing or invalid.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Upstream API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Invalid request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Model output contained no `<svg>` element.
    #[error("model output contained no <svg> element")]
    MissingSvg,

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to decode base64 or a data URL.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// I/O error (e.g., saving a file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DoodleError {
    /// Returns true if the failure was caused by the caller's input rather
    /// than by the server, the network, or the model.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}

/// Result type alias for doodle generation operations.
pub type Result<T> = std::result::Result<T, DoodleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_client_error() {
        assert!(DoodleError::InvalidRequest("empty prompt".into()).is_client_error());

        assert!(!DoodleError::Auth("bad key".into()).is_client_error());
        assert!(!DoodleError::MissingSvg.is_client_error());
        assert!(!DoodleError::Decode("bad base64".into()).is_client_error());
    }

    #[test]
    fn test_error_display() {
        let err = DoodleError::Api {
            status: 429,
            message: "Rate limit reached".into(),
        };
        assert_eq!(err.to_string(), "API error: 429 - Rate limit reached");

        let err = DoodleError::MissingSvg;
        assert_eq!(err.to_string(), "model output contained no <svg> element");

        let err = DoodleError::InvalidRequest("prompt must not be empty".into());
        assert_eq!(err.to_string(), "invalid request: prompt must not be empty");
    }
}
