//! HTTP server for the doodle board.
//!
//! One generation endpoint plus the embedded client assets. Every failure on
//! the generation path is converted to the JSON error shape at this boundary;
//! nothing here panics the process.

use crate::api::{ErrorResponse, GenerateResponse};
use crate::doodle::providers::OpenAiDoodleProvider;
use crate::doodle::{DoodleProvider, DoodleRequest};
use crate::error::{DoodleError, Result};
use crate::web;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

const INVALID_PROMPT_ERROR: &str = "Missing or invalid 'prompt' in request body.";
const MISSING_KEY_ERROR: &str = "OPENAI_API_KEY not configured on the server.";
const UPSTREAM_ERROR: &str = "Failed to generate SVG.";
const MALFORMED_OUTPUT_ERROR: &str = "Model did not return a valid SVG.";
const INTERNAL_ERROR: &str = "Internal server error in /api/generate.";

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    provider: Option<Arc<dyn DoodleProvider>>,
}

impl AppState {
    /// State backed by a configured provider.
    pub fn with_provider(provider: Arc<dyn DoodleProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// State for a server started without a credential. It serves the board,
    /// and every generation request fails with the configuration error.
    pub fn without_provider() -> Self {
        Self { provider: None }
    }

    /// Resolves the OpenAI provider from the environment. A missing key logs
    /// a warning and yields a provider-less state; the server still starts.
    pub fn from_env() -> Self {
        match OpenAiDoodleProvider::builder().build() {
            Ok(provider) => Self::with_provider(Arc::new(provider)),
            Err(_) => {
                tracing::warn!(
                    "OPENAI_API_KEY is not set. Add it to your .env file in the project root."
                );
                Self::without_provider()
            }
        }
    }
}

/// Builds the doodle board router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/app.js", get(app_js_handler))
        .route("/style.css", get(style_css_handler))
        .route("/api/generate", post(generate_handler))
        .with_state(state)
}

/// Binds the given port on all interfaces and serves until the process exits.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Crazy 8s SVG doodle server running at http://localhost:{port}");
    axum::serve(listener, app(state)).await?;
    Ok(())
}

async fn index_handler() -> Html<&'static str> {
    Html(web::INDEX_HTML)
}

async fn app_js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        web::APP_JS,
    )
}

async fn style_css_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], web::STYLE_CSS)
}

async fn generate_handler(
    State(state): State<AppState>,
    body: Option<Json<serde_json::Value>>,
) -> std::result::Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    // The body must be JSON with a non-empty string under "prompt"; anything
    // else gets the fixed 400 body, without reaching the provider.
    let prompt = body
        .as_ref()
        .and_then(|Json(value)| value.get("prompt"))
        .and_then(|prompt| prompt.as_str())
        .filter(|prompt| !prompt.is_empty());

    let Some(prompt) = prompt else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(INVALID_PROMPT_ERROR)),
        ));
    };

    let Some(provider) = state.provider.as_ref() else {
        tracing::error!("doodle request rejected: no API key configured");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(MISSING_KEY_ERROR)),
        ));
    };

    let request = DoodleRequest::new(prompt);
    match provider.generate(&request).await {
        Ok(doodle) => Ok(Json(GenerateResponse {
            image_url: doodle.to_data_url(),
        })),
        Err(err) => Err(error_response(err)),
    }
}

fn error_response(err: DoodleError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        DoodleError::InvalidRequest(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(INVALID_PROMPT_ERROR)),
        ),
        DoodleError::Auth(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(MISSING_KEY_ERROR)),
        ),
        DoodleError::Api { status, message } => {
            tracing::error!(status, %message, "upstream completion failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(UPSTREAM_ERROR, message)),
            )
        }
        DoodleError::MissingSvg => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(MALFORMED_OUTPUT_ERROR)),
        ),
        other => {
            tracing::error!(error = %other, "doodle generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(INTERNAL_ERROR, other.to_string())),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doodle::providers::MockDoodleProvider;
    use crate::doodle::Doodle;
    use serde_json::json;

    const FRAGMENT: &str = r##"<svg width="400" height="300"><rect fill="#f4e4c3"/></svg>"##;

    fn state_with(mock: Arc<MockDoodleProvider>) -> AppState {
        AppState::with_provider(mock)
    }

    #[tokio::test]
    async fn test_generate_returns_validated_data_url() {
        let mock = Arc::new(MockDoodleProvider::returning_svg(FRAGMENT));
        let body = json!({ "prompt": "robots sharing ideas" });

        let Json(response) = generate_handler(State(state_with(mock.clone())), Some(Json(body)))
            .await
            .expect("generation should succeed");

        let doodle = Doodle::from_data_url(&response.image_url).unwrap();
        assert_eq!(doodle.svg, FRAGMENT);
        assert_eq!(mock.calls(), 1);
        assert_eq!(mock.prompts(), vec!["robots sharing ideas"]);
    }

    #[tokio::test]
    async fn test_generate_rejects_missing_prompt() {
        let mock = Arc::new(MockDoodleProvider::returning_svg(FRAGMENT));

        for body in [
            None,
            Some(Json(json!({}))),
            Some(Json(json!({ "prompt": 17 }))),
            Some(Json(json!({ "prompt": null }))),
            Some(Json(json!({ "prompt": "" }))),
        ] {
            let (status, Json(error)) = generate_handler(State(state_with(mock.clone())), body)
                .await
                .expect_err("prompt validation should fail");

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(error.error, "Missing or invalid 'prompt' in request body.");
            assert!(error.details.is_none());
        }

        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_without_provider_fails_per_request() {
        let body = json!({ "prompt": "a valid prompt" });

        let (status, Json(error)) =
            generate_handler(State(AppState::without_provider()), Some(Json(body)))
                .await
                .expect_err("missing key should fail");

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.error, "OPENAI_API_KEY not configured on the server.");
        assert!(error.details.is_none());
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_500_with_details_and_no_retry() {
        let mock = Arc::new(MockDoodleProvider::returning_error(DoodleError::Api {
            status: 429,
            message: "Rate limit reached".into(),
        }));
        let body = json!({ "prompt": "a valid prompt" });

        let state = state_with(mock.clone());
        let (status, Json(error)) = generate_handler(State(state), Some(Json(body)))
            .await
            .expect_err("upstream failure should surface");

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.error, "Failed to generate SVG.");
        assert_eq!(error.details.as_deref(), Some("Rate limit reached"));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_output_maps_to_500_without_image_url() {
        let mock = Arc::new(MockDoodleProvider::returning_error(DoodleError::MissingSvg));
        let body = json!({ "prompt": "a valid prompt" });

        let (status, Json(error)) = generate_handler(State(state_with(mock)), Some(Json(body)))
            .await
            .expect_err("malformed output should surface");

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.error, "Model did not return a valid SVG.");
        assert!(error.details.is_none());

        let body = serde_json::to_value(&error).unwrap();
        assert!(body.get("imageUrl").is_none());
    }

    #[tokio::test]
    async fn test_whitespace_prompt_rejected_as_client_error() {
        let mock = Arc::new(MockDoodleProvider::returning_error(
            DoodleError::InvalidRequest("prompt must not be empty".into()),
        ));
        let body = json!({ "prompt": "   " });

        let state = state_with(mock.clone());
        let (status, Json(error)) = generate_handler(State(state), Some(Json(body)))
            .await
            .expect_err("whitespace prompt should fail");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.error, "Missing or invalid 'prompt' in request body.");
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_internal_failures_map_to_catch_all_body() {
        let mock = Arc::new(MockDoodleProvider::returning_error(DoodleError::Decode(
            "bad payload".into(),
        )));
        let body = json!({ "prompt": "a valid prompt" });

        let (status, Json(error)) = generate_handler(State(state_with(mock)), Some(Json(body)))
            .await
            .expect_err("internal failure should surface");

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.error, "Internal server error in /api/generate.");
        assert_eq!(error.details.as_deref(), Some("failed to decode: bad payload"));
    }

    #[tokio::test]
    async fn test_asset_handlers_serve_embedded_client() {
        let Html(page) = index_handler().await;
        assert!(page.contains("id=\"tiles\""));

        let response = app_js_handler().await.into_response();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript"
        );

        let response = style_css_handler().await.into_response();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    }
}
