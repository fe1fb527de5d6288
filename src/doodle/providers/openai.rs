//! OpenAI chat-completions doodle provider (gpt-4.1-mini).

use crate::doodle::prompt;
use crate::doodle::provider::DoodleProvider;
use crate::doodle::svg::extract_svg;
use crate::doodle::types::{Doodle, DoodleMetadata, DoodleRequest};
use crate::error::{DoodleError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const DEFAULT_MODEL: &str = "gpt-4.1-mini";
const DEFAULT_MAX_TOKENS: u32 = 1800;
const DEFAULT_TEMPERATURE: f32 = 0.9;

/// Detail string used when the upstream error body carries no message.
const UNKNOWN_UPSTREAM_ERROR: &str = "Unknown error from OpenAI.";

/// Builder for [`OpenAiDoodleProvider`].
#[derive(Debug, Clone)]
pub struct OpenAiDoodleProviderBuilder {
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl Default for OpenAiDoodleProviderBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl OpenAiDoodleProviderBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key. Falls back to `OPENAI_API_KEY` env var.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the chat model (default: `gpt-4.1-mini`).
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the completion token budget (default: 1800).
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the sampling temperature (default: 0.9).
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Builds the provider, resolving the API key.
    pub fn build(self) -> Result<OpenAiDoodleProvider> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                DoodleError::Auth("OPENAI_API_KEY not set and no API key provided".into())
            })?;

        Ok(OpenAiDoodleProvider {
            client: reqwest::Client::new(),
            api_key,
            model: self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        })
    }
}

/// OpenAI chat-completions doodle provider.
///
/// Sends the fixed system directive plus the composed instruction template,
/// then extracts and validates the `<svg>` block from the completion.
pub struct OpenAiDoodleProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiDoodleProvider {
    /// Creates a new `OpenAiDoodleProviderBuilder`.
    pub fn builder() -> OpenAiDoodleProviderBuilder {
        OpenAiDoodleProviderBuilder::new()
    }

    fn parse_error(status: u16, body: &str) -> DoodleError {
        let message = serde_json::from_str::<ChatErrorResponse>(body)
            .ok()
            .and_then(|e| e.error)
            .and_then(|detail| detail.message)
            .unwrap_or_else(|| UNKNOWN_UPSTREAM_ERROR.to_string());

        DoodleError::Api { status, message }
    }
}

#[async_trait]
impl DoodleProvider for OpenAiDoodleProvider {
    async fn generate(&self, request: &DoodleRequest) -> Result<Doodle> {
        if request.prompt.trim().is_empty() {
            return Err(DoodleError::InvalidRequest("prompt must not be empty".into()));
        }

        let start = Instant::now();
        let body = ChatCompletionRequest::for_doodle(&request.prompt, self);

        tracing::debug!(model = %self.model, "requesting doodle completion");

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status.as_u16(), &text));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let raw = completion.first_content().unwrap_or_default();

        let svg = match extract_svg(&raw) {
            Ok(svg) => svg,
            Err(err) => {
                tracing::warn!(output = %raw, "no <svg> element in model output");
                return Err(err);
            }
        };

        let duration_ms = start.elapsed().as_millis() as u64;

        Ok(Doodle::new(
            svg,
            DoodleMetadata {
                model: Some(self.model.clone()),
                duration_ms: Some(duration_ms),
            },
        ))
    }

    fn name(&self) -> &'static str {
        "OpenAI (chat completions)"
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

impl ChatCompletionRequest {
    fn for_doodle(trend: &str, provider: &OpenAiDoodleProvider) -> Self {
        Self {
            model: provider.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: prompt::SYSTEM_DIRECTIVE.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt::compose(trend),
                },
            ],
            max_tokens: provider.max_tokens,
            temperature: provider.temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatErrorResponse {
    #[serde(default)]
    error: Option<ChatErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ChatErrorDetail {
    #[serde(default)]
    message: Option<String>,
}
