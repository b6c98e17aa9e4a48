//! OpenRouterApiAgent - Direct REST API implementation for OpenRouter chat completions.
//!
//! OpenRouter exposes an OpenAI-compatible `/chat/completions` endpoint, so the
//! request and response shapes below follow that schema.

use dairo_core::agent::CompletionAgent;
use dairo_core::config::DEFAULT_BASE_URL;
use dairo_core::{DairoError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
const APP_TITLE: &str = "Dairo";

/// Agent implementation that talks to the OpenRouter HTTP API.
#[derive(Clone)]
pub struct OpenRouterApiAgent {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    max_tokens: Option<u32>,
}

impl OpenRouterApiAgent {
    /// Creates a new agent with its own HTTP client.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_shared_client(Client::new(), api_key, model)
    }

    /// Creates an agent on top of an existing (pooled, pre-configured) HTTP client.
    pub fn with_shared_client(
        client: Client,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint_for(DEFAULT_BASE_URL),
            max_tokens: None,
        }
    }

    /// Points the agent at a different API root, e.g. a proxy or a test server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.endpoint = endpoint_for(base_url);
        self
    }

    /// Sets the maximum number of tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send_request(&self, body: &ChatCompletionRequest<'_>) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("X-Title", APP_TITLE)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(
                    "[OpenRouterApiAgent] Request failed (connect: {}, timeout: {}): {}",
                    err.is_connect(),
                    err.is_timeout(),
                    err
                );
                DairoError::upstream("OpenRouter API request failed.")
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenRouter error body".to_string());
            return Err(map_http_error(status, &body_text));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            tracing::error!("[OpenRouterApiAgent] Failed to parse response: {}", err);
            DairoError::upstream("Failed to parse OpenRouter response.")
        })?;

        if let Some(error) = &parsed.error {
            tracing::warn!(
                "[OpenRouterApiAgent] Provider reported an error with a success status: {}",
                error.message
            );
        }

        Ok(extract_text_response(parsed))
    }
}

#[async_trait::async_trait]
impl CompletionAgent for OpenRouterApiAgent {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        tracing::debug!(
            "[OpenRouterApiAgent] Sending {} chars to model {}",
            prompt.len(),
            self.model
        );

        self.send_request(&request).await
    }
}

impl std::fmt::Debug for OpenRouterApiAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterApiAgent")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

fn endpoint_for(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CHAT_COMPLETIONS_PATH)
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Content of the first choice; empty when the provider sent none.
fn extract_text_response(response: ChatCompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default()
}

fn map_http_error(status: StatusCode, body: &str) -> DairoError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.to_string());
    tracing::error!("[OpenRouterApiAgent] API error {}: {}", status, detail);

    let reason = status.canonical_reason().unwrap_or(status.as_str());
    DairoError::upstream_status(status.as_u16(), format!("OpenRouter API error: {}", reason))
}
