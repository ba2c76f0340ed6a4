/// LLM Client — the single point of entry for all completion-service calls in fsgen.
///
/// ARCHITECTURAL RULE: No other module may call Azure OpenAI directly.
/// All LLM interactions MUST go through `CompletionProvider`.
///
/// Sampling parameters are fixed: temperature 0.3, at most 2000 output tokens.
/// One request per call. No retry, no caching.
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[cfg(test)]
pub mod testing;

pub const TEMPERATURE: f32 = 0.3;
pub const MAX_TOKENS: u32 = 2000;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A finished completion: the generated text plus token accounting when the service reports it.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: Option<Usage>,
}

/// The completion capability used by the generator.
///
/// Carried in `AppState` as `Arc<dyn CompletionProvider>` so tests can swap in a fake.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends `prompt` as a single user-role message and returns the generated text.
    async fn complete(&self, prompt: &str) -> Result<Completion, LlmError>;

    /// Deployment or model name, for logs.
    fn model(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    /// Null when the service's content filter suppresses the answer.
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the content of the first choice, if it carries any text.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct AzureError {
    error: AzureErrorBody,
}

#[derive(Debug, Deserialize)]
struct AzureErrorBody {
    message: String,
}

/// Azure OpenAI chat-completions client bound to one deployment.
#[derive(Clone)]
pub struct AzureOpenAiClient {
    client: Client,
    endpoint: String,
    api_version: String,
    deployment: String,
    api_key: Secret<String>,
}

impl AzureOpenAiClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            endpoint: config.azure_endpoint.clone(),
            api_version: config.azure_api_version.clone(),
            deployment: config.azure_deployment.clone(),
            api_key: config.azure_api_key.clone(),
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint.trim_end_matches('/'),
            self.deployment
        )
    }
}

#[async_trait]
impl CompletionProvider for AzureOpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<Completion, LlmError> {
        let request_body = build_request(prompt);

        let response = self
            .client
            .post(self.completions_url())
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let body = response.text().await?;
        let chat: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        let text = chat.text().ok_or(LlmError::EmptyContent)?.to_string();

        Ok(Completion {
            text,
            usage: chat.usage,
        })
    }

    fn model(&self) -> &str {
        &self.deployment
    }
}

fn build_request(prompt: &str) -> ChatRequest<'_> {
    ChatRequest {
        messages: vec![ChatMessage {
            role: "user",
            content: prompt,
        }],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

/// Pulls `error.message` out of an Azure error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<AzureError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
