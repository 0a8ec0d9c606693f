//! Groq chat-completion provider.
//!
//! Talks to Groq's OpenAI-compatible `/chat/completions` endpoint and
//! unwraps the first choice into plain Markdown text.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::{CompletionProvider, ProviderError};

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model used when the deployment does not override it.
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Groq provider configuration.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
}

impl GroqConfig {
    pub fn new(api_key: Secret<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_GROQ_MODEL.to_string(),
            base_url: DEFAULT_GROQ_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Groq completion provider.
pub struct GroqCompletionProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqCompletionProvider {
    pub fn new(config: GroqConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }

    fn ensure_configured(&self) -> Result<(), ProviderError> {
        if self.config.api_key.expose_secret().is_empty() {
            return Err(ProviderError::NotConfigured(
                "GROQ_API_KEY not found in environment".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CompletionProvider for GroqCompletionProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    async fn complete(&self, system_prompt: &str, query: &str) -> Result<String, ProviderError> {
        self.ensure_configured()?;

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: query,
                },
            ],
        };

        tracing::debug!(
            model = %self.config.model,
            query_len = query.len(),
            "Sending request to Groq API"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        extract_content(api_response)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        // Groq has no free health endpoint, so readiness only verifies
        // that the credential is present.
        self.ensure_configured()
    }
}

/// Pull the completion text out of the first choice. Empty and absent
/// completions are both invalid: callers rely on a non-empty result.
fn extract_content(response: ChatCompletionResponse) -> Result<String, ProviderError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::InvalidResponse("response contained no choices".to_string()))?
        .message
        .content
        .unwrap_or_default();

    if content.is_empty() {
        return Err(ProviderError::InvalidResponse(
            "completion content was empty".to_string(),
        ));
    }

    Ok(content)
}

// ============================================================================
// Groq API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
