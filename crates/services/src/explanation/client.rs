use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ExplanationProvider;
use super::config::ExplanationConfig;
use crate::error::ExplanationError;

/// OpenAI-compatible chat-completion client. One request per call, no retry.
#[derive(Clone)]
pub struct ExplanationService {
    client: Client,
    config: Option<ExplanationConfig>,
}

impl ExplanationService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ExplanationConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<ExplanationConfig>) -> Self {
        let client = match &config {
            Some(config) => Client::builder()
                .timeout(config.timeout)
                .build()
                .unwrap_or_else(|err| {
                    warn!(error = %err, "http client setup failed, using defaults without timeout");
                    Client::new()
                }),
            None => Client::new(),
        };
        Self { client, config }
    }

    /// Send `prompt` as a single user message and return the trimmed reply.
    ///
    /// # Errors
    ///
    /// Returns `ExplanationError::Disabled` without touching the network when no
    /// credential is configured, `Rejected` for 4xx responses, `HttpStatus` for
    /// other failures, and `EmptyResponse` when the reply has no text.
    pub async fn generate(&self, prompt: &str) -> Result<String, ExplanationError> {
        let config = self
            .config
            .as_ref()
            .ok_or(ExplanationError::Disabled)?;

        let url = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        debug!(model = %config.model, "requesting explanation");
        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() {
            let detail = match response.text().await {
                Ok(body) => error_detail(&body),
                Err(err) => format!("<unreadable body: {err}>"),
            };
            return Err(ExplanationError::Rejected { status, detail });
        }
        if !status.is_success() {
            return Err(ExplanationError::HttpStatus(status));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(ExplanationError::EmptyResponse)?;

        Ok(content)
    }
}

#[async_trait]
impl ExplanationProvider for ExplanationService {
    fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn explain(&self, prompt: &str) -> Result<String, ExplanationError> {
        self.generate(prompt).await
    }
}

/// Provider message from an error body, falling back to the raw text.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|parsed| parsed.error.message)
        .unwrap_or_else(|| body.trim().to_string())
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}
