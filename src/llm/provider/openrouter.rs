use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::constants::llm::DEFAULT_ENDPOINT;
use crate::error::{Result, ShipitError};
use crate::llm::CommitMessageGenerator;
use crate::llm::prompt::build_commit_prompt;

/// OpenRouter chat completions client (OpenAI-compatible API)
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<MessagePayload<'a>>,
}

#[derive(Serialize)]
struct MessagePayload<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<MessageContent>,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

impl OpenRouterClient {
    /// Client for the public OpenRouter endpoint.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_endpoint(credentials, DEFAULT_ENDPOINT)
    }

    /// Client for an explicit OpenAI-compatible chat completions URL.
    pub fn with_endpoint(credentials: &Credentials, endpoint: &str) -> Result<Self> {
        Ok(Self {
            client: super::create_http_client()?,
            api_key: credentials.api_key.clone(),
            endpoint: endpoint.to_string(),
            model: credentials.model.clone(),
        })
    }

    /// Model identifier sent with each request.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn call_api(&self, prompt: &str) -> Result<Option<String>> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![MessagePayload {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(
            "OpenRouter API request: model={}, prompt length={} chars",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        tracing::debug!("OpenRouter API response status: {}", status);
        tracing::debug!("OpenRouter API response body: {}", response_text);

        if !status.is_success() {
            return Err(ShipitError::LlmApi {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let response_body: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            ShipitError::Llm(format!(
                "Failed to parse OpenRouter response: {}. Raw response: {}",
                e, response_text
            ))
        })?;

        Ok(response_body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content))
    }
}

#[async_trait]
impl CommitMessageGenerator for OpenRouterClient {
    async fn generate(&self, diff: &str) -> Result<Option<String>> {
        let prompt = build_commit_prompt(diff);
        let response = self.call_api(&prompt).await?;
        tracing::debug!("Generated commit message: {:?}", response);
        Ok(response)
    }

    fn name(&self) -> &str {
        "openrouter"
    }
}
