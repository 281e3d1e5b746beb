// OpenAI-specific client implementation

use super::wire::{ChatCompletion, ChatCompletionRequest};
use crate::config::{OpenAIConfig, ProviderType, OPENAI_API_KEY_VAR};
use crate::error::{LlmError, Result};
use crate::traits::{ChatClient, ChatRequest, ChatResponse, TokenUsage};
use async_trait::async_trait;
use serde_json::Value;

/// OpenAI chat handle (HTTP direct, no SDK)
///
/// Building one never touches the network; credentials are checked when the
/// first request is made.
#[derive(Debug, Clone)]
pub struct OpenAIChat {
    http_client: reqwest::Client,
    config: OpenAIConfig,
    model: String,
}

impl OpenAIChat {
    pub fn new(config: OpenAIConfig, model: impl Into<String>) -> Self {
        let model = model.into();
        tracing::debug!(model = %model, base_url = %config.base_url(), "Created OpenAI chat handle");

        Self {
            http_client: reqwest::Client::new(),
            config,
            model,
        }
    }

    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    /// o1 and gpt-5 models take `max_completion_tokens` and reject `temperature`
    pub fn is_reasoning_model(&self) -> bool {
        self.model.starts_with("o1") || self.model.starts_with("gpt-5")
    }

    fn build_chat_request<'a>(&'a self, request: &'a ChatRequest) -> ChatCompletionRequest<'a> {
        let options = &request.options;
        let reasoning = self.is_reasoning_model();

        ChatCompletionRequest {
            model: &self.model,
            messages: &request.messages,
            temperature: options.temperature.filter(|_| !reasoning),
            max_tokens: options.max_tokens.filter(|_| !reasoning),
            max_completion_tokens: options.max_tokens.filter(|_| reasoning),
            stop: options.stop.as_deref(),
        }
    }

    fn parse_chat_response(raw: Value) -> Result<ChatResponse> {
        let completion: ChatCompletion = serde_json::from_value(raw.clone())?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_string()))?;

        Ok(ChatResponse {
            content: choice.message.content.unwrap_or_default(),
            model: completion.model,
            finish_reason: choice.finish_reason,
            usage: completion.usage.map(|u| TokenUsage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            raw,
        })
    }
}

#[async_trait]
impl ChatClient for OpenAIChat {
    fn provider(&self) -> ProviderType {
        ProviderType::OpenAI
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredentials {
                provider: ProviderType::OpenAI,
                env_var: OPENAI_API_KEY_VAR,
            })?;

        let url = format!("{}/chat/completions", self.config.base_url().trim_end_matches('/'));
        let body = self.build_chat_request(&request);

        tracing::debug!(model = %self.model, messages = request.messages.len(), "Sending OpenAI chat request");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LlmError::from_response(ProviderType::OpenAI, response).await);
        }

        let raw: Value = response.json().await?;
        Self::parse_chat_response(raw)
    }
}
