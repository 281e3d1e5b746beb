// Anthropic-specific client implementation

use super::wire::{ContentBlock, MessagesRequest, MessagesResponse, WireMessage};
use crate::config::{AnthropicConfig, ProviderType, ANTHROPIC_API_KEY_VAR};
use crate::error::{LlmError, Result};
use crate::traits::{ChatClient, ChatRequest, ChatResponse, TokenUsage};
use crate::types::Message;
use async_trait::async_trait;
use serde_json::Value;

/// Anthropic chat handle (HTTP direct, no SDK)
///
/// Differences from OpenAI:
/// - Auth header: `x-api-key` plus a mandatory `anthropic-version`
/// - System prompts go in a top-level `system` field, not in `messages`
/// - `max_tokens` is required on every request
#[derive(Debug, Clone)]
pub struct AnthropicChat {
    http_client: reqwest::Client,
    config: AnthropicConfig,
    model: String,
}

impl AnthropicChat {
    pub fn new(config: AnthropicConfig, model: impl Into<String>) -> Self {
        let model = model.into();
        tracing::debug!(model = %model, base_url = %config.base_url(), "Created Anthropic chat handle");

        Self {
            http_client: reqwest::Client::new(),
            config,
            model,
        }
    }

    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    fn build_messages_request<'a>(&'a self, request: &'a ChatRequest) -> MessagesRequest<'a> {
        let mut system_parts = Vec::new();
        let mut messages = Vec::with_capacity(request.messages.len());

        for message in &request.messages {
            match message {
                Message::System { content } => system_parts.push(content.as_str()),
                other => messages.push(WireMessage {
                    role: other.role().as_str(),
                    content: other.content(),
                }),
            }
        }

        let options = &request.options;
        MessagesRequest {
            model: &self.model,
            max_tokens: options.max_tokens.unwrap_or(self.config.max_tokens),
            system: (!system_parts.is_empty()).then(|| system_parts.join("\n\n")),
            messages,
            temperature: options.temperature,
            stop_sequences: options.stop.as_deref(),
        }
    }

    fn parse_messages_response(raw: Value) -> Result<ChatResponse> {
        let response: MessagesResponse = serde_json::from_value(raw.clone())?;

        let content = response
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(ChatResponse {
            content,
            model: response.model,
            finish_reason: response.stop_reason,
            usage: response.usage.map(|u| TokenUsage {
                input_tokens: u.input_tokens,
                output_tokens: u.output_tokens,
                total_tokens: u.input_tokens.saturating_add(u.output_tokens),
            }),
            raw,
        })
    }
}

#[async_trait]
impl ChatClient for AnthropicChat {
    fn provider(&self) -> ProviderType {
        ProviderType::Anthropic
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
                provider: ProviderType::Anthropic,
                env_var: ANTHROPIC_API_KEY_VAR,
            })?;

        let body = self.build_messages_request(&request);
        if body.messages.is_empty() {
            return Err(LlmError::InvalidRequest(
                "Anthropic requires at least one user or assistant message".to_string(),
            ));
        }

        let url = format!("{}/v1/messages", self.config.base_url().trim_end_matches('/'));

        tracing::debug!(model = %self.model, messages = body.messages.len(), "Sending Anthropic messages request");

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.config.api_version)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LlmError::from_response(ProviderType::Anthropic, response).await);
        }

        let raw: Value = response.json().await?;
        Self::parse_messages_response(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ChatOptions;

    #[test]
    fn test_system_messages_are_lifted() {
        let chat = AnthropicChat::new(AnthropicConfig::default(), "claude-3-5-sonnet-latest");
        let request = ChatRequest::new(vec![
            Message::system("You are terse."),
            Message::system("Answer in English."),
            Message::human("hi"),
            Message::ai("hello"),
        ]);

        let body = serde_json::to_value(chat.build_messages_request(&request)).unwrap();
        assert_eq!(body["system"], "You are terse.\n\nAnswer in English.");
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][1]["role"], "assistant");
        assert_eq!(body["max_tokens"], 1024);
    }

    #[test]
    fn test_request_max_tokens_overrides_config() {
        let chat = AnthropicChat::new(AnthropicConfig::default().with_max_tokens(2048), "claude-3-haiku");
        let request = ChatRequest::new(vec![Message::human("hi")])
            .with_options(ChatOptions::new().max_tokens(10));

        let body = serde_json::to_value(chat.build_messages_request(&request)).unwrap();
        assert_eq!(body["max_tokens"], 10);
        assert!(body.get("system").is_none());
    }

    #[test]
    fn test_parse_skips_non_text_blocks() {
        let raw = serde_json::json!({
            "model": "claude-3-5-sonnet-20241022",
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "Hello"},
                {"type": "text", "text": " there"}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 5, "output_tokens": 2}
        });

        let response = AnthropicChat::parse_messages_response(raw).unwrap();
        assert_eq!(response.content, "Hello there");
        assert_eq!(response.finish_reason.as_deref(), Some("end_turn"));
        assert_eq!(response.usage.unwrap().total_tokens, 7);
    }

    #[test]
    fn test_usage_total_saturates() {
        let raw = serde_json::json!({
            "content": [{"type": "text", "text": "ok"}],
            "usage": {"input_tokens": u32::MAX, "output_tokens": 10}
        });

        let usage = AnthropicChat::parse_messages_response(raw).unwrap().usage.unwrap();
        assert_eq!(usage.total_tokens, u32::MAX);
    }
}
