// Factory functions for chat handles. Each call builds a fresh handle; there
// is no caching, validation of the model name, or network access here.

use crate::anthropic::AnthropicChat;
use crate::config::{AnthropicConfig, OpenAIConfig, ProviderConfig, ProviderDetails, ProviderType};
use crate::openai::OpenAIChat;
use crate::traits::ChatClient;
use std::sync::Arc;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-latest";

/// Create an OpenAI chat handle, defaulting to `gpt-4o-mini`.
pub fn create_openai_chat(config: &OpenAIConfig, model: Option<&str>) -> OpenAIChat {
    OpenAIChat::new(config.clone(), model.unwrap_or(DEFAULT_OPENAI_MODEL))
}

/// Create an Anthropic chat handle, defaulting to `claude-3-5-sonnet-latest`.
pub fn create_anthropic_chat(config: &AnthropicConfig, model: Option<&str>) -> AnthropicChat {
    AnthropicChat::new(config.clone(), model.unwrap_or(DEFAULT_ANTHROPIC_MODEL))
}

/// Factory for picking a provider at runtime
pub struct ClientFactory;

impl ClientFactory {
    pub fn default_model(provider: ProviderType) -> &'static str {
        match provider {
            ProviderType::OpenAI => DEFAULT_OPENAI_MODEL,
            ProviderType::Anthropic => DEFAULT_ANTHROPIC_MODEL,
        }
    }

    /// Create a chat client from provider configuration
    pub fn create_chat_client(config: &ProviderConfig, model: Option<&str>) -> Arc<dyn ChatClient> {
        match &config.details {
            ProviderDetails::OpenAI(openai) => Arc::new(create_openai_chat(openai, model)),
            ProviderDetails::Anthropic(anthropic) => Arc::new(create_anthropic_chat(anthropic, model)),
        }
    }
}
