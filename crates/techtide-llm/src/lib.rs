pub mod anthropic;
pub mod config;
pub mod error;
pub mod factory;
pub mod openai;
pub mod traits;
pub mod types;

pub use anthropic::AnthropicChat;
pub use config::{
    AnthropicConfig, OpenAIConfig, ProviderConfig, ProviderDetails, ProviderSettings, ProviderType,
};
pub use error::{LlmError, Result};
pub use factory::{
    create_anthropic_chat, create_openai_chat, ClientFactory, DEFAULT_ANTHROPIC_MODEL,
    DEFAULT_OPENAI_MODEL,
};
pub use openai::OpenAIChat;
pub use traits::{ChatClient, ChatOptions, ChatRequest, ChatResponse, TokenUsage};
pub use types::{Message, Role};
