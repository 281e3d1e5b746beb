// Explicit provider configuration. Nothing in this crate reads the process
// environment on its own; callers build a config value and pass it in.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const ANTHROPIC_BASE_URL_VAR: &str = "ANTHROPIC_BASE_URL";

pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Type of LLM provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    OpenAI,
    Anthropic,
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderType::OpenAI => write!(f, "OpenAI"),
            ProviderType::Anthropic => write!(f, "Anthropic"),
        }
    }
}

/// Configuration for OpenAI provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenAIConfig {
    /// Missing keys are tolerated until the first request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for OpenAI API (optional, defaults to https://api.openai.com/v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_API_BASE)
    }
}

/// Configuration for Anthropic provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Value of the `anthropic-version` header
    #[serde(default = "default_anthropic_version")]
    pub api_version: String,
    /// The Messages API requires `max_tokens`; used when a request sets none.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_anthropic_version() -> String {
    ANTHROPIC_API_VERSION.to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            api_version: default_anthropic_version(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl AnthropicConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(ANTHROPIC_API_BASE)
    }
}

/// Provider-specific configuration details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderDetails {
    OpenAI(OpenAIConfig),
    Anthropic(AnthropicConfig),
}

/// Complete provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(flatten)]
    pub details: ProviderDetails,
}

impl ProviderConfig {
    /// Create OpenAI provider config
    pub fn openai(config: OpenAIConfig) -> Self {
        Self {
            details: ProviderDetails::OpenAI(config),
        }
    }

    /// Create Anthropic provider config
    pub fn anthropic(config: AnthropicConfig) -> Self {
        Self {
            details: ProviderDetails::Anthropic(config),
        }
    }

    /// Get the provider type
    pub fn provider_type(&self) -> ProviderType {
        match self.details {
            ProviderDetails::OpenAI(_) => ProviderType::OpenAI,
            ProviderDetails::Anthropic(_) => ProviderType::Anthropic,
        }
    }
}

/// Settings for every supported provider, resolved once by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub openai: OpenAIConfig,
    #[serde(default)]
    pub anthropic: AnthropicConfig,
}

impl ProviderSettings {
    /// Read provider settings from the current process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read provider settings through an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            openai: OpenAIConfig {
                api_key: get(OPENAI_API_KEY_VAR),
                base_url: get(OPENAI_BASE_URL_VAR),
            },
            anthropic: AnthropicConfig {
                api_key: get(ANTHROPIC_API_KEY_VAR),
                base_url: get(ANTHROPIC_BASE_URL_VAR),
                ..Default::default()
            },
        }
    }

    pub fn provider(&self, provider: ProviderType) -> ProviderConfig {
        match provider {
            ProviderType::OpenAI => ProviderConfig::openai(self.openai.clone()),
            ProviderType::Anthropic => ProviderConfig::anthropic(self.anthropic.clone()),
        }
    }
}
