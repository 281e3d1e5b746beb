//! # TechTide Agents
//!
//! Glue between two independent pieces:
//!
//! - **`techtide-llm`**: chat handles for OpenAI and Anthropic, built from an
//!   explicit [`ProviderSettings`] value
//! - **`techtide-graph`**: a typed, linear state graph and the two-node demo
//!
//! ```rust,no_run
//! use techtide_agents::prelude::*;
//!
//! let settings = ProviderSettings::from_env();
//! let chat = create_openai_chat(&settings.openai, None);
//! assert_eq!(chat.model(), "gpt-4o-mini");
//!
//! let state = run_demo().unwrap();
//! assert_eq!(state.text, "AB");
//! ```

pub mod config;
pub mod logging;
pub mod prelude;

pub use techtide_graph::{
    build_graph, node_a, node_b, node_fn, run_demo, CompiledGraph, DemoState, DemoStateUpdate,
    GraphBuilder, GraphError, GraphState, Node, RunOutput, StepRecord,
};

pub use techtide_llm::{
    create_anthropic_chat, create_openai_chat, AnthropicChat, AnthropicConfig, ChatClient,
    ChatOptions, ChatRequest, ChatResponse, ClientFactory, LlmError, Message, OpenAIChat,
    OpenAIConfig, ProviderConfig, ProviderSettings, ProviderType,
};
