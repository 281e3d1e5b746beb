//! Prelude module for convenient imports
//!
//! ```rust
//! use techtide_agents::prelude::*;
//! ```

pub use crate::{
    build_graph, create_anthropic_chat, create_openai_chat, run_demo, ChatClient, ChatOptions,
    ChatRequest, CompiledGraph, DemoState, GraphBuilder, GraphState, Message, Node,
    ProviderSettings,
};
