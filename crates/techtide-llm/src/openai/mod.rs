pub mod client;
mod wire;

pub use client::OpenAIChat;
