use serde::{Deserialize, Serialize};

/// Provider-agnostic chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    /// System prompt (instructions)
    System { content: String },

    /// User/Human message
    #[serde(rename = "user")]
    Human { content: String },

    /// Assistant/AI message
    #[serde(rename = "assistant")]
    AI { content: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self::System {
            content: content.into(),
        }
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self::Human {
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::AI {
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Message::System { .. } => Role::System,
            Message::Human { .. } => Role::User,
            Message::AI { .. } => Role::Assistant,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Message::System { content }
            | Message::Human { content }
            | Message::AI { content } => content,
        }
    }
}
