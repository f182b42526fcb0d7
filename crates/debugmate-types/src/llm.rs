//! Completion provider request types and errors.
//!
//! The provider interface is deliberately synchronous from the caller's
//! perspective: one ordered message list in, one reply string out. No
//! streaming is consumed anywhere in the backend.

use serde::{Deserialize, Serialize};

use crate::chat::MessageRole;

/// A role-tagged message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: MessageRole,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Request to a completion provider.
///
/// `messages` is ordered; the system prompt is always the first element by
/// construction in the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
}

/// Errors from completion provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited")]
    RateLimited,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_message_constructors() {
        assert_eq!(PromptMessage::system("s").role, MessageRole::System);
        assert_eq!(PromptMessage::user("u").role, MessageRole::User);
        assert_eq!(PromptMessage::assistant("a").role, MessageRole::Assistant);
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: quota exceeded");
    }
}
