//! CompletionProvider trait definition.
//!
//! Uses native async fn in traits (RPITIT, Rust 2024 edition). The
//! conversation workflows only ever need a single reply string per ordered
//! message list, so there is no streaming surface here.

use debugmate_types::llm::{CompletionRequest, LlmError};

/// Trait for completion provider backends (OpenAI-compatible APIs).
///
/// Implementations live in debugmate-infra (e.g. `OpenAiProvider`). A reply
/// with missing or empty content is a valid empty string, not an error;
/// implementations apply that fallback before returning.
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g. "openai").
    fn name(&self) -> &str;

    /// Send an ordered message list and receive the single assistant reply.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}
