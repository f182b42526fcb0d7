//! OpenAI completion provider implementation.
//!
//! Uses [`async_openai`] for type-safe request/response handling. Only the
//! non-streaming chat completion surface is used: the conversation
//! workflows need a single reply string per ordered message list.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};

use debugmate_core::llm::provider::CompletionProvider;
use debugmate_types::chat::MessageRole;
use debugmate_types::llm::{CompletionRequest, LlmError};

/// OpenAI-backed implementation of `CompletionProvider`.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    provider_name: String,
}

impl OpenAiProvider {
    /// Create a provider against the default OpenAI endpoint.
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Client::with_config(OpenAIConfig::new().with_api_key(api_key)),
            provider_name: "openai".to_string(),
        }
    }

    /// Create a provider against an OpenAI-compatible base URL.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: Client::with_config(
                OpenAIConfig::new()
                    .with_api_key(api_key)
                    .with_api_base(base_url),
            ),
            provider_name: "openai_compatible".to_string(),
        }
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic
    /// [`CompletionRequest`], preserving message order exactly.
    fn build_request(
        &self,
        request: &CompletionRequest,
    ) -> Result<CreateChatCompletionRequest, LlmError> {
        if request.model.is_empty() {
            return Err(LlmError::InvalidRequest("empty model id".to_string()));
        }

        let mut messages: Vec<ChatCompletionRequestMessage> =
            Vec::with_capacity(request.messages.len());

        for msg in &request.messages {
            let oai_msg = match msg.role {
                MessageRole::System => {
                    ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                        content: ChatCompletionRequestSystemMessageContent::Text(
                            msg.content.clone(),
                        ),
                        name: None,
                    })
                }
                MessageRole::User => {
                    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(msg.content.clone()),
                        name: None,
                    })
                }
                MessageRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(ChatCompletionRequestAssistantMessage {
                        content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                            msg.content.clone(),
                        )),
                        refusal: None,
                        name: None,
                        audio: None,
                        tool_calls: None,
                        function_call: None,
                    })
                }
            };
            messages.push(oai_msg);
        }

        Ok(CreateChatCompletionRequest {
            model: request.model.clone(),
            messages,
            ..Default::default()
        })
    }
}

impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let oai_request = self.build_request(request)?;

        let response = self
            .client
            .chat()
            .create(oai_request)
            .await
            .map_err(map_openai_error)?;

        // A missing or empty first-choice content is a valid empty reply,
        // not an error.
        Ok(response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default())
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "authentication_error"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => match reqwest_err.status().map(|s| s.as_u16()) {
            Some(401) => LlmError::AuthenticationFailed,
            Some(429) => LlmError::RateLimited,
            _ => LlmError::Provider {
                message: err.to_string(),
            },
        },
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debugmate_types::llm::PromptMessage;

    #[test]
    fn test_provider_name() {
        let provider = OpenAiProvider::new("sk-test");
        assert_eq!(provider.name(), "openai");
        let compat = OpenAiProvider::with_base_url("sk-test", "http://localhost:8080/v1");
        assert_eq!(compat.name(), "openai_compatible");
    }

    #[test]
    fn test_build_request_preserves_order_and_roles() {
        let provider = OpenAiProvider::new("sk-test");
        let request = CompletionRequest {
            model: "gpt-4".to_string(),
            messages: vec![
                PromptMessage::system("Be helpful"),
                PromptMessage::user("Login fails"),
                PromptMessage::assistant("Check the callback"),
                PromptMessage::user("Still broken"),
            ],
        };

        let oai_req = provider.build_request(&request).unwrap();
        assert_eq!(oai_req.model, "gpt-4");
        assert_eq!(oai_req.messages.len(), 4);
        assert!(matches!(
            oai_req.messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(
            oai_req.messages[2],
            ChatCompletionRequestMessage::Assistant(_)
        ));
        assert!(oai_req.stream.is_none());
    }

    #[test]
    fn test_build_request_rejects_empty_model() {
        let provider = OpenAiProvider::new("sk-test");
        let request = CompletionRequest {
            model: String::new(),
            messages: vec![PromptMessage::user("hi")],
        };
        let err = provider.build_request(&request).unwrap_err();
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }

    #[test]
    fn test_map_openai_error_auth() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Incorrect API key provided".to_string(),
            r#type: Some("authentication_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[test]
    fn test_map_openai_error_rate_limit() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Rate limit exceeded".to_string(),
            r#type: Some("rate_limit_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::RateLimited));
    }

    #[test]
    fn test_map_openai_error_invalid_argument() {
        use async_openai::error::OpenAIError;
        let err = map_openai_error(OpenAIError::InvalidArgument("bad arg".to_string()));
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }
}
