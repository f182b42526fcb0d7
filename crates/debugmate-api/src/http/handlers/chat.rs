//! Chat HTTP handler.
//!
//! Endpoint:
//! - POST /api/chat - Post a message to a session, get the assistant's reply

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::state::AppState;

/// Request body for a chat turn. Both fields are optional at the wire level
/// so an absent field answers the same 400 as an empty one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub assistant_message: String,
}

/// POST /api/chat - Append a user message and return the assistant's reply.
pub async fn post_message(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let (Some(session_id), Some(content)) = (body.session_id, body.content) else {
        return Err(AppError::Validation("Missing data".to_string()));
    };

    let reply = state
        .conversation
        .post_message(&user_id, session_id, &content)
        .await?;

    Ok(Json(ChatResponse {
        assistant_message: reply,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_accepts_camel_case() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"sessionId": 7, "content": "still broken"}"#).unwrap();
        assert_eq!(req.session_id, Some(7));
        assert_eq!(req.content.as_deref(), Some("still broken"));
    }

    #[test]
    fn test_chat_request_tolerates_missing_fields() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.session_id.is_none());
        assert!(req.content.is_none());
    }

    #[test]
    fn test_chat_response_serializes_camel_case() {
        let resp = ChatResponse {
            assistant_message: "Check the callback".to_string(),
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["assistantMessage"], "Check the callback");
    }
}
