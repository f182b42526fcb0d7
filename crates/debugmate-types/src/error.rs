use thiserror::Error;

use crate::llm::LlmError;

/// Errors from repository operations (used by trait definitions in
/// debugmate-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors from the conversation workflows.
///
/// The HTTP layer maps these deterministically: `Validation` answers 400,
/// `NotFound` answers 404 (ownership violations included, never 403),
/// `Repository` and `Provider` collapse to the same generic 500.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("completion provider error: {0}")]
    Provider(#[from] LlmError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_conversation_error_messages_pass_through() {
        let err = ConversationError::Validation("Missing fields".to_string());
        assert_eq!(err.to_string(), "Missing fields");
        let err = ConversationError::NotFound("Session not found or access denied".to_string());
        assert_eq!(err.to_string(), "Session not found or access denied");
    }

    #[test]
    fn test_conversation_error_from_repository() {
        let err: ConversationError = RepositoryError::NotFound.into();
        assert!(matches!(err, ConversationError::Repository(_)));
    }
}
