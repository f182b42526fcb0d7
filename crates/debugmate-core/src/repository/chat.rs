//! ChatRepository trait definition.
//!
//! Sessions are created once per project and read-only afterwards; messages
//! are append-only and ordered by ascending id.

use debugmate_types::chat::{Message, MessageRole, Session};
use debugmate_types::error::RepositoryError;
use debugmate_types::project::Project;

/// Repository trait for session and message persistence.
///
/// Implementations live in debugmate-infra (e.g. `SqliteChatRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ChatRepository: Send + Sync {
    /// Create a new session for a project.
    fn create_session(
        &self,
        project_id: i64,
    ) -> impl std::future::Future<Output = Result<Session, RepositoryError>> + Send;

    /// Load a session together with its owning project (full row, needed
    /// for the ownership check and prompt composition).
    fn get_session_with_project(
        &self,
        session_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<(Session, Project)>, RepositoryError>> + Send;

    /// Append a message to a session.
    fn save_message(
        &self,
        session_id: i64,
        role: MessageRole,
        content: &str,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// Load the full message history of a session in ascending id order.
    fn list_messages(
        &self,
        session_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;
}
