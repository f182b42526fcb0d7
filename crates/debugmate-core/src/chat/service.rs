//! Conversation orchestrator composing persistence, prompt composition, and
//! the completion provider into the project and chat workflows.
//!
//! Every operation is a strictly sequential chain of suspending calls. No
//! step retries and no transaction wraps the multi-step writes: a provider
//! failure after the user message was saved leaves that message in place
//! (matching the documented partial-write behavior).

use tracing::{error, info};

use debugmate_types::chat::MessageRole;
use debugmate_types::error::ConversationError;
use debugmate_types::identity::UserId;
use debugmate_types::llm::{CompletionRequest, PromptMessage};
use debugmate_types::project::{NewProject, ProjectDetail, ProjectSummary};

use crate::chat::prompt;
use crate::llm::provider::CompletionProvider;
use crate::repository::chat::ChatRepository;
use crate::repository::project::ProjectRepository;

/// Result of the create-project workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCreated {
    pub project_id: i64,
    pub session_id: i64,
}

/// Orchestrates the project and conversation workflows.
///
/// Generic over its three collaborators to maintain clean architecture
/// (debugmate-core never depends on debugmate-infra); the application layer
/// pins them to the concrete implementations.
pub struct ConversationService<P, C, L>
where
    P: ProjectRepository,
    C: ChatRepository,
    L: CompletionProvider,
{
    project_repo: P,
    chat_repo: C,
    provider: L,
    model: String,
}

impl<P, C, L> ConversationService<P, C, L>
where
    P: ProjectRepository,
    C: ChatRepository,
    L: CompletionProvider,
{
    /// Create a new service with injected collaborators and the model id
    /// used for every provider call.
    pub fn new(project_repo: P, chat_repo: C, provider: L, model: String) -> Self {
        Self {
            project_repo,
            chat_repo,
            provider,
            model,
        }
    }

    /// Access the chat repository (used by the transcript command).
    pub fn chat_repo(&self) -> &C {
        &self.chat_repo
    }

    /// List safe summaries of the user's projects, newest first.
    pub async fn list_projects(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ProjectSummary>, ConversationError> {
        Ok(self.project_repo.list_summaries(user_id).await?)
    }

    /// Load the safe detail view of a project the user owns.
    ///
    /// A missing project and a project owned by someone else answer the same
    /// not-found error so that existence never leaks.
    pub async fn get_project(
        &self,
        user_id: &UserId,
        project_id: i64,
    ) -> Result<ProjectDetail, ConversationError> {
        let detail = self.project_repo.get_detail(project_id).await?;
        match detail {
            Some(detail) if detail.user_id == user_id.0 => Ok(detail),
            _ => Err(ConversationError::NotFound(
                "Not found or access denied".to_string(),
            )),
        }
    }

    /// Create a project with its first session and initial exchange.
    ///
    /// Persists the project, one session, the bug description as the first
    /// user message, and the provider's reply as the first assistant
    /// message -- in that order, with no compensating rollback.
    pub async fn create_project(
        &self,
        user_id: &UserId,
        input: NewProject,
    ) -> Result<ProjectCreated, ConversationError> {
        if input.repo_url.trim().is_empty() || input.bug_description.trim().is_empty() {
            return Err(ConversationError::Validation("Missing fields".to_string()));
        }

        let project = self.project_repo.create_project(user_id, &input).await?;
        let session = self.chat_repo.create_session(project.id).await?;
        self.chat_repo
            .save_message(session.id, MessageRole::User, &project.bug_description)
            .await?;

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                PromptMessage::system(prompt::creation_prompt(&project)),
                PromptMessage::user(project.bug_description.clone()),
            ],
        };
        let reply = self.provider.complete(&request).await.inspect_err(|e| {
            error!(project_id = project.id, "initial completion failed: {e}");
        })?;

        self.chat_repo
            .save_message(session.id, MessageRole::Assistant, &reply)
            .await?;

        info!(
            project_id = project.id,
            session_id = session.id,
            user_id = %user_id,
            "project created"
        );

        Ok(ProjectCreated {
            project_id: project.id,
            session_id: session.id,
        })
    }

    /// Post a user message to a session and return the assistant's reply.
    ///
    /// The system prompt is re-derived from the project's current fields on
    /// every turn and prepended ahead of the full persisted history, so each
    /// provider call carries exactly one system message followed by all
    /// historical user/assistant turns.
    pub async fn post_message(
        &self,
        user_id: &UserId,
        session_id: i64,
        content: &str,
    ) -> Result<String, ConversationError> {
        if content.trim().is_empty() {
            return Err(ConversationError::Validation("Missing data".to_string()));
        }

        let loaded = self.chat_repo.get_session_with_project(session_id).await?;
        let (session, project) = match loaded {
            Some((session, project)) if project.user_id == user_id.0 => (session, project),
            _ => {
                return Err(ConversationError::NotFound(
                    "Session not found or access denied".to_string(),
                ));
            }
        };

        self.chat_repo
            .save_message(session.id, MessageRole::User, content)
            .await?;

        // History includes the message saved just above.
        let history = self.chat_repo.list_messages(session.id).await?;

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(PromptMessage::system(prompt::continuation_prompt(&project)));
        messages.extend(history.into_iter().map(|m| PromptMessage {
            role: m.role,
            content: m.content,
        }));

        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
        };
        let reply = self.provider.complete(&request).await.inspect_err(|e| {
            error!(session_id = session.id, "completion failed: {e}");
        })?;

        self.chat_repo
            .save_message(session.id, MessageRole::Assistant, &reply)
            .await?;

        info!(session_id = session.id, "chat turn completed");

        Ok(reply)
    }
}
