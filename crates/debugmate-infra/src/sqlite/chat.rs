//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `debugmate-core` using sqlx with split
//! read/write pools: raw queries, private Row structs, writer pool for the
//! append-only message inserts.

use chrono::{DateTime, Utc};
use sqlx::Row;

use debugmate_core::repository::chat::ChatRepository;
use debugmate_types::chat::{Message, MessageRole, Session};
use debugmate_types::error::RepositoryError;
use debugmate_types::project::Project;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Message.
///
/// Shared with the project detail query in `project.rs`.
pub(crate) struct MessageRow {
    id: i64,
    session_id: i64,
    role: String,
    content: String,
    created_at: String,
}

impl MessageRow {
    pub(crate) fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }

    pub(crate) fn into_message(self) -> Result<Message, RepositoryError> {
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        Ok(Message {
            id: self.id,
            session_id: self.session_id,
            role,
            content: self.content,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

/// Internal row type for mapping SQLite rows to the full domain Project.
struct ProjectRow {
    id: i64,
    user_id: String,
    repo_url: String,
    app_url: Option<String>,
    supabase_key: Option<String>,
    vercel_key: Option<String>,
    other_api_keys: Option<String>,
    bug_description: String,
    created_at: String,
}

impl ProjectRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            repo_url: row.try_get("repo_url")?,
            app_url: row.try_get("app_url")?,
            supabase_key: row.try_get("supabase_key")?,
            vercel_key: row.try_get("vercel_key")?,
            other_api_keys: row.try_get("other_api_keys")?,
            bug_description: row.try_get("bug_description")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_project(self) -> Result<Project, RepositoryError> {
        Ok(Project {
            id: self.id,
            user_id: self.user_id,
            repo_url: self.repo_url,
            app_url: self.app_url,
            supabase_key: self.supabase_key,
            vercel_key: self.vercel_key,
            other_api_keys: self.other_api_keys,
            bug_description: self.bug_description,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl ChatRepository for SqliteChatRepository {
    async fn create_session(&self, project_id: i64) -> Result<Session, RepositoryError> {
        let result = sqlx::query("INSERT INTO sessions (project_id) VALUES (?)")
            .bind(project_id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(Session {
            id: result.last_insert_rowid(),
            project_id,
        })
    }

    async fn get_session_with_project(
        &self,
        session_id: i64,
    ) -> Result<Option<(Session, Project)>, RepositoryError> {
        let row = sqlx::query("SELECT id, project_id FROM sessions WHERE id = ?")
            .bind(session_id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let session = Session {
            id: row
                .try_get("id")
                .map_err(|e| RepositoryError::Query(e.to_string()))?,
            project_id: row
                .try_get("project_id")
                .map_err(|e| RepositoryError::Query(e.to_string()))?,
        };

        let project_row = sqlx::query("SELECT * FROM projects WHERE id = ?")
            .bind(session.project_id)
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let project = ProjectRow::from_row(&project_row)
            .map_err(|e| RepositoryError::Query(e.to_string()))?
            .into_project()?;

        Ok(Some((session, project)))
    }

    async fn save_message(
        &self,
        session_id: i64,
        role: MessageRole,
        content: &str,
    ) -> Result<Message, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO messages (session_id, role, content, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(session_id)
        .bind(role.to_string())
        .bind(content)
        .bind(format_datetime(&created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(Message {
            id: result.last_insert_rowid(),
            session_id,
            role,
            content: content.to_string(),
            created_at,
        })
    }

    async fn list_messages(&self, session_id: i64) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM messages WHERE session_id = ? ORDER BY id ASC")
            .bind(session_id)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }
}
