//! SQLite project repository implementation.
//!
//! Implements `ProjectRepository` from `debugmate-core` using sqlx with
//! split read/write pools. The read-side queries select the safe columns
//! only; `supabase_key`, `vercel_key`, and `other_api_keys` never leave this
//! module except through `create_project`'s returned full row.

use chrono::{DateTime, Utc};
use sqlx::Row;

use debugmate_core::repository::project::ProjectRepository;
use debugmate_types::chat::SessionWithMessages;
use debugmate_types::error::RepositoryError;
use debugmate_types::identity::UserId;
use debugmate_types::project::{NewProject, Project, ProjectDetail, ProjectSummary};

use super::chat::{MessageRow, parse_datetime};
use super::pool::DatabasePool;

/// SQLite-backed implementation of `ProjectRepository`.
pub struct SqliteProjectRepository {
    pool: DatabasePool,
}

impl SqliteProjectRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for the safe detail projection.
struct ProjectDetailRow {
    id: i64,
    user_id: String,
    repo_url: String,
    app_url: Option<String>,
    bug_description: String,
    created_at: String,
}

impl ProjectDetailRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            repo_url: row.try_get("repo_url")?,
            app_url: row.try_get("app_url")?,
            bug_description: row.try_get("bug_description")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl ProjectRepository for SqliteProjectRepository {
    async fn create_project(
        &self,
        user_id: &UserId,
        input: &NewProject,
    ) -> Result<Project, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r#"INSERT INTO projects (user_id, repo_url, app_url, supabase_key, vercel_key, other_api_keys, bug_description, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&user_id.0)
        .bind(&input.repo_url)
        .bind(&input.app_url)
        .bind(&input.supabase_key)
        .bind(&input.vercel_key)
        .bind(&input.other_api_keys)
        .bind(&input.bug_description)
        .bind(format_datetime(&created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(Project {
            id: result.last_insert_rowid(),
            user_id: user_id.0.clone(),
            repo_url: input.repo_url.clone(),
            app_url: input.app_url.clone(),
            supabase_key: input.supabase_key.clone(),
            vercel_key: input.vercel_key.clone(),
            other_api_keys: input.other_api_keys.clone(),
            bug_description: input.bug_description.clone(),
            created_at,
        })
    }

    async fn list_summaries(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ProjectSummary>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, repo_url, bug_description, created_at
               FROM projects WHERE user_id = ?
               ORDER BY created_at DESC, id DESC"#,
        )
        .bind(&user_id.0)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut summaries = Vec::with_capacity(rows.len());
        for row in &rows {
            let created_at: String = row
                .try_get("created_at")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            summaries.push(ProjectSummary {
                id: row
                    .try_get("id")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                repo_url: row
                    .try_get("repo_url")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                bug_description: row
                    .try_get("bug_description")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                created_at: parse_datetime(&created_at)?,
            });
        }

        Ok(summaries)
    }

    async fn get_detail(&self, project_id: i64) -> Result<Option<ProjectDetail>, RepositoryError> {
        let row = sqlx::query(
            r#"SELECT id, user_id, repo_url, app_url, bug_description, created_at
               FROM projects WHERE id = ?"#,
        )
        .bind(project_id)
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let project_row =
            ProjectDetailRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;

        let session_rows = sqlx::query("SELECT id FROM sessions WHERE project_id = ? ORDER BY id ASC")
            .bind(project_id)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut sessions = Vec::with_capacity(session_rows.len());
        for session_row in &session_rows {
            let session_id: i64 = session_row
                .try_get("id")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

            let message_rows =
                sqlx::query("SELECT * FROM messages WHERE session_id = ? ORDER BY id ASC")
                    .bind(session_id)
                    .fetch_all(&self.pool.reader)
                    .await
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;

            let mut messages = Vec::with_capacity(message_rows.len());
            for message_row in &message_rows {
                let row = MessageRow::from_row(message_row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                messages.push(row.into_message()?);
            }

            sessions.push(SessionWithMessages {
                id: session_id,
                project_id,
                messages,
            });
        }

        Ok(Some(ProjectDetail {
            id: project_row.id,
            user_id: project_row.user_id,
            repo_url: project_row.repo_url,
            app_url: project_row.app_url,
            bug_description: project_row.bug_description,
            created_at: parse_datetime(&project_row.created_at)?,
            sessions,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::chat::SqliteChatRepository;
    use debugmate_core::repository::chat::ChatRepository;
    use debugmate_types::chat::MessageRole;

    async fn test_pool() -> (DatabasePool, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (pool, dir)
    }

    fn make_input() -> NewProject {
        NewProject {
            repo_url: "https://github.com/x/y".to_string(),
            app_url: Some("https://x.vercel.app".to_string()),
            supabase_key: Some("sb-secret".to_string()),
            vercel_key: None,
            other_api_keys: None,
            bug_description: "Login fails".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_project_assigns_monotonic_ids() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteProjectRepository::new(pool);
        let user = UserId::from("user-a");

        let first = repo.create_project(&user, &make_input()).await.unwrap();
        let second = repo.create_project(&user, &make_input()).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.user_id, "user-a");
        assert_eq!(first.supabase_key.as_deref(), Some("sb-secret"));
    }

    #[tokio::test]
    async fn test_list_summaries_scoped_and_safe() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteProjectRepository::new(pool);

        repo.create_project(&UserId::from("user-a"), &make_input())
            .await
            .unwrap();
        repo.create_project(&UserId::from("user-b"), &make_input())
            .await
            .unwrap();

        let summaries = repo.list_summaries(&UserId::from("user-a")).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].repo_url, "https://github.com/x/y");

        // The projection type has no credential fields at all
        let value = serde_json::to_value(&summaries[0]).unwrap();
        assert!(value.get("supabaseKey").is_none());
    }

    #[tokio::test]
    async fn test_list_summaries_newest_first() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteProjectRepository::new(pool);
        let user = UserId::from("user-a");

        let first = repo.create_project(&user, &make_input()).await.unwrap();
        let second = repo.create_project(&user, &make_input()).await.unwrap();

        let summaries = repo.list_summaries(&user).await.unwrap();
        assert_eq!(summaries[0].id, second.id);
        assert_eq!(summaries[1].id, first.id);
    }

    #[tokio::test]
    async fn test_get_detail_includes_ordered_conversation() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteProjectRepository::new(pool.clone());
        let chat_repo = SqliteChatRepository::new(pool);
        let user = UserId::from("user-a");

        let project = repo.create_project(&user, &make_input()).await.unwrap();
        let session = chat_repo.create_session(project.id).await.unwrap();
        chat_repo
            .save_message(session.id, MessageRole::User, "Login fails")
            .await
            .unwrap();
        chat_repo
            .save_message(session.id, MessageRole::Assistant, "Check the callback")
            .await
            .unwrap();

        let detail = repo.get_detail(project.id).await.unwrap().unwrap();
        assert_eq!(detail.user_id, "user-a");
        assert_eq!(detail.sessions.len(), 1);
        let messages = &detail.sessions[0].messages;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[1].role, MessageRole::Assistant);
        assert!(messages[0].id < messages[1].id);
    }

    #[tokio::test]
    async fn test_get_detail_missing_project() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteProjectRepository::new(pool);
        assert!(repo.get_detail(999).await.unwrap().is_none());
    }
}
