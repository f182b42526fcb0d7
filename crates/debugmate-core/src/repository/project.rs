//! ProjectRepository trait definition.
//!
//! Read operations return the safe view types only; the credential columns
//! are never selected by implementations of `list_summaries`/`get_detail`.

use debugmate_types::error::RepositoryError;
use debugmate_types::identity::UserId;
use debugmate_types::project::{NewProject, Project, ProjectDetail, ProjectSummary};

/// Repository trait for project persistence.
///
/// Implementations live in debugmate-infra (e.g. `SqliteProjectRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ProjectRepository: Send + Sync {
    /// Insert a new project owned by the given user.
    fn create_project(
        &self,
        user_id: &UserId,
        input: &NewProject,
    ) -> impl std::future::Future<Output = Result<Project, RepositoryError>> + Send;

    /// List safe summaries of a user's projects, newest first.
    fn list_summaries(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Vec<ProjectSummary>, RepositoryError>> + Send;

    /// Load the safe detail view of a project with its nested
    /// sessions and messages, both in ascending id order.
    fn get_detail(
        &self,
        project_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<ProjectDetail>, RepositoryError>> + Send;
}
