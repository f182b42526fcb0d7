//! Project HTTP handlers.
//!
//! Endpoints:
//! - GET  /api/projects      - List the caller's projects (safe summaries)
//! - POST /api/projects      - Create a project with its first session and exchange
//! - GET  /api/projects/{id} - Get a project's detail with full transcripts
//!
//! Credential fields never appear in any response. That is enforced by the
//! response types themselves, which have no credential fields to serialize.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use serde_json::json;

use debugmate_types::project::{NewProject, ProjectDetail, ProjectSummary};

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummary>,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub project: ProjectDetail,
}

/// GET /api/projects - List the caller's projects, newest first.
pub async fn list_projects(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProjectListResponse>, AppError> {
    let projects = state.conversation.list_projects(&user_id).await?;
    Ok(Json(ProjectListResponse { projects }))
}

/// POST /api/projects - Create a project, its first session, and the
/// initial exchange with the assistant.
pub async fn create_project(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(input): Json<NewProject>,
) -> Result<Json<serde_json::Value>, AppError> {
    let created = state.conversation.create_project(&user_id, input).await?;
    Ok(Json(json!({
        "projectId": created.project_id,
        "sessionId": created.session_id,
    })))
}

/// GET /api/projects/{id} - Get a project the caller owns.
///
/// The id arrives as a raw path segment so a non-numeric value answers 400
/// instead of axum's default rejection body.
pub async fn get_project(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ProjectDetailResponse>, AppError> {
    let project_id = parse_project_id(&id)?;
    let project = state.conversation.get_project(&user_id, project_id).await?;
    Ok(Json(ProjectDetailResponse { project }))
}

/// Parse a project id from a path parameter, answering 400 on bad input.
fn parse_project_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::Validation("Invalid project id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_id_numeric() {
        assert_eq!(parse_project_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_project_id_rejects_garbage() {
        for bad in ["abc", "1.5", "", "9999999999999999999999"] {
            assert!(matches!(
                parse_project_id(bad),
                Err(AppError::Validation(_))
            ));
        }
    }
}
