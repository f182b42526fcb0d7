//! Project types: the full row, the creation input, and the two safe
//! read-side views.
//!
//! `ProjectSummary` and `ProjectDetail` structurally cannot carry the
//! credential fields (`supabase_key`, `vercel_key`, `other_api_keys`);
//! the queries behind them never select those columns, so credential
//! exclusion is enforced at the type and storage layer rather than by
//! stripping fields at serialization time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chat::SessionWithMessages;

/// A user-owned record describing a target application to debug.
///
/// This is the full row, credentials included. It is used internally for
/// prompt composition and ownership checks and is never serialized into an
/// HTTP response.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: i64,
    pub user_id: String,
    pub repo_url: String,
    pub app_url: Option<String>,
    pub supabase_key: Option<String>,
    pub vercel_key: Option<String>,
    pub other_api_keys: Option<String>,
    pub bug_description: String,
    pub created_at: DateTime<Utc>,
}

/// Input fields for creating a project.
///
/// `repo_url` and `bug_description` default to empty strings when absent so
/// that a missing field and an empty field fail validation the same way
/// (both answer `Missing fields`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[serde(default)]
    pub repo_url: String,
    pub app_url: Option<String>,
    pub supabase_key: Option<String>,
    pub vercel_key: Option<String>,
    pub other_api_keys: Option<String>,
    #[serde(default)]
    pub bug_description: String,
}

/// Safe list-view projection of a project: id, repo URL, bug description,
/// and creation time only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: i64,
    pub repo_url: String,
    pub bug_description: String,
    pub created_at: DateTime<Utc>,
}

/// Safe detail-view projection of a project with its nested conversation.
///
/// Carries the owner id for the authorization check; credential fields do
/// not exist on this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub id: i64,
    pub user_id: String,
    pub repo_url: String,
    pub app_url: Option<String>,
    pub bug_description: String,
    pub created_at: DateTime<Utc>,
    pub sessions: Vec<SessionWithMessages>,
}
