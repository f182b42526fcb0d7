//! Axum router configuration with middleware.
//!
//! All routes are under `/api/`.
//! Middleware: CORS, tracing.
//!
//! Registering both verbs of `/api/projects` on one MethodRouter makes axum
//! answer unregistered methods with 405 and an accurate Allow header.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/projects",
            get(handlers::project::list_projects).post(handlers::project::create_project),
        )
        .route("/api/projects/{id}", get(handlers::project::get_project))
        .route("/api/chat", post(handlers::chat::post_message))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - liveness probe, no authentication.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use secrecy::SecretString;
    use tower::ServiceExt;

    use debugmate_infra::config::AppConfig;

    async fn test_state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("router-test.db");

        // The identity and provider endpoints are never reached in these
        // tests: every request either skips auth (/health), fails before
        // verification (missing header), or never hits a handler (405).
        let config = AppConfig {
            database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
            identity_url: "http://127.0.0.1:1".to_string(),
            identity_service_key: SecretString::from("test-service-key".to_string()),
            openai_api_key: SecretString::from("sk-test".to_string()),
            model: "gpt-4".to_string(),
        };
        let state = AppState::init(&config).await.unwrap();
        (state, dir)
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_needs_no_auth() {
        let (state, _dir) = test_state().await;
        let resp = build_router(state)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_projects_without_token_is_401() {
        let (state, _dir) = test_state().await;
        let resp = build_router(state)
            .oneshot(Request::get("/api/projects").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn test_chat_without_token_is_401() {
        let (state, _dir) = test_state().await;
        let resp = build_router(state)
            .oneshot(
                Request::post("/api/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"sessionId":1,"content":"hi"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405_with_allow() {
        let (state, _dir) = test_state().await;
        let resp = build_router(state)
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/api/projects")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let allow = resp.headers().get(header::ALLOW).unwrap().to_str().unwrap();
        assert!(allow.contains("GET"));
        assert!(allow.contains("POST"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (state, _dir) = test_state().await;
        let resp = build_router(state)
            .oneshot(
                Request::get("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
