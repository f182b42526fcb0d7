//! Application state wiring all services together.
//!
//! `AppState` holds the concrete service instances used by both the CLI and
//! the REST API. The conversation service is generic over its repository and
//! provider traits, but `AppState` pins it to the concrete infra
//! implementations.

use std::sync::Arc;

use secrecy::ExposeSecret;

use debugmate_core::chat::service::ConversationService;
use debugmate_infra::config::AppConfig;
use debugmate_infra::identity::HttpIdentityVerifier;
use debugmate_infra::llm::OpenAiProvider;
use debugmate_infra::sqlite::chat::SqliteChatRepository;
use debugmate_infra::sqlite::pool::DatabasePool;
use debugmate_infra::sqlite::project::SqliteProjectRepository;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteConversationService =
    ConversationService<SqliteProjectRepository, SqliteChatRepository, OpenAiProvider>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<ConcreteConversationService>,
    pub identity: Arc<HttpIdentityVerifier>,
}

impl AppState {
    /// Initialize the application state: connect to the database, wire
    /// services against the given configuration.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(&config.database_url).await?;

        let project_repo = SqliteProjectRepository::new(db_pool.clone());
        let chat_repo = SqliteChatRepository::new(db_pool.clone());
        let provider = OpenAiProvider::new(config.openai_api_key.expose_secret());

        let conversation = ConversationService::new(
            project_repo,
            chat_repo,
            provider,
            config.model.clone(),
        );

        let identity = HttpIdentityVerifier::new(
            config.identity_url.clone(),
            config.identity_service_key.clone(),
        );

        Ok(Self {
            conversation: Arc::new(conversation),
            identity: Arc::new(identity),
        })
    }
}
