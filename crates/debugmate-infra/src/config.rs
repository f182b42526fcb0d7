//! Application configuration from environment variables.
//!
//! Required settings fail fast at startup with the variable name in the
//! error. Optional settings fall back to defaults (a per-user data
//! directory for the database, "gpt-4" for the model).

use std::path::PathBuf;

use secrecy::SecretString;

/// The default completion model when `DEBUGMATE_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("could not resolve a data directory; set DEBUGMATE_DATA_DIR")]
    NoDataDir,
}

/// Runtime configuration for the server.
///
/// Does NOT derive Debug: holds the identity service key and the
/// completion provider API key.
pub struct AppConfig {
    /// SQLite connection URL.
    pub database_url: String,
    /// Base URL of the identity provider.
    pub identity_url: String,
    /// Service key sent alongside user tokens to the identity provider.
    pub identity_service_key: SecretString,
    /// API key for the completion provider.
    pub openai_api_key: SecretString,
    /// Model id passed to the completion provider.
    pub model: String,
}

impl AppConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = match std::env::var("DEBUGMATE_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => default_database_url()?,
        };

        let identity_url = require_var("IDENTITY_URL")?;
        let identity_service_key = SecretString::from(require_var("IDENTITY_SERVICE_KEY")?);
        let openai_api_key = SecretString::from(require_var("OPENAI_API_KEY")?);

        let model = std::env::var("DEBUGMATE_MODEL")
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            database_url,
            identity_url,
            identity_service_key,
            openai_api_key,
            model,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

/// Resolve the data directory, creating it if missing.
///
/// `DEBUGMATE_DATA_DIR` overrides the default of `~/.debugmate`.
pub fn resolve_data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var("DEBUGMATE_DATA_DIR") {
        Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => dirs::home_dir()
            .ok_or(ConfigError::NoDataDir)?
            .join(".debugmate"),
    };
    std::fs::create_dir_all(&dir).map_err(|_| ConfigError::NoDataDir)?;
    Ok(dir)
}

/// Default SQLite URL under the resolved data directory.
pub fn default_database_url() -> Result<String, ConfigError> {
    let dir = resolve_data_dir()?;
    Ok(format!("sqlite://{}?mode=rwc", dir.join("debugmate.db").display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_var_missing() {
        let err = require_var("DEBUGMATE_TEST_DEFINITELY_UNSET").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingVar("DEBUGMATE_TEST_DEFINITELY_UNSET")
        ));
    }

    #[test]
    fn test_default_model_constant() {
        assert_eq!(DEFAULT_MODEL, "gpt-4");
    }
}
