//! Infrastructure layer for Debugmate.
//!
//! Contains implementations of the traits defined in `debugmate-core`:
//! SQLite storage (sqlx), the HTTP identity verifier, and the OpenAI
//! completion provider, plus env-based application configuration.

pub mod config;
pub mod identity;
pub mod llm;
pub mod sqlite;
