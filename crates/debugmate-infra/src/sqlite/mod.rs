//! SQLite-backed repository implementations.

pub mod chat;
pub mod pool;
pub mod project;
