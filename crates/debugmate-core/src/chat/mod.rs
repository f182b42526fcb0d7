//! Conversation workflows: system prompt composition and the orchestrator.

pub mod prompt;
pub mod service;
