//! Shared domain types for Debugmate.
//!
//! This crate contains the core domain types used across the Debugmate
//! backend: Project, Session, Message, identity types, LLM request types,
//! and their associated error enums.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod error;
pub mod identity;
pub mod llm;
pub mod project;
