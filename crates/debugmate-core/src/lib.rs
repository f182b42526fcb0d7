//! Business logic and repository trait definitions for Debugmate.
//!
//! This crate defines the "ports" (repository, identity, and completion
//! provider traits) that the infrastructure layer implements, plus the
//! conversation orchestrator built on top of them. It depends only on
//! `debugmate-types` -- never on `debugmate-infra` or any database/IO crate.

pub mod chat;
pub mod identity;
pub mod llm;
pub mod repository;
