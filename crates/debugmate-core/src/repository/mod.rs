//! Repository trait definitions implemented by debugmate-infra.

pub mod chat;
pub mod project;
