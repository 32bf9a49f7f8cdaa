//! Business logic for Contentry.
//!
//! This crate defines the "port" (the [`llm::provider::LlmProvider`] trait)
//! that the infrastructure layer implements, plus the two flows built on
//! top of it: the conversation orchestrator and the content generator.
//! It depends only on `contentry-types` -- never on `contentry-infra` or
//! any HTTP/IO crate.

pub mod chat;
pub mod content;
pub mod llm;
