//! Shared domain types for Contentry.
//!
//! This crate contains the core domain types used across the Contentry
//! workspace: conversation turns and sessions, LLM request/response shapes,
//! content-generation fields, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod llm;
