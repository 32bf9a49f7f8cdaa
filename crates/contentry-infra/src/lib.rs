//! Infrastructure implementations for Contentry.
//!
//! Concrete adapters behind the ports defined in `contentry-core`: the
//! Groq LLM provider, environment-variable credential resolution, and the
//! `config.toml` loader.

pub mod config;
pub mod credential;
pub mod llm;
