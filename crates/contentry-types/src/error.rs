use thiserror::Error;

use crate::llm::LlmError;

/// Errors from the conversation flow.
///
/// `EmptyInput` is detected locally before any network call and leaves the
/// session untouched; it is a validation signal, not a model failure.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyInput,

    #[error("model invocation failed: {0}")]
    Model(#[from] LlmError),
}

/// Errors from the content-generation flow.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("model invocation failed: {0}")]
    Model(#[from] LlmError),
}

/// Errors from credential resolution.
///
/// Detected at startup, before any provider is constructed; a missing
/// credential blocks every model call.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("{0} is not set. Export it in your environment before starting.")]
    Missing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::Model(LlmError::AuthenticationFailed);
        assert!(err.to_string().contains("authentication failed"));
    }

    #[test]
    fn test_content_error_display() {
        let err = ContentError::EmptyField("topic");
        assert_eq!(err.to_string(), "field 'topic' must not be empty");
    }

    #[test]
    fn test_credential_error_names_the_variable() {
        let err = CredentialError::Missing("GROQ_API_KEY".to_string());
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }
}
