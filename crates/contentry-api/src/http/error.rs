//! Application error type mapping to HTTP status codes and envelope format.

use axum::response::{IntoResponse, Response};

use contentry_types::error::{ChatError, ContentError, CredentialError};

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Conversation flow errors.
    Chat(ChatError),
    /// Content-generation flow errors.
    Content(ContentError),
    /// The API credential is missing.
    Credential(CredentialError),
    /// Request validation failure.
    Validation(String),
    /// Unknown session id.
    SessionNotFound,
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<ContentError> for AppError {
    fn from(e: ContentError) -> Self {
        AppError::Content(e)
    }
}

impl From<CredentialError> for AppError {
    fn from(e: CredentialError) -> Self {
        AppError::Credential(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Chat(ChatError::EmptyInput) => {
                ("VALIDATION_ERROR", "message must not be empty".to_string())
            }
            AppError::Chat(ChatError::Model(e)) => ("MODEL_ERROR", e.to_string()),
            AppError::Content(ContentError::EmptyField(field)) => (
                "VALIDATION_ERROR",
                format!("field '{field}' must not be empty"),
            ),
            AppError::Content(ContentError::Model(e)) => ("MODEL_ERROR", e.to_string()),
            AppError::Credential(e) => ("MISSING_CREDENTIAL", e.to_string()),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::SessionNotFound => ("SESSION_NOT_FOUND", "Session not found".to_string()),
        };

        ApiResponse::error(code, &message, String::new(), 0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use contentry_types::llm::LlmError;

    #[test]
    fn test_empty_input_maps_to_400() {
        let response = AppError::Chat(ChatError::EmptyInput).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_model_error_maps_to_502() {
        let response =
            AppError::Content(ContentError::Model(LlmError::RateLimited)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_missing_credential_maps_to_503() {
        let err = AppError::Credential(CredentialError::Missing("GROQ_API_KEY".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_session_not_found_maps_to_404() {
        assert_eq!(
            AppError::SessionNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
