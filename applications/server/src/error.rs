/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use vision_core::{FieldError, VisionError};

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<FieldError>),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(#[from] tracing_appender::rolling::InitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<VisionError> for ServerError {
    fn from(err: VisionError) -> Self {
        if let Some(field_error) = err.field_error() {
            return ServerError::Validation(vec![field_error]);
        }

        match err {
            VisionError::NotFound(_) => ServerError::NotFound(err.to_string()),
            _ => ServerError::Internal(err.to_string()),
        }
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ServerError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": join_messages(&errors),
                    "errors": errors,
                }),
            ),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": format!("Internal server error: {msg}") }),
                )
            }
            ServerError::Config(_) | ServerError::Logging(_) | ServerError::Io(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": format!("Internal server error: {self}") }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_field_set() {
        let err = ServerError::from(VisionError::validation("email", "Email is required"));
        match err {
            ServerError::Validation(errors) => {
                assert_eq!(errors, vec![FieldError::new("email", "Email is required")]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn missing_argument_is_internal() {
        let err = ServerError::from(VisionError::InvalidArgument("user".to_string()));
        assert!(matches!(err, ServerError::Internal(_)));
    }

    #[test]
    fn status_codes() {
        let cases = [
            (ServerError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ServerError::Validation(vec![]), StatusCode::BAD_REQUEST),
            (ServerError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ServerError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServerError::Config("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
