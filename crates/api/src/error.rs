use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use spendlog_core::error::CoreError;
use spendlog_core::validation::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `spendlog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not JSON or did not match the expected shape.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors))
    }
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";
const VALIDATION_MESSAGE: &str = "Validation failed";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity = %entity, id = %id, "Entity not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({ "error": format!("{entity} not found"), "code": "NOT_FOUND" }),
                )
            }
            AppError::Core(CoreError::Validation(errors)) => {
                tracing::debug!(errors = %errors, "Validation failed");
                validation_body(errors.messages())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_body()
            }
            AppError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection, "Rejected request body");
                validation_body(vec![rejection.body_text()])
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn validation_body(messages: Vec<String>) -> (StatusCode, serde_json::Value) {
    (
        StatusCode::BAD_REQUEST,
        json!({
            "error": VALIDATION_MESSAGE,
            "code": "VALIDATION_ERROR",
            "messages": messages,
        }),
    )
}

fn internal_body() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": INTERNAL_MESSAGE, "code": "INTERNAL_ERROR" }),
    )
}
