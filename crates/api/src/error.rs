use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use recipebox_core::error::CoreError;
use recipebox_core::recipe::RecipeDraft;
use recipebox_core::types::DbId;
use serde::Serialize;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `recipebox_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx. The storage engine is unreachable or
    /// rejected the statement; never recovered.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A recipe form that failed validation, returned for redisplay.
    #[error("Form rejected: {}", .0.errors.join(" "))]
    Form(Box<FormRejection>),

    /// A malformed or oversized multipart form post. Keeps axum's status
    /// (`413` when the body limit was exceeded, `400` otherwise).
    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// A rejected recipe submission: every validation message plus the values
/// the form should be redisplayed with. Nothing was persisted.
#[derive(Debug, Clone, Serialize)]
pub struct FormRejection {
    /// Set when the rejected submission was an edit.
    pub recipe_id: Option<DbId>,
    pub errors: Vec<String>,
    pub form: RecipeDraft,
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Form(Box::new(rejection))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msgs) => {
                    let body = json!({
                        "error": msgs.join(" "),
                        "code": "VALIDATION_ERROR",
                        "errors": msgs,
                    });
                    return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Form redisplay ---
            AppError::Form(rejection) => {
                let body = json!({
                    "error": rejection.errors.join(" "),
                    "code": "VALIDATION_ERROR",
                    "errors": rejection.errors,
                    "recipe_id": rejection.recipe_id,
                    "form": rejection.form,
                });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
            }

            // --- HTTP-specific errors ---
            AppError::Multipart(err) => {
                let status = err.status();
                let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "PAYLOAD_TOO_LARGE"
                } else {
                    "BAD_REQUEST"
                };
                (status, code, err.body_text())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
