use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use suitebridge_core::error::CoreError;
use suitebridge_core::types::RecordId;
use suitebridge_store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for backend
/// faults. Implements [`IntoResponse`] to produce the service's uniform
/// failure envelope: `{"status": "failed", "message": ...}` plus
/// error-specific fields.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `suitebridge-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record store fault outside any batch accounting.
    #[error("record store error: {0}")]
    Store(#[from] StoreError),

    /// A batch submit interrupted by a store fault after some creates had
    /// already succeeded. Carries the ids committed before the fault so the
    /// caller can reconcile partial success.
    #[error("batch interrupted at record {failed_index}: {source}")]
    BatchInterrupted {
        created: Vec<RecordId>,
        failed_index: usize,
        #[source]
        source: StoreError,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(CoreError::Validation(violations)) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "status": "failed",
                    "message": violations.to_string(),
                    "violations": violations.as_slice(),
                }),
            ),
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                json!({
                    "status": "failed",
                    "message": format!("{entity} with id {id} not found"),
                }),
            ),
            AppError::Store(err) => {
                tracing::error!(error = %err, "record store error");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "status": "failed",
                        "message": "record store error",
                    }),
                )
            }
            AppError::BatchInterrupted {
                created,
                failed_index,
                source,
            } => {
                tracing::error!(
                    error = %source,
                    failed_index,
                    committed = created.len(),
                    "batch submit interrupted; earlier records remain committed"
                );
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "status": "failed",
                        "message": format!(
                            "record store failed at record {failed_index}; \
                             earlier records remain committed"
                        ),
                        "created": created,
                    }),
                )
            }
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "status": "failed",
                    "message": message,
                }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
