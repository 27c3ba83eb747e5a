use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{ConnAcquireErr, DbErr};
use serde::{Deserialize, Serialize};

use crate::mapper::ValidationError;
use crate::reconstruct::DataIntegrityError;

/// One problem found while handling a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDetail {
    /// Where the problem was found, e.g. `["body", "coords", "height"]`.
    #[schema(example = json!(["body", "coords", "height"]))]
    pub loc: Vec<String>,
    /// Human-readable error description.
    #[schema(example = "field required")]
    pub msg: String,
    /// Machine-readable error type. One of: `missing_field`, `empty_field`,
    /// `zero_value`, `malformed_body`, `not_found`, `persistence_error`,
    /// `storage_unavailable`, `data_integrity_error`.
    #[serde(rename = "type")]
    #[schema(example = "missing_field")]
    pub kind: String,
}

/// Structured error response returned by all endpoints on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub detail: Vec<ErrorDetail>,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    /// The body could not be parsed as the expected JSON shape.
    MalformedBody(String),
    NotFound(String),
    Persistence(String),
    /// No pooled connection became free in time. Safe to retry.
    StorageUnavailable(String),
    DataIntegrity(DataIntegrityError),
}

fn detail(loc: Vec<String>, msg: impl Into<String>, kind: &str) -> ErrorBody {
    ErrorBody {
        detail: vec![ErrorDetail {
            loc,
            msg: msg.into(),
            kind: kind.to_string(),
        }],
    }
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(err) => {
                let msg = err.kind.to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    detail(err.loc, msg, err.kind.type_tag()),
                )
            }
            AppError::MalformedBody(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                detail(vec!["body".into()], msg, "malformed_body"),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                detail(vec!["path".into(), "id".into()], msg, "not_found"),
            ),
            AppError::Persistence(detail_msg) => {
                tracing::error!("Persistence error: {}", detail_msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    detail(vec![], "Failed to save data", "persistence_error"),
                )
            }
            AppError::StorageUnavailable(detail_msg) => {
                tracing::error!("Storage unavailable: {}", detail_msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    detail(
                        vec![],
                        "Storage is temporarily unavailable",
                        "storage_unavailable",
                    ),
                )
            }
            AppError::DataIntegrity(err) => {
                tracing::error!("Data integrity error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    detail(vec![], err.to_string(), "data_integrity_error"),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<DataIntegrityError> for AppError {
    fn from(err: DataIntegrityError) -> Self {
        AppError::DataIntegrity(err)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => {
                AppError::StorageUnavailable(err.to_string())
            }
            other => AppError::Persistence(other.to_string()),
        }
    }
}
