//! Mapping of service errors onto HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::domains::jobs::{FieldError, JobError, ValidationError};
use crate::kernel::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("malformed request body: {0}")]
    Body(#[from] JsonRejection),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

impl From<JobError> for ApiError {
    fn from(err: JobError) -> Self {
        match err {
            JobError::Validation(e) => ApiError::Validation(e),
            JobError::Storage(e) => ApiError::Storage(e),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Storage(e) if e.is_connectivity() => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(e) => ErrorBody {
                error: "validation_error",
                message: e.to_string(),
                fields: Some(e.fields),
            },
            ApiError::Body(rejection) => ErrorBody {
                error: "invalid_body",
                message: rejection.body_text(),
                fields: None,
            },
            ApiError::Storage(e) => {
                error!(error = %e, "storage failure while handling request");
                ErrorBody {
                    error: "storage_error",
                    message: e.to_string(),
                    fields: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
