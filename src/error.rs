use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use validator::ValidationErrors;

use crate::state::catalog::CatalogError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submitted game violates field constraints.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Invalid(errors) => ServiceError::Validation(errors),
            CatalogError::NotFound(id) => ServiceError::NotFound(format!("game `{id}` not found")),
        }
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body could not be read as the expected payload.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Payload parsed but failed field validation.
    #[error("validation failed")]
    Validation(ValidationErrors),
    /// Requested resource not found, or the identifier is malformed.
    #[error("not found: {0}")]
    NotFound(String),
    /// Request body rejected before parsing, with the status axum assigned to it.
    #[error("request rejected: {message}")]
    Rejected {
        /// Status axum chose for the rejection, e.g. 413 for an oversized body.
        status: StatusCode,
        /// Rejection detail reported back to the client.
        message: String,
    },
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => AppError::Validation(errors),
            ServiceError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => {
                AppError::BadRequest(rejection.body_text())
            }
            other => AppError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        // A malformed identifier cannot match any stored game.
        AppError::NotFound(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Flatten validation errors into `field -> messages`.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, payload) = match &self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, None),
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, Some(field_messages(errors))),
            AppError::NotFound(message) => {
                debug!(%message, "resource not found");
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::Rejected { status, .. } => (*status, None),
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
            errors: payload,
        });

        (status, payload).into_response()
    }
}
