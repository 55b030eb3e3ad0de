//! Response types and error handling for API endpoints
//!
//! Provides unified error handling and JSON response formatting.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use member_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use validator::{ValidationErrors, ValidationErrorsKind};

/// Message returned for every 5xx; the detail only goes to the log
const SERVER_ERROR_MESSAGE: &str = "Request failed";

/// Code returned for every 5xx, whatever failed underneath
const SERVER_ERROR_CODE: &str = "INTERNAL_ERROR";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{}", validation_message(.0))]
    Validation(#[from] ValidationErrors),

    /// Body was not valid JSON for the target type. Holds the parser detail.
    #[error("JSON parse error")]
    InvalidBody(String),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Validation(_) | Self::InvalidBody(_) | Self::InvalidPath(_) | Self::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
        }
    }

    /// Create a malformed body error
    pub fn invalid_body(detail: impl Into<String>) -> Self {
        Self::InvalidBody(detail.into())
    }

    /// Create an invalid path error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid query error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}

/// Collect every field message, including nested structs and lists, sorted
fn validation_message(errors: &ValidationErrors) -> String {
    fn collect(errors: &ValidationErrors, out: &mut Vec<String>) {
        for kind in errors.errors().values() {
            match kind {
                ValidationErrorsKind::Field(field_errors) => {
                    out.extend(field_errors.iter().map(|e| {
                        e.message
                            .as_ref()
                            .map_or_else(|| e.code.to_string(), ToString::to_string)
                    }));
                }
                ValidationErrorsKind::Struct(nested) => collect(nested, out),
                ValidationErrorsKind::List(items) => {
                    for nested in items.values() {
                        collect(nested, out);
                    }
                }
            }
        }
    }

    let mut messages = Vec::new();
    collect(errors, &mut messages);
    messages.sort();
    messages.dedup();
    messages.join(", ")
}

/// Upper snake case name of a status, e.g. `BAD_REQUEST`
pub fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace([' ', '-'], "_")
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub error: String,
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (code, message) = if status.is_server_error() {
            error!(error = ?self, code = %self.error_code(), "Server error occurred");
            (SERVER_ERROR_CODE.to_string(), SERVER_ERROR_MESSAGE.to_string())
        } else {
            if let Self::InvalidBody(detail) = &self {
                debug!(detail = %detail, "Rejected request body");
            }
            (self.error_code().to_string(), self.to_string())
        };

        let body = ErrorBody {
            status: status.as_u16(),
            error: status_name(status),
            code,
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with a `Location` header and JSON body
pub struct Created<T> {
    location: String,
    body: T,
}

impl<T> Created<T> {
    pub fn new(location: impl Into<String>, body: T) -> Self {
        Self {
            location: location.into(),
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (
            StatusCode::CREATED,
            [(header::LOCATION, self.location)],
            Json(self.body),
        )
            .into_response()
    }
}
