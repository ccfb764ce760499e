// Error handling module for the Flight Search API
// Provides centralized error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error};

use crate::search::error::RuleViolation;

/// Main error type for the API
/// All handlers should return Result<T, ApiError>
#[derive(Debug)]
pub enum ApiError {
    /// A search request failed one of the business rules
    /// Maps to HTTP 422 Unprocessable Entity with the rule's stable code
    SearchRejected(RuleViolation),

    /// Requested state does not exist yet
    /// Maps to HTTP 404 Not Found
    NotFound(String),

    /// Internal server errors
    /// Maps to HTTP 500 Internal Server Error
    /// Sensitive details are filtered from client responses
    Internal(String),
}

/// Consistent error response structure
///
/// The JSON format shared by all error responses: a machine-readable
/// error_code, a human-readable message, and the time the error occurred.
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g., "RETURN_BEFORE_DEPARTURE", "NOT_FOUND")
    pub error_code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details
    /// Omitted from JSON when None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,

    /// ISO 8601 timestamp of when the error occurred
    pub timestamp: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = self.to_error_response();
        (status, Json(error_response)).into_response()
    }
}

impl ApiError {
    /// Convert ApiError to HTTP status code and ErrorResponse
    ///
    /// Business-rule rejections and missing state are expected client
    /// outcomes and log at debug level; internal faults log at error level
    /// and are returned to the client without detail.
    fn to_error_response(&self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::SearchRejected(violation) => {
                debug!("Search request rejected: {}", violation);

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse {
                        error_code: violation.code().to_string(),
                        message: violation.to_string(),
                        details: None,
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
            ApiError::NotFound(message) => {
                debug!("Not found: {}", message);

                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error_code: "NOT_FOUND".to_string(),
                        message: message.clone(),
                        details: None,
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
            ApiError::Internal(internal_msg) => {
                error!("Internal error: {}", internal_msg);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_code: "INTERNAL_ERROR".to_string(),
                        message: "An internal server error occurred".to_string(),
                        details: None,
                        timestamp: Utc::now().to_rfc3339(),
                    },
                )
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SearchRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert rule violations to ApiError
impl From<RuleViolation> for ApiError {
    fn from(violation: RuleViolation) -> Self {
        ApiError::SearchRejected(violation)
    }
}
