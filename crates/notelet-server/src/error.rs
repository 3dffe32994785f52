//! API error types with JSON responses.
//!
//! The taxonomy is deliberate: `BadRequest` (malformed input), `NotFound`
//! (entity does not exist), and `Forbidden` (entity exists, requester
//! lacks permission) are distinct and never merged, so a caller can tell
//! "this doesn't exist" from "you don't have access". `Conflict` covers
//! uniqueness violations such as a duplicate share.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use notelet_store::StoreError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Unauthorized (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden (403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Conflict (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Store(e) => match e {
                StoreError::NoteNotFound(_) | StoreError::UserNotFound(_) => "NOT_FOUND",
                StoreError::EmailTaken(_) | StoreError::DuplicateShare { .. } => "CONFLICT",
                _ => "STORAGE_ERROR",
            },
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                StoreError::NoteNotFound(_) | StoreError::UserNotFound(_) => StatusCode::NOT_FOUND,
                StoreError::EmailTaken(_) | StoreError::DuplicateShare { .. } => {
                    StatusCode::CONFLICT
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Unexpected store failures are logged with detail but reported
        // generically.
        let message = match &self {
            Self::Store(e)
                if !matches!(
                    e,
                    StoreError::NoteNotFound(_)
                        | StoreError::UserNotFound(_)
                        | StoreError::EmailTaken(_)
                        | StoreError::DuplicateShare { .. }
                ) =>
            {
                tracing::error!(error = %e, "Storage failure");
                "internal error".to_string()
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "Internal failure");
                "internal error".to_string()
            }
            // Expected store errors surface their own message without the
            // "storage error" prefix.
            Self::Store(e) => e.to_string(),
            Self::BadRequest(m)
            | Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Conflict(m) => m.clone(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn forbidden_and_not_found_stay_distinct() {
        let forbidden = ApiError::Forbidden("no access".to_string());
        let not_found = ApiError::NotFound("no such note".to_string());
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_ne!(forbidden.code(), not_found.code());
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let e = ApiError::Store(StoreError::NoteNotFound(Uuid::nil()));
        assert_eq!(e.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(e.code(), "NOT_FOUND");
    }

    #[test]
    fn duplicate_share_maps_to_conflict() {
        let e = ApiError::Store(StoreError::DuplicateShare {
            note_id: Uuid::nil(),
            user_id: Uuid::nil(),
        });
        assert_eq!(e.status_code(), StatusCode::CONFLICT);
        assert_eq!(e.code(), "CONFLICT");
    }

    #[test]
    fn email_taken_maps_to_conflict() {
        let e = ApiError::Store(StoreError::EmailTaken("a@b.com".to_string()));
        assert_eq!(e.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn corrupt_row_is_internal() {
        let e = ApiError::Store(StoreError::CorruptRow("bad".to_string()));
        assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
