use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON error body: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Transport-level failures.
///
/// Only the public message reaches the client; the source of an internal
/// error is logged server-side.
#[derive(Debug)]
pub enum ApiError {
    /// Required field missing or falsy. Maps to 400.
    Validation(&'static str),
    /// Anything else. Maps to 500.
    Internal {
        public: &'static str,
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(public: &'static str, source: impl Into<anyhow::Error>) -> Self {
        ApiError::Internal {
            public,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Validation(msg) => msg,
            ApiError::Internal { public, .. } => public,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            ApiError::Internal { public, source } => write!(f, "{}: {:#}", public, source),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(msg) => tracing::debug!(error = %msg, "rejected request"),
            ApiError::Internal { source, .. } => tracing::error!(error = %format!("{:#}", source), "request failed"),
        }

        let body = ErrorBody {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_status() {
        let err = ApiError::Validation("Project input is required");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Project input is required");
    }

    #[test]
    fn test_internal_hides_source() {
        let err = ApiError::internal("Internal server error", anyhow::anyhow!("disk on fire"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
        // Display keeps the detail for logs
        assert!(err.to_string().contains("disk on fire"));
    }
}
