//! Application error types with HTTP response conversion.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Application-level errors for Basilica.
///
/// Only [`AppError::Validation`] and [`AppError::UnknownCategory`] are meant
/// to reach a caller of the classification endpoint. Everything else is
/// caught at a pipeline stage boundary and degraded to "no result".
#[derive(Error, Debug)]
pub enum AppError {
    // Remote knowledge graph / content API errors
    #[error("Remote request failed: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("Remote API rate limited after {attempts} attempts: {endpoint}")]
    RateLimited { endpoint: String, attempts: u32 },

    #[error("Remote API returned {status} for {endpoint}")]
    RemoteStatus { endpoint: String, status: u16 },

    #[error("Malformed remote response: {0}")]
    RemoteFormat(String),

    // Cache store errors
    #[error("Cache store error: {0}")]
    Store(String),

    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    // Class map artifact errors
    #[error("Class map I/O error at {path}: {source}")]
    ClassMapIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Class map parse error: {0}")]
    ClassMapParse(#[from] serde_json::Error),

    // Domain errors
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Transient failures are retried at the call site that hit them.
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Remote(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            AppError::RemoteStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::UnknownCategory(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_CATEGORY"),
            AppError::RateLimited { .. } => (StatusCode::SERVICE_UNAVAILABLE, "RATE_LIMITED"),
            AppError::Remote(_) => (StatusCode::BAD_GATEWAY, "REMOTE_ERROR"),
            AppError::RemoteStatus { .. } => (StatusCode::BAD_GATEWAY, "REMOTE_STATUS"),
            AppError::RemoteFormat(_) => (StatusCode::BAD_GATEWAY, "REMOTE_FORMAT"),
            AppError::Store(_) | AppError::Postgres(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR")
            }
            AppError::ClassMapIo { .. } | AppError::ClassMapParse(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CLASS_MAP_ERROR")
            }
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, app_code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = serde_json::json!({ "error": format!("[{}] {}", app_code, self) });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("titles must be an array".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_category_maps_to_bad_request() {
        let response = AppError::UnknownCategory("Sports".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_transient_statuses() {
        let rate_limited = AppError::RemoteStatus {
            endpoint: "wbgetentities".into(),
            status: 429,
        };
        let unavailable = AppError::RemoteStatus {
            endpoint: "wbgetentities".into(),
            status: 503,
        };
        let not_found = AppError::RemoteStatus {
            endpoint: "wbgetentities".into(),
            status: 404,
        };
        assert!(rate_limited.is_transient());
        assert!(unavailable.is_transient());
        assert!(!not_found.is_transient());
        assert!(!AppError::RemoteFormat("missing entities".into()).is_transient());
    }
}
