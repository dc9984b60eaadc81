//! Error type shared by the reporting routes and its JSON rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON body returned by a failed report endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An aggregate query (or the connection behind it) failed.
    #[error("{message}: {source}")]
    Query {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Wrap a database error with the message reported to the client.
    pub fn query(message: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Query { message, source }
    }

    /// Message exposed in the response body.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Query { message, .. } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Query { message, source } => {
                tracing::error!(error = %source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, *message)
            }
        };

        let body = ErrorBody {
            error: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_error_display_includes_source() {
        let err = AppError::query("Failed to fetch KPIs")(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Failed to fetch KPIs: "));
        assert_eq!(err.public_message(), "Failed to fetch KPIs");
    }

    #[test]
    fn query_error_renders_500_with_error_field() {
        let err = AppError::query("Failed to fetch top customers")(sqlx::Error::PoolTimedOut);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody {
            error: "Failed to fetch MoM growth".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Failed to fetch MoM growth" }));
    }
}
