use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Canonical API error shape: {ok: false, error: {code, message, status}}.
//
// Only these outcomes cross the HTTP boundary. Malformed stored payloads
// and dangling ingredient references never surface here; the pricing core
// absorbs them as zero contributions.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Generic 500. Detail goes to the log at the raise site, never to the
    /// client.
    #[error("internal error")]
    Internal,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound(entity)
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Err.Request.Validation",
            Self::NotFound(_) => "Err.NotFound",
            Self::Internal => "Err.Internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "ok": false,
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "status": status.as_u16(),
            }
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::not_found("cake");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "cake not found");
        assert_eq!(err.code(), "Err.NotFound");
    }

    #[test]
    fn internal_message_is_generic() {
        assert_eq!(ApiError::Internal.to_string(), "internal error");
    }
}
