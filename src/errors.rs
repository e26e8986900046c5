use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::fmt;

/// Application-specific error types.
///
/// A closed set of domain error kinds, each carrying the HTTP status it maps
/// to. Handlers return these and the envelope middleware turns them into the
/// uniform wire shape.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Bad request error (invalid or incomplete input). Maps to 400.
    BadRequest(String),
    /// Duplicate resource reported by the upstream CRM. Maps to 409.
    Conflict(String),
    /// Unmapped upstream failure, passed through with its original status
    /// and the upstream payload as details.
    Upstream {
        status: u16,
        message: String,
        details: Option<Value>,
    },
    /// Internal server error. The message is logged, never sent to clients.
    Internal(String),
}

impl AppError {
    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to expose on the wire. Internal errors are reduced to a
    /// generic string so their content never leaks to clients.
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::Conflict(msg) => msg.clone(),
            AppError::Upstream { message, .. } => message.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Upstream payload attached to the error envelope, when present.
    pub fn into_details(self) -> Option<Value> {
        match self {
            AppError::Upstream { details, .. } => details,
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Upstream {
                status, message, ..
            } => write!(f, "Upstream error {}: {}", status, message),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Logs according to severity, then emits a status-only response with the
    /// error stashed in the extensions. The envelope middleware picks it up
    /// and writes the uniform JSON body (it needs the request path, which is
    /// not available here).
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream {
                status, message, ..
            } => {
                tracing::error!("Upstream CRM error {}: {}", status, message);
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
            AppError::BadRequest(_) | AppError::Conflict(_) => {}
        }

        let mut response = self.status_code().into_response();
        response.extensions_mut().insert(self);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(
            AppError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let upstream = AppError::Upstream {
            status: 503,
            message: "down".into(),
            details: None,
        };
        assert_eq!(upstream.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn internal_message_is_never_exposed() {
        let err = AppError::Internal("connection string leaked".into());
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn invalid_upstream_status_falls_back_to_bad_gateway() {
        let err = AppError::Upstream {
            status: 42,
            message: "odd".into(),
            details: None,
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
