use crate::errors::AppError;
use crate::models::ErrorEnvelope;
use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

/// Error envelope middleware.
///
/// Single cross-cutting formatter for every error surfaced by request
/// handling, so the wire contract is uniform regardless of origin:
///
/// - Handler errors ([`AppError`], found in the response extensions) keep
///   their mapped status and message, plus upstream details when present.
/// - Any other 5xx (a layer failure, a panic caught by the runtime) is
///   reduced to a generic 500; its content is already logged where it arose.
/// - Extractor rejections and other bare 4xx responses are wrapped with the
///   status' canonical reason so even framework errors speak the envelope.
pub async fn error_envelope(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;

    if let Some(error) = response.extensions_mut().remove::<AppError>() {
        let status = error.status_code();
        let message = error.public_message();
        return envelope_response(status, message, &path, error.into_details());
    }

    let status = response.status();
    if status.is_server_error() {
        tracing::error!("Unhandled {} response on {}", status, path);
        return envelope_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
            &path,
            None,
        );
    }

    if status.is_client_error() {
        let message = status.canonical_reason().unwrap_or("Bad Request").to_string();
        return envelope_response(status, message, &path, None);
    }

    response
}

fn envelope_response(
    status: StatusCode,
    message: String,
    path: &str,
    details: Option<serde_json::Value>,
) -> Response {
    let body = ErrorEnvelope {
        status: "error".to_string(),
        message,
        status_code: status.as_u16(),
        timestamp: Utc::now().to_rfc3339(),
        path: path.to_string(),
        details,
    };

    (status, Json(body)).into_response()
}
