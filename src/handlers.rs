use crate::config::ServerConfig;
use crate::errors::AppError;
use crate::lead_service::LeadService;
use crate::models::{Lead, SuccessEnvelope};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

/// Message returned in the success envelope when a lead is created.
pub const LEAD_CREATED_MESSAGE: &str = "Lead criado com sucesso";

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: ServerConfig,
    /// Service for creating leads in the CRM.
    pub lead_service: LeadService,
}

/// Builds the application router with the envelope middleware applied.
///
/// Outer layers (tracing, CORS) are added by the binary; tests drive this
/// router directly.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/leads", post(create_lead))
        // A lead is three short strings; anything bigger is not a lead.
        .layer(RequestBodyLimitLayer::new(16 * 1024))
        .with_state(state)
        .layer(axum::middleware::from_fn(crate::middleware::error_envelope))
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "lead-capture-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// POST /leads
///
/// Extracts the lead payload and delegates to the lead service; no
/// structural validation happens at this layer. Errors flow to the
/// centralized envelope middleware rather than being formatted here.
///
/// # Returns
///
/// * HTTP 201 with a success envelope wrapping the upstream CRM response.
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(lead): Json<Lead>,
) -> Result<(StatusCode, Json<SuccessEnvelope<Value>>), AppError> {
    tracing::info!("POST /leads");

    let data = state.lead_service.create_lead(&lead).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessEnvelope::new(data, LEAD_CREATED_MESSAGE)),
    ))
}
