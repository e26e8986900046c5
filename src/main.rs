use axum::http::{
    header::{HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
    Method,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lead_capture_api::config::ServerConfig;
use lead_capture_api::handlers::{self, AppState};
use lead_capture_api::lead_service::LeadService;

/// Main entry point for the lead capture gateway.
///
/// Initializes tracing, loads configuration, constructs the CRM-facing lead
/// service (failing fast on misconfiguration) and starts the Axum server
/// with CORS restricted to the configured frontend origin.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lead_capture_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;

    // Construct the lead service up front; a missing CRM URL or key must
    // abort startup, not surface on the first request.
    let lead_service = LeadService::new(&config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize CRM client: {}", e))?;
    tracing::info!("CRM client initialized: {}", config.crm_api_url);

    // CORS: only the configured frontend origin, POST only, no credentials.
    let frontend_origin = config
        .frontend_url
        .parse::<HeaderValue>()
        .map_err(|_| anyhow::anyhow!("FRONTEND_URL is not a valid origin"))?;
    let cors = CorsLayer::new()
        .allow_origin(frontend_origin)
        .allow_methods([Method::POST])
        .allow_headers([
            ORIGIN,
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
            AUTHORIZATION,
        ]);

    let port = config.port;
    let app_state = Arc::new(AppState {
        config,
        lead_service,
    });

    let app = handlers::router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
