//! HTTP API for the ClickFinance engine.
//!
//! This module exposes the calculators to the web forms using the
//! [`axum`](https://crates.io/crates/axum) framework.  Each endpoint
//! accepts a JSON input record, runs the precondition checks and
//! returns the result together with its advisory messages.  The engine
//! configuration is loaded once at start-up and shared read-only.

use crate::config::EngineConfig;
use crate::engine::{
    annual_report, event_report, pricing_report, run_batch, AnalysisRequest, AnnualReport,
    BatchResult, EventReport, PricingReport,
};
use crate::error::EngineError;
use crate::models::{AnnualInput, EventInput, PricingInput};
use crate::tier::TierBand;
use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::{info, warn};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

/// Application state shared across requests.
pub struct AppState {
    pub config: EngineConfig,
}

/// Error rendered as `{"error": "...", "details": [...]}`.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub details: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message, "details": self.details }));
        (self.status, body).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Invalid(errors) => {
                let details: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                warn!("rejected request: {}", details.join("; "));
                AppError {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    message: "invalid input".to_string(),
                    details,
                }
            }
            other => AppError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: other.to_string(),
                details: Vec::new(),
            },
        }
    }
}

/// Build the API router around an engine configuration.
pub fn build_router(config: EngineConfig) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState { config });
    let router = Router::new()
        .route("/api/annual", post(annual_handler))
        .route("/api/event", post(event_handler))
        .route("/api/pricing", post(pricing_handler))
        .route("/api/batch", post(batch_handler))
        .route("/api/tiers", get(tiers_handler))
        .with_state(state.clone());
    (router, state)
}

/// Handler for POST /api/annual
pub async fn annual_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<AnnualInput>,
) -> Result<Json<AnnualReport>, AppError> {
    info!("annual analysis for {} equipment items", input.equipment.len());
    Ok(Json(annual_report(&input, &state.config)?))
}

/// Handler for POST /api/event
pub async fn event_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<EventInput>,
) -> Result<Json<EventReport>, AppError> {
    info!("event analysis for '{}'", input.name);
    Ok(Json(event_report(&input, &state.config)?))
}

/// Handler for POST /api/pricing
pub async fn pricing_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<PricingInput>,
) -> Result<Json<PricingReport>, AppError> {
    info!("pricing recommendation for {} estimated sales", input.estimated_sales);
    Ok(Json(pricing_report(&input, &state.config)?))
}

/// Handler for POST /api/batch
pub async fn batch_handler(
    State(state): State<Arc<AppState>>,
    Json(requests): Json<Vec<AnalysisRequest>>,
) -> Json<BatchResult> {
    Json(run_batch(requests, &state.config))
}

/// Handler for GET /api/tiers
pub async fn tiers_handler(State(state): State<Arc<AppState>>) -> Json<Vec<TierBand>> {
    Json(state.config.tiers.bands().to_vec())
}

/// Launch the API server.  This function loads the configuration from
/// `config_path` and binds to the supplied address.  It blocks until
/// the server terminates.
pub async fn serve(addr: &str, config_path: &Path) -> Result<()> {
    let config = EngineConfig::load(config_path)?;
    let (router, _state) = build_router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}
