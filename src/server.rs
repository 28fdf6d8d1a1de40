use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::config::constants::{FALLBACK_SPELLING, MAX_INPUT_LENGTH};
use crate::error::{Result, SpellError};
use crate::models::{HealthResponse, SpellRequest, SpellResponse};
use crate::spelling::{number_to_english_with, Qualifiers};
use crate::utils::sanitize::clamp_fraction_digits;

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub request_timeout: Duration,
}

// HTTP Handlers

/// Spell a number as English words
///
/// Implements the consumer contract around the conversion core: input is
/// clamped to two fractional digits first, and a magnitude overflow is
/// answered with the fallback display text instead of an error.
async fn spell_number(
    State(_state): State<AppState>,
    Json(req): Json<SpellRequest>,
) -> Result<Json<SpellResponse>> {
    tracing::debug!(
        "Spell request - number='{}', qualifiers='{}'/'{}'",
        req.number,
        req.whole_qualifier,
        req.fraction_qualifier
    );

    if req.number.len() > MAX_INPUT_LENGTH {
        return Err(SpellError::InputTooLong(req.number.len()));
    }

    let clamped = clamp_fraction_digits(req.number.trim());
    let currency = clamped.contains('.');
    let qualifiers = Qualifiers::new(req.whole_qualifier, req.fraction_qualifier);

    match number_to_english_with(&clamped, &qualifiers) {
        Ok(spelling) => Ok(Json(SpellResponse {
            status: "ok".to_string(),
            input: clamped,
            spelling,
            currency,
        })),
        Err(SpellError::MagnitudeOverflow { digits }) => {
            tracing::debug!(
                "Magnitude overflow at {} digits, substituting fallback spelling",
                digits
            );
            Ok(Json(SpellResponse {
                status: "fallback".to_string(),
                input: clamped,
                spelling: FALLBACK_SPELLING.to_string(),
                currency,
            }))
        }
        Err(err) => Err(err),
    }
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create and configure the HTTP server router
pub fn create_router(state: AppState) -> Router<()> {
    // Configure CORS to allow all origins (adjust as needed for production)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let timeout = TimeoutLayer::new(state.request_timeout);

    Router::new()
        .route("/spell", post(spell_number))
        .route("/health", get(health_check))
        .layer(timeout)
        .with_state(state)
        .layer(cors)
}
