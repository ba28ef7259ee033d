//! Handlers for listing quality scoring.
//!
//! Every handler is a thin wrapper over `cyclear_core::lqs`; scoring runs
//! with the policy loaded at start-up.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use cyclear_core::lqs::{
    score_listing_with, score_visual_signals, triage_with, validate_batch_size, HealthStatus,
    ListingEdits, ListingInput, VisualSignals,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Body for `POST /lqs/preview`.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub listing: ListingInput,
    #[serde(default)]
    pub edits: ListingEdits,
}

/// Body for `POST /lqs/triage`.
#[derive(Debug, Deserialize)]
pub struct TriageRequest {
    pub listings: Vec<ListingInput>,
}

#[derive(Debug, Serialize)]
pub struct VisualScoreResponse {
    pub lqs_visual_score: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthStatusResponse {
    pub score: i32,
    pub health: HealthStatus,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// POST /api/v1/lqs/score
///
/// Score a single listing snapshot and return the full breakdown.
pub async fn score_listing(
    State(state): State<AppState>,
    Json(listing): Json<ListingInput>,
) -> impl IntoResponse {
    let breakdown = score_listing_with(&listing, &state.policy);

    tracing::debug!(
        listing_id = ?listing.id,
        score = breakdown.total_score,
        health = %breakdown.health,
        "Listing scored",
    );

    Json(DataResponse { data: breakdown })
}

/// POST /api/v1/lqs/preview
///
/// Merge unsaved edits over the last fetched listing and score the draft.
/// The live-editing panel calls this on every change.
pub async fn preview_listing(
    State(state): State<AppState>,
    Json(input): Json<PreviewRequest>,
) -> impl IntoResponse {
    let draft = input.listing.with_edits(&input.edits);
    let breakdown = score_listing_with(&draft, &state.policy);

    Json(DataResponse { data: breakdown })
}

/// POST /api/v1/lqs/triage
///
/// Score a batch and return it worst-first with per-band counts.
pub async fn triage_listings(
    State(state): State<AppState>,
    Json(input): Json<TriageRequest>,
) -> AppResult<impl IntoResponse> {
    validate_batch_size(input.listings.len())?;

    let report = triage_with(&input.listings, &state.policy);

    tracing::info!(
        total = report.summary.total,
        critical = report.summary.critical,
        warning = report.summary.warning,
        healthy = report.summary.healthy,
        "Triage computed",
    );

    Ok(Json(DataResponse { data: report }))
}

/// POST /api/v1/lqs/visual
///
/// Turn vision-model signals into the 0-35 `lqs_visual_score`.
pub async fn score_visual(Json(signals): Json<VisualSignals>) -> impl IntoResponse {
    let lqs_visual_score = score_visual_signals(&signals);

    Json(DataResponse {
        data: VisualScoreResponse { lqs_visual_score },
    })
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// GET /api/v1/lqs/health-status/{score}
pub async fn get_health_status(
    State(state): State<AppState>,
    Path(score): Path<i32>,
) -> impl IntoResponse {
    let health = state.policy.health.classify(score);

    Json(DataResponse {
        data: HealthStatusResponse { score, health },
    })
}

/// GET /api/v1/lqs/policy
pub async fn get_policy(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: *state.policy,
    })
}
