//! Route definitions for listing quality scoring.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::lqs;
use crate::state::AppState;

/// LQS routes mounted at `/lqs`.
///
/// ```text
/// POST   /score                   -> score_listing
/// POST   /preview                 -> preview_listing
/// POST   /triage                  -> triage_listings
/// POST   /visual                  -> score_visual
/// GET    /health-status/{score}   -> get_health_status
/// GET    /policy                  -> get_policy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/score", post(lqs::score_listing))
        .route("/preview", post(lqs::preview_listing))
        .route("/triage", post(lqs::triage_listings))
        .route("/visual", post(lqs::score_visual))
        .route("/health-status/{score}", get(lqs::get_health_status))
        .route("/policy", get(lqs::get_policy))
}
