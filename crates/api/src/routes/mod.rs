pub mod health;
pub mod lqs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /lqs/score                         score one listing (POST)
/// /lqs/preview                       score a listing with unsaved edits (POST)
/// /lqs/triage                        score and rank a batch (POST)
/// /lqs/visual                        visual sub-score from image signals (POST)
/// /lqs/health-status/{score}         classify a score (GET)
/// /lqs/policy                        active scoring policy (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/lqs", lqs::router())
}
