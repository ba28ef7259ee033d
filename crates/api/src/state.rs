use std::sync::Arc;

use cyclear_core::lqs::LqsPolicy;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the policy is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Scoring policy loaded at start-up.
    pub policy: Arc<LqsPolicy>,
}
