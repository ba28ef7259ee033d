//! Listing Quality Score (LQS).
//!
//! A deterministic 0-100 health score for a listing, built from three
//! capped modules (visual, SEO, simulated trend), plus the health bands,
//! improvement hints and batch triage the dashboard renders from it.

pub mod feedback;
pub mod health;
pub mod listing;
pub mod policy;
pub mod rng;
pub mod scoring;
pub mod triage;
pub mod visual;

pub use feedback::LqsFeedback;
pub use health::{health_status, HealthStatus};
pub use listing::{ListingEdits, ListingInput};
pub use policy::{HealthThresholds, LqsPolicy, TrendsetterPolicy};
pub use scoring::{
    calculate_lqs, calculate_lqs_with, score_listing, score_listing_with, LqsBreakdown,
};
pub use triage::{
    triage, triage_with, validate_batch_size, HealthSummary, TriageEntry, TriageReport,
    MAX_TRIAGE_BATCH,
};
pub use visual::{score_visual_signals, VisualSignals};
