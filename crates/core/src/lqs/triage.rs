//! Batch scoring for the dashboard triage list.

use serde::Serialize;

use super::health::HealthStatus;
use super::listing::ListingInput;
use super::policy::LqsPolicy;
use super::scoring::calculate_lqs_with;
use crate::error::CoreError;
use crate::types::DbId;

/// Maximum number of listings accepted in one triage request.
pub const MAX_TRIAGE_BATCH: usize = 500;

/// One scored listing in a triage report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageEntry {
    /// Index of the listing in the input batch.
    pub position: usize,
    pub id: Option<DbId>,
    pub score: u8,
    pub health: HealthStatus,
}

/// Count of listings per health band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HealthSummary {
    pub total: usize,
    pub critical: usize,
    pub warning: usize,
    pub healthy: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageReport {
    /// Worst first; equal scores keep input order.
    pub entries: Vec<TriageEntry>,
    pub summary: HealthSummary,
    pub average_score: f64,
}

/// Reject batches larger than [`MAX_TRIAGE_BATCH`].
pub fn validate_batch_size(len: usize) -> Result<(), CoreError> {
    if len > MAX_TRIAGE_BATCH {
        return Err(CoreError::Validation(format!(
            "Triage batch of {len} listings exceeds the limit of {MAX_TRIAGE_BATCH}"
        )));
    }
    Ok(())
}

pub fn triage(listings: &[ListingInput]) -> TriageReport {
    triage_with(listings, &LqsPolicy::default())
}

pub fn triage_with(listings: &[ListingInput], policy: &LqsPolicy) -> TriageReport {
    let mut entries: Vec<TriageEntry> = listings
        .iter()
        .enumerate()
        .map(|(position, listing)| {
            let score = calculate_lqs_with(listing, policy);
            TriageEntry {
                position,
                id: listing.id,
                score,
                health: policy.health.classify(i32::from(score)),
            }
        })
        .collect();

    // Stable sort keeps input order for ties.
    entries.sort_by_key(|e| e.score);

    let mut summary = HealthSummary {
        total: entries.len(),
        ..Default::default()
    };
    for entry in &entries {
        match entry.health {
            HealthStatus::Critical => summary.critical += 1,
            HealthStatus::Warning => summary.warning += 1,
            HealthStatus::Healthy => summary.healthy += 1,
        }
    }

    let average_score = if entries.is_empty() {
        0.0
    } else {
        entries.iter().map(|e| f64::from(e.score)).sum::<f64>() / entries.len() as f64
    };

    TriageReport {
        entries,
        summary,
        average_score,
    }
}
