//! Tri-state health classification of an LQS total.

use serde::{Deserialize, Serialize};

use super::policy::HealthThresholds;
use crate::error::CoreError;

pub const HEALTH_CRITICAL: &str = "critical";
pub const HEALTH_WARNING: &str = "warning";
pub const HEALTH_HEALTHY: &str = "healthy";

/// All valid health status strings.
pub const VALID_HEALTH_STATUSES: &[&str] = &[HEALTH_CRITICAL, HEALTH_WARNING, HEALTH_HEALTHY];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Critical,
    Warning,
    Healthy,
}

impl HealthStatus {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            HEALTH_CRITICAL => Ok(Self::Critical),
            HEALTH_WARNING => Ok(Self::Warning),
            HEALTH_HEALTHY => Ok(Self::Healthy),
            _ => Err(CoreError::Validation(format!(
                "Invalid health status '{s}'. Must be one of: {}",
                VALID_HEALTH_STATUSES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => HEALTH_CRITICAL,
            Self::Warning => HEALTH_WARNING,
            Self::Healthy => HEALTH_HEALTHY,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HealthThresholds {
    /// Classify `score` into its band. Total over all integers.
    pub fn classify(&self, score: i32) -> HealthStatus {
        if score < self.warning_from {
            HealthStatus::Critical
        } else if score < self.healthy_from {
            HealthStatus::Warning
        } else {
            HealthStatus::Healthy
        }
    }
}

/// Classify a score with the default 50/80 bands.
pub fn health_status(score: i32) -> HealthStatus {
    HealthThresholds::default().classify(score)
}
