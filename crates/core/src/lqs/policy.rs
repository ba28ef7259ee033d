//! LQS weights, caps, and tunable thresholds.
//!
//! Fixed rule constants live here as `pub const`s. The handful of values
//! that are business policy rather than formula (visual baseline, title
//! length floor, trendsetter override, health bands) are also grouped in
//! [`LqsPolicy`] so a deployment can recalibrate them from a JSON file.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Module caps
// ---------------------------------------------------------------------------

/// Maximum Visual Impulse contribution.
pub const VISUAL_CAP: f64 = 35.0;
/// Maximum SEO Foundation contribution.
pub const SEO_CAP: f64 = 35.0;
/// Maximum Zeitgeist contribution.
pub const ZEITGEIST_CAP: f64 = 30.0;
/// Highest possible total score.
pub const MAX_SCORE: u8 = 100;

// ---------------------------------------------------------------------------
// Module A: Visual Impulse
// ---------------------------------------------------------------------------

/// Credit for having any imagery when no AI visual score exists.
pub const DEFAULT_VISUAL_BASELINE: f64 = 20.0;

// ---------------------------------------------------------------------------
// Module B: SEO Foundation
// ---------------------------------------------------------------------------

/// Starting value of the title quality sub-score.
pub const TITLE_BASE: f64 = 15.0;
/// Titles shorter than this (UTF-16 units) are penalised.
pub const DEFAULT_TITLE_MIN_LENGTH: usize = 80;
/// Deduction for a short title.
pub const SHORT_TITLE_PENALTY: f64 = 4.0;
/// Deduction for a spam-like title.
pub const SPAM_TITLE_PENALTY: f64 = 3.0;
/// An all-caps title must be longer than this to count as shouting.
pub const ALL_CAPS_MIN_LENGTH: usize = 5;
/// Words must be longer than this to count toward repetition.
pub const REPEAT_WORD_MIN_LENGTH: usize = 2;
/// A word repeated more than this many times is spam.
pub const REPEAT_WORD_MAX_COUNT: usize = 3;

/// Etsy's per-listing tag limit; the fill ramp tops out here.
pub const TAG_TARGET: usize = 13;
/// Maximum tag fill points.
pub const TAG_FILL_MAX: f64 = 2.0;
/// Relevance points when more than [`RELEVANCE_HIGH_RATIO`] of tags match.
pub const RELEVANCE_HIGH_POINTS: f64 = 6.0;
/// Relevance points when more than [`RELEVANCE_LOW_RATIO`] of tags match.
pub const RELEVANCE_LOW_POINTS: f64 = 3.0;
pub const RELEVANCE_HIGH_RATIO: f64 = 0.4;
pub const RELEVANCE_LOW_RATIO: f64 = 0.1;
/// Multi-word tag count earning full long-tail points.
pub const LONG_TAIL_HIGH_COUNT: usize = 7;
/// Multi-word tag count earning partial long-tail points.
pub const LONG_TAIL_LOW_COUNT: usize = 4;
pub const LONG_TAIL_HIGH_POINTS: f64 = 7.0;
pub const LONG_TAIL_LOW_POINTS: f64 = 3.5;

/// Image count earning the full gallery bonus.
pub const GALLERY_FULL_COUNT: usize = 5;
/// Image count earning the partial gallery bonus.
pub const GALLERY_PARTIAL_COUNT: usize = 2;
pub const GALLERY_FULL_POINTS: f64 = 4.0;
pub const GALLERY_PARTIAL_POINTS: f64 = 2.0;
pub const VIDEO_POINTS: f64 = 1.0;

// ---------------------------------------------------------------------------
// Module C: Zeitgeist
// ---------------------------------------------------------------------------

/// Bestseller similarity is `BESTSELLER_MIN + draw * BESTSELLER_SPAN`.
pub const BESTSELLER_MIN: f64 = 5.0;
pub const BESTSELLER_SPAN: f64 = 10.0;

pub const VELOCITY_HIGH_DRAW: f64 = 0.66;
pub const VELOCITY_MID_DRAW: f64 = 0.33;
pub const VELOCITY_HIGH_POINTS: f64 = 10.0;
pub const VELOCITY_MID_POINTS: f64 = 8.0;
pub const VELOCITY_LOW_POINTS: f64 = 5.0;

pub const SEASONAL_DRAW: f64 = 0.5;
pub const SEASONAL_IN_POINTS: f64 = 5.0;
pub const SEASONAL_OUT_POINTS: f64 = 2.0;

pub const DEFAULT_TRENDSETTER_ZEITGEIST_BELOW: f64 = 15.0;
pub const DEFAULT_TRENDSETTER_VISUAL_ABOVE: f64 = 30.0;
pub const DEFAULT_TRENDSETTER_OVERRIDE: f64 = 25.0;

// ---------------------------------------------------------------------------
// Health bands
// ---------------------------------------------------------------------------

pub const DEFAULT_WARNING_FROM: i32 = 50;
pub const DEFAULT_HEALTHY_FROM: i32 = 80;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Floor applied to the Zeitgeist module when visuals are excellent.
///
/// If the rolled Zeitgeist sum is below `zeitgeist_below` and the visual
/// score is above `visual_above`, the Zeitgeist sum becomes `override_score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrendsetterPolicy {
    pub zeitgeist_below: f64,
    pub visual_above: f64,
    pub override_score: f64,
}

impl Default for TrendsetterPolicy {
    fn default() -> Self {
        Self {
            zeitgeist_below: DEFAULT_TRENDSETTER_ZEITGEIST_BELOW,
            visual_above: DEFAULT_TRENDSETTER_VISUAL_ABOVE,
            override_score: DEFAULT_TRENDSETTER_OVERRIDE,
        }
    }
}

/// Lower bounds of the `warning` and `healthy` bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthThresholds {
    pub warning_from: i32,
    pub healthy_from: i32,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            warning_from: DEFAULT_WARNING_FROM,
            healthy_from: DEFAULT_HEALTHY_FROM,
        }
    }
}

/// Tunable LQS policy. `Default` reproduces the production calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LqsPolicy {
    pub visual_baseline: f64,
    pub title_min_length: usize,
    pub trendsetter: TrendsetterPolicy,
    pub health: HealthThresholds,
}

impl Default for LqsPolicy {
    fn default() -> Self {
        Self {
            visual_baseline: DEFAULT_VISUAL_BASELINE,
            title_min_length: DEFAULT_TITLE_MIN_LENGTH,
            trendsetter: TrendsetterPolicy::default(),
            health: HealthThresholds::default(),
        }
    }
}

impl LqsPolicy {
    /// Parse a policy from JSON and validate it.
    ///
    /// Missing keys fall back to defaults; unknown keys are rejected so a
    /// typo in a policy file does not silently keep the default.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let policy: Self = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Invalid LQS policy JSON: {e}")))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Check that every value keeps the score inside `[0, 100]`.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_in_range("visual_baseline", self.visual_baseline, VISUAL_CAP)?;
        validate_in_range(
            "trendsetter.zeitgeist_below",
            self.trendsetter.zeitgeist_below,
            ZEITGEIST_CAP,
        )?;
        validate_in_range(
            "trendsetter.visual_above",
            self.trendsetter.visual_above,
            VISUAL_CAP,
        )?;
        validate_in_range(
            "trendsetter.override_score",
            self.trendsetter.override_score,
            ZEITGEIST_CAP,
        )?;
        self.health.validate()
    }
}

impl HealthThresholds {
    /// Both bounds must lie in `[0, 100]` and `warning_from <= healthy_from`.
    pub fn validate(&self) -> Result<(), CoreError> {
        let max = i32::from(MAX_SCORE);
        for (name, value) in [
            ("health.warning_from", self.warning_from),
            ("health.healthy_from", self.healthy_from),
        ] {
            if !(0..=max).contains(&value) {
                return Err(CoreError::Validation(format!(
                    "{name} must be between 0 and {max}, got {value}"
                )));
            }
        }
        if self.warning_from > self.healthy_from {
            return Err(CoreError::Validation(format!(
                "health.warning_from ({}) must be <= health.healthy_from ({})",
                self.warning_from, self.healthy_from
            )));
        }
        Ok(())
    }
}

fn validate_in_range(name: &str, value: f64, max: f64) -> Result<(), CoreError> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{name} must be between 0 and {max}, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn caps_sum_to_max_score() {
        assert_eq!(VISUAL_CAP + SEO_CAP + ZEITGEIST_CAP, f64::from(MAX_SCORE));
    }

    #[test]
    fn default_policy_is_valid() {
        assert!(LqsPolicy::default().validate().is_ok());
    }

    // -- from_json_str --------------------------------------------------------

    #[test]
    fn empty_object_yields_defaults() {
        let policy = LqsPolicy::from_json_str("{}").unwrap();
        assert_eq!(policy, LqsPolicy::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let policy =
            LqsPolicy::from_json_str(r#"{"trendsetter": {"override_score": 20}}"#).unwrap();
        assert_eq!(policy.trendsetter.override_score, 20.0);
        assert_eq!(
            policy.trendsetter.zeitgeist_below,
            DEFAULT_TRENDSETTER_ZEITGEIST_BELOW
        );
        assert_eq!(policy.health, HealthThresholds::default());
    }

    #[test]
    fn unknown_key_rejected() {
        assert_matches!(
            LqsPolicy::from_json_str(r#"{"visual_basline": 10}"#),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn malformed_json_rejected() {
        assert_matches!(
            LqsPolicy::from_json_str("not json"),
            Err(CoreError::Validation(_))
        );
    }

    // -- validate -------------------------------------------------------------

    #[test]
    fn baseline_above_cap_rejected() {
        let policy = LqsPolicy {
            visual_baseline: 36.0,
            ..LqsPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn non_finite_override_rejected() {
        let mut policy = LqsPolicy::default();
        policy.trendsetter.override_score = f64::NAN;
        assert!(policy.validate().is_err());
    }

    #[test]
    fn inverted_health_bands_rejected() {
        let thresholds = HealthThresholds {
            warning_from: 90,
            healthy_from: 60,
        };
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn out_of_range_health_band_rejected() {
        let thresholds = HealthThresholds {
            warning_from: -1,
            healthy_from: 80,
        };
        assert!(thresholds.validate().is_err());
    }
}
