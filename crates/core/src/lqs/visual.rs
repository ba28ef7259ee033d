//! Visual sub-score derived from AI image signals.
//!
//! The analysis pipeline runs this over the signals its vision model
//! reports and stores the result as `lqs_visual_score` on the listing.

use serde::{Deserialize, Serialize};

use super::policy::VISUAL_CAP;

/// Points for a sharp image.
pub const SHARPNESS_POINTS: f64 = 5.0;
/// Cap for the simplicity and texture sub-scores.
pub const COMPONENT_CAP: f64 = 10.0;
pub const CENTERED_SIMPLICITY: f64 = 10.0;
pub const UNCENTERED_SIMPLICITY: f64 = 5.0;
pub const HIGH_CONTRAST_TEXTURE: f64 = 10.0;
pub const LOW_CONTRAST_TEXTURE: f64 = 4.0;
pub const LIFESTYLE_POINTS: f64 = 10.0;

/// Signals reported by the vision model for a listing's hero image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualSignals {
    /// `None` is treated as sharp.
    pub is_sharp: Option<bool>,
    /// Explicit simplicity rating (0-10); overrides `is_centered`.
    pub simplicity_score: Option<f64>,
    pub is_centered: bool,
    /// Explicit texture/aesthetics rating (0-10); overrides `high_contrast`.
    pub texture_aesthetics: Option<f64>,
    pub high_contrast: bool,
    pub has_lifestyle: bool,
}

/// Combine image signals into a 0-35 visual score.
pub fn score_visual_signals(signals: &VisualSignals) -> f64 {
    let sharpness = if signals.is_sharp.unwrap_or(true) {
        SHARPNESS_POINTS
    } else {
        0.0
    };

    let simplicity = explicit_rating(signals.simplicity_score).unwrap_or(if signals.is_centered {
        CENTERED_SIMPLICITY
    } else {
        UNCENTERED_SIMPLICITY
    });

    let texture = explicit_rating(signals.texture_aesthetics).unwrap_or(if signals.high_contrast {
        HIGH_CONTRAST_TEXTURE
    } else {
        LOW_CONTRAST_TEXTURE
    });

    let lifestyle = if signals.has_lifestyle {
        LIFESTYLE_POINTS
    } else {
        0.0
    };

    (sharpness + simplicity + texture + lifestyle).min(VISUAL_CAP)
}

fn explicit_rating(value: Option<f64>) -> Option<f64> {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, COMPONENT_CAP))
}
