//! The Listing Quality Score estimator.
//!
//! Three modules are scored independently, each clamped to its cap:
//!
//! - **Visual Impulse** (35): the AI visual score, or a baseline for
//!   having any imagery at all.
//! - **SEO Foundation** (35): title quality, tag health and asset richness.
//! - **Zeitgeist** (30): a simulated market-trend roll seeded by the title.
//!
//! The grand total is rounded once, at the end. Scoring is a pure function
//! of the listing and the policy; the same snapshot always gets the same
//! score, which keeps live-editing previews from flickering.

use std::collections::HashMap;

use serde::Serialize;

use super::feedback::LqsFeedback;
use super::health::HealthStatus;
use super::listing::ListingInput;
use super::policy::*;
use super::rng::SeededRng;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Full result of scoring one listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LqsBreakdown {
    pub total_score: u8,
    pub visual_impulse_score: f64,
    pub seo_foundation_score: f64,
    pub zeitgeist_score: f64,
    pub is_trendsetter: bool,
    pub health: HealthStatus,
    pub feedback: Vec<LqsFeedback>,
}

/// Title quality sub-score with the penalties that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleQuality {
    pub score: f64,
    pub too_short: bool,
    pub spammy: bool,
}

/// SEO Foundation parts before the module cap is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeoFoundation {
    pub title: TitleQuality,
    pub tag_fill: f64,
    pub tag_relevance: f64,
    pub long_tail: f64,
    pub asset_richness: f64,
}

impl SeoFoundation {
    /// Sum of all parts, clamped to [`SEO_CAP`].
    pub fn total(&self) -> f64 {
        let sum = self.title.score
            + self.tag_fill
            + self.tag_relevance
            + self.long_tail
            + self.asset_richness;
        sum.min(SEO_CAP)
    }
}

/// Zeitgeist rolls and the final module score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zeitgeist {
    pub bestseller_similarity: f64,
    pub market_velocity: f64,
    pub seasonal_relevance: f64,
    pub is_trendsetter: bool,
    pub score: f64,
}

impl Zeitgeist {
    /// The rolled sum before any trendsetter override.
    pub fn raw_sum(&self) -> f64 {
        self.bestseller_similarity + self.market_velocity + self.seasonal_relevance
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Score a listing with the default policy. Always in `[0, 100]`.
pub fn calculate_lqs(listing: &ListingInput) -> u8 {
    calculate_lqs_with(listing, &LqsPolicy::default())
}

pub fn calculate_lqs_with(listing: &ListingInput, policy: &LqsPolicy) -> u8 {
    score_listing_with(listing, policy).total_score
}

/// Score a listing with the default policy and return the full breakdown.
pub fn score_listing(listing: &ListingInput) -> LqsBreakdown {
    score_listing_with(listing, &LqsPolicy::default())
}

pub fn score_listing_with(listing: &ListingInput, policy: &LqsPolicy) -> LqsBreakdown {
    let visual = visual_impulse(listing, policy);
    let seo = seo_foundation(listing, policy);
    let zeitgeist = zeitgeist(&listing.title, visual, policy);

    let seo_total = seo.total();
    let total_score = round_total(visual + seo_total + zeitgeist.score);

    LqsBreakdown {
        total_score,
        visual_impulse_score: visual,
        seo_foundation_score: seo_total,
        zeitgeist_score: zeitgeist.score,
        is_trendsetter: zeitgeist.is_trendsetter,
        health: policy.health.classify(i32::from(total_score)),
        feedback: collect_feedback(listing, visual, &seo, &zeitgeist),
    }
}

// ---------------------------------------------------------------------------
// Module A: Visual Impulse
// ---------------------------------------------------------------------------

/// The AI visual score when available, else the imagery baseline, else 0.
pub fn visual_impulse(listing: &ListingInput, policy: &LqsPolicy) -> f64 {
    match listing.ai_visual_score() {
        Some(score) => score.clamp(0.0, VISUAL_CAP),
        None if listing.has_imagery() => policy.visual_baseline.clamp(0.0, VISUAL_CAP),
        None => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Module B: SEO Foundation
// ---------------------------------------------------------------------------

pub fn seo_foundation(listing: &ListingInput, policy: &LqsPolicy) -> SeoFoundation {
    let title_lower = listing.title.to_lowercase();
    let tags = &listing.tags;

    SeoFoundation {
        title: title_quality(&listing.title, policy),
        tag_fill: tag_fill(tags.len()),
        tag_relevance: tag_relevance(&title_lower, tags),
        long_tail: long_tail(tags),
        asset_richness: asset_richness(listing.image_count(), listing.has_video),
    }
}

/// Start at 15, deduct for a short title and for spam, floor at 0.
pub fn title_quality(title: &str, policy: &LqsPolicy) -> TitleQuality {
    let too_short = utf16_len(title) < policy.title_min_length;
    let spammy = is_spammy_title(title);

    let mut score = TITLE_BASE;
    if too_short {
        score -= SHORT_TITLE_PENALTY;
    }
    if spammy {
        score -= SPAM_TITLE_PENALTY;
    }

    TitleQuality {
        score: score.max(0.0),
        too_short,
        spammy,
    }
}

/// All caps (and long enough to be shouting), or any word longer than two
/// characters used more than three times.
pub fn is_spammy_title(title: &str) -> bool {
    if utf16_len(title) > ALL_CAPS_MIN_LENGTH && title.to_uppercase() == title {
        return true;
    }

    let lower = title.to_lowercase();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in lower.split_whitespace() {
        if utf16_len(word) <= REPEAT_WORD_MIN_LENGTH {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        *count += 1;
        if *count > REPEAT_WORD_MAX_COUNT {
            return true;
        }
    }
    false
}

/// Linear ramp to [`TAG_FILL_MAX`] at [`TAG_TARGET`] tags.
pub fn tag_fill(tag_count: usize) -> f64 {
    (tag_count as f64 / TAG_TARGET as f64 * TAG_FILL_MAX).min(TAG_FILL_MAX)
}

/// Points for the share of tags that appear verbatim in the title.
pub fn tag_relevance(title_lower: &str, tags: &[String]) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }

    let matches = tags
        .iter()
        .filter(|tag| title_lower.contains(tag.to_lowercase().as_str()))
        .count();
    let ratio = matches as f64 / tags.len() as f64;

    if ratio > RELEVANCE_HIGH_RATIO {
        RELEVANCE_HIGH_POINTS
    } else if ratio > RELEVANCE_LOW_RATIO {
        RELEVANCE_LOW_POINTS
    } else {
        0.0
    }
}

/// Points for multi-word tags.
pub fn long_tail(tags: &[String]) -> f64 {
    let count = tags.iter().filter(|tag| tag.trim().contains(' ')).count();

    if count >= LONG_TAIL_HIGH_COUNT {
        LONG_TAIL_HIGH_POINTS
    } else if count >= LONG_TAIL_LOW_COUNT {
        LONG_TAIL_LOW_POINTS
    } else {
        0.0
    }
}

/// Gallery size bonus plus a point for video.
pub fn asset_richness(image_count: usize, has_video: bool) -> f64 {
    let gallery = if image_count >= GALLERY_FULL_COUNT {
        GALLERY_FULL_POINTS
    } else if image_count >= GALLERY_PARTIAL_COUNT {
        GALLERY_PARTIAL_POINTS
    } else {
        0.0
    };
    let video = if has_video { VIDEO_POINTS } else { 0.0 };
    gallery + video
}

// ---------------------------------------------------------------------------
// Module C: Zeitgeist
// ---------------------------------------------------------------------------

/// Roll the simulated market signals for `title`.
///
/// Draw order is fixed: bestseller similarity, then market velocity, then
/// seasonal relevance.
pub fn zeitgeist(title: &str, visual_score: f64, policy: &LqsPolicy) -> Zeitgeist {
    let mut rng = SeededRng::new(title);

    let bestseller_similarity = BESTSELLER_MIN + rng.next_f64() * BESTSELLER_SPAN;

    let velocity_draw = rng.next_f64();
    let market_velocity = if velocity_draw > VELOCITY_HIGH_DRAW {
        VELOCITY_HIGH_POINTS
    } else if velocity_draw > VELOCITY_MID_DRAW {
        VELOCITY_MID_POINTS
    } else {
        VELOCITY_LOW_POINTS
    };

    let seasonal_relevance = if rng.next_f64() > SEASONAL_DRAW {
        SEASONAL_IN_POINTS
    } else {
        SEASONAL_OUT_POINTS
    };

    let raw = bestseller_similarity + market_velocity + seasonal_relevance;
    let trendsetter = &policy.trendsetter;
    let is_trendsetter =
        raw < trendsetter.zeitgeist_below && visual_score > trendsetter.visual_above;

    let score = if is_trendsetter {
        tracing::debug!(
            raw,
            visual_score,
            override_score = trendsetter.override_score,
            "Trendsetter override applied"
        );
        trendsetter.override_score
    } else {
        raw
    };

    Zeitgeist {
        bestseller_similarity,
        market_velocity,
        seasonal_relevance,
        is_trendsetter,
        score: score.clamp(0.0, ZEITGEIST_CAP),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn round_total(total: f64) -> u8 {
    if !total.is_finite() {
        return 0;
    }
    total.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

fn collect_feedback(
    listing: &ListingInput,
    visual: f64,
    seo: &SeoFoundation,
    zeitgeist: &Zeitgeist,
) -> Vec<LqsFeedback> {
    let checks = [
        (visual == 0.0, LqsFeedback::MissingImagery),
        (seo.title.too_short, LqsFeedback::ShortTitle),
        (seo.title.spammy, LqsFeedback::SpammyTitle),
        (listing.tags.len() < TAG_TARGET, LqsFeedback::UnderfilledTags),
        (
            seo.tag_relevance < RELEVANCE_HIGH_POINTS,
            LqsFeedback::LowTagRelevance,
        ),
        (seo.long_tail < LONG_TAIL_HIGH_POINTS, LqsFeedback::WeakLongTail),
        (
            listing.image_count() < GALLERY_FULL_COUNT,
            LqsFeedback::FewImages,
        ),
        (!listing.has_video, LqsFeedback::MissingVideo),
        (zeitgeist.is_trendsetter, LqsFeedback::Trendsetter),
    ];

    checks
        .into_iter()
        .filter_map(|(applies, hint)| applies.then_some(hint))
        .collect()
}

/// Length in UTF-16 code units, matching how the dashboard counts characters.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
