//! Listing snapshots as consumed by the estimator.
//!
//! Deserialization is lenient: every field is optional and JSON `null`
//! collapses to the empty form, so partially-loaded or half-edited
//! listings always score.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::DbId;

/// A listing snapshot. Only the scoreable fields are modelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingInput {
    /// Carried through triage so results can be matched back. Not scored.
    pub id: Option<DbId>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Gallery URIs. `None` means absent, in which case `image_url` stands in.
    pub images: Option<Vec<String>>,
    pub image_url: Option<String>,
    /// Visual sub-score (0-35) from a prior AI analysis.
    pub lqs_visual_score: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub has_video: bool,
}

impl ListingInput {
    /// Whether any imagery exists, either in the gallery or as a cover URL.
    pub fn has_imagery(&self) -> bool {
        self.images.as_ref().is_some_and(|imgs| !imgs.is_empty()) || self.cover_url().is_some()
    }

    /// Gallery size used for asset richness.
    ///
    /// An explicit `images` list wins even when empty; the cover URL only
    /// counts when the list is absent.
    pub fn image_count(&self) -> usize {
        match &self.images {
            Some(imgs) => imgs.len(),
            None => usize::from(self.cover_url().is_some()),
        }
    }

    /// The AI visual score if it is present, non-zero and finite.
    pub fn ai_visual_score(&self) -> Option<f64> {
        self.lqs_visual_score
            .filter(|score| score.is_finite() && *score != 0.0)
    }

    /// Return a copy with every provided edit applied on top.
    pub fn with_edits(&self, edits: &ListingEdits) -> Self {
        let mut merged = self.clone();
        if let Some(title) = &edits.title {
            merged.title = title.clone();
        }
        if let Some(tags) = &edits.tags {
            merged.tags = tags.clone();
        }
        if let Some(images) = &edits.images {
            merged.images = Some(images.clone());
        }
        if let Some(image_url) = &edits.image_url {
            merged.image_url = Some(image_url.clone());
        }
        if let Some(has_video) = edits.has_video {
            merged.has_video = has_video;
        }
        merged
    }

    fn cover_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Unsaved field edits from the live-editing panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingEdits {
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub has_video: Option<bool>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- deserialization ------------------------------------------------------

    #[test]
    fn empty_object_deserializes_to_default() {
        let listing: ListingInput = serde_json::from_str("{}").unwrap();
        assert_eq!(listing, ListingInput::default());
    }

    #[test]
    fn nulls_collapse_to_empty() {
        let listing: ListingInput =
            serde_json::from_str(r#"{"title": null, "tags": null, "has_video": null}"#).unwrap();
        assert_eq!(listing.title, "");
        assert!(listing.tags.is_empty());
        assert!(!listing.has_video);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let listing: ListingInput =
            serde_json::from_str(r#"{"title": "Mug", "price": 12.5, "listing_type": "physical"}"#)
                .unwrap();
        assert_eq!(listing.title, "Mug");
    }

    // -- imagery --------------------------------------------------------------

    #[test]
    fn gallery_counts_images() {
        let listing = ListingInput {
            images: Some(vec!["a.jpg".into(), "b.jpg".into()]),
            ..Default::default()
        };
        assert!(listing.has_imagery());
        assert_eq!(listing.image_count(), 2);
    }

    #[test]
    fn cover_url_stands_in_when_gallery_absent() {
        let listing = ListingInput {
            image_url: Some("cover.jpg".into()),
            ..Default::default()
        };
        assert!(listing.has_imagery());
        assert_eq!(listing.image_count(), 1);
    }

    #[test]
    fn empty_gallery_shadows_cover_url_for_count() {
        let listing = ListingInput {
            images: Some(vec![]),
            image_url: Some("cover.jpg".into()),
            ..Default::default()
        };
        assert!(listing.has_imagery());
        assert_eq!(listing.image_count(), 0);
    }

    #[test]
    fn blank_cover_url_is_absent() {
        let listing = ListingInput {
            image_url: Some(String::new()),
            ..Default::default()
        };
        assert!(!listing.has_imagery());
        assert_eq!(listing.image_count(), 0);
    }

    // -- ai_visual_score ------------------------------------------------------

    #[test]
    fn zero_and_nan_visual_scores_are_absent() {
        for value in [0.0, f64::NAN, f64::INFINITY] {
            let listing = ListingInput {
                lqs_visual_score: Some(value),
                ..Default::default()
            };
            assert_eq!(listing.ai_visual_score(), None);
        }
    }

    #[test]
    fn present_visual_score_is_returned() {
        let listing = ListingInput {
            lqs_visual_score: Some(28.5),
            ..Default::default()
        };
        assert_eq!(listing.ai_visual_score(), Some(28.5));
    }

    // -- with_edits -----------------------------------------------------------

    #[test]
    fn edits_override_only_provided_fields() {
        let base = ListingInput {
            id: Some(7),
            title: "Old title".into(),
            tags: vec!["old tag".into()],
            images: Some(vec!["a.jpg".into()]),
            lqs_visual_score: Some(30.0),
            ..Default::default()
        };
        let edits = ListingEdits {
            title: Some("New title".into()),
            has_video: Some(true),
            ..Default::default()
        };

        let merged = base.with_edits(&edits);
        assert_eq!(merged.id, Some(7));
        assert_eq!(merged.title, "New title");
        assert_eq!(merged.tags, vec!["old tag".to_string()]);
        assert_eq!(merged.images, Some(vec!["a.jpg".to_string()]));
        assert_eq!(merged.lqs_visual_score, Some(30.0));
        assert!(merged.has_video);
    }

    #[test]
    fn empty_edits_leave_listing_unchanged() {
        let base = ListingInput {
            title: "Unchanged".into(),
            ..Default::default()
        };
        assert_eq!(base.with_edits(&ListingEdits::default()), base);
    }
}
