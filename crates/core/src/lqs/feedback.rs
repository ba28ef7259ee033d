//! Actionable hints attached to a score breakdown.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// One improvement hint. Hints explain a score; they never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LqsFeedback {
    MissingImagery,
    ShortTitle,
    SpammyTitle,
    UnderfilledTags,
    LowTagRelevance,
    WeakLongTail,
    FewImages,
    MissingVideo,
    Trendsetter,
}

impl LqsFeedback {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingImagery => "missing_imagery",
            Self::ShortTitle => "short_title",
            Self::SpammyTitle => "spammy_title",
            Self::UnderfilledTags => "underfilled_tags",
            Self::LowTagRelevance => "low_tag_relevance",
            Self::WeakLongTail => "weak_long_tail",
            Self::FewImages => "few_images",
            Self::MissingVideo => "missing_video",
            Self::Trendsetter => "trendsetter",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingImagery => "Add at least one product photo.",
            Self::ShortTitle => "Title is short; aim for at least 80 characters.",
            Self::SpammyTitle => "Title looks spammy (all caps or a word repeated too often).",
            Self::UnderfilledTags => "Use all 13 tags.",
            Self::LowTagRelevance => "Few tags appear in the title.",
            Self::WeakLongTail => "Use more multi-word (long-tail) tags.",
            Self::FewImages => "Add more photos; five or more is best.",
            Self::MissingVideo => "Add a listing video.",
            Self::Trendsetter => "Trend signal is low, but the visuals are outstanding.",
        }
    }
}

impl Serialize for LqsFeedback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LqsFeedback", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}
