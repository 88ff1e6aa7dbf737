//! Tutorial outline types.
//!
//! An outline describes a tutorial as an ordered list of chapters. Each
//! chapter names its screen-recording asset, the talking points for the
//! narration, and raw annotation lines for the overlay renderer.

use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;

/// Narration pace used to budget words per chapter.
pub const WORDS_PER_SECOND: u64 = 4;

/// Word budget for chapters whose duration is unknown.
pub const DEFAULT_WORD_BUDGET: u64 = 100;

/// Structured form of an outline document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub title: String,

    /// Target audience description.
    pub audience: String,

    pub chapters: Vec<Chapter>,

    /// Sum of all chapter durations.
    pub total_duration_secs: u64,
}

/// One chapter (video section) of an outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Section identifier, e.g. `02_setup`.
    pub name: String,

    /// Media file name, relative to the assets directory.
    pub asset: Option<String>,

    /// Duration declared in the asset line, 0 when unknown.
    pub duration_secs: u64,

    /// Talking points for the narration.
    pub points: Vec<String>,

    /// Raw annotation lines as written in the outline.
    pub annotations: Vec<String>,

    /// Narration word budget.
    pub max_words: u64,

    /// Annotation records resolved from `annotations`, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_annotations: Option<Vec<Annotation>>,
}

impl Chapter {
    pub fn new(
        name: impl Into<String>,
        asset: Option<String>,
        duration_secs: u64,
        points: Vec<String>,
        annotations: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            asset,
            duration_secs,
            points,
            annotations,
            max_words: word_budget(duration_secs),
            parsed_annotations: None,
        }
    }
}

impl Outline {
    /// Build an outline, deriving the total duration from the chapters.
    pub fn new(title: impl Into<String>, audience: impl Into<String>, chapters: Vec<Chapter>) -> Self {
        let total_duration_secs = chapters
            .iter()
            .fold(0u64, |total, c| total.saturating_add(c.duration_secs));
        Self {
            title: title.into(),
            audience: audience.into(),
            chapters,
            total_duration_secs,
        }
    }
}

/// Narration word budget for a chapter of the given length.
pub fn word_budget(duration_secs: u64) -> u64 {
    if duration_secs > 0 {
        duration_secs.saturating_mul(WORDS_PER_SECOND)
    } else {
        DEFAULT_WORD_BUDGET
    }
}
