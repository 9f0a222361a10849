//! Semantic categories assigned to highlighted prompt text
//!
//! The set is closed. Declaration order is the display order only; the order in
//! which categories claim text is fixed by [`KEYWORD_PASS_ORDER`] and
//! [`PATTERN_PASS_ORDER`].

use crate::error::HighlightError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content class of a highlighted span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// People, creatures, objects and physical details
    Subject,
    /// Art styles, media and aesthetics
    Style,
    /// Time of day, light sources and light qualities
    Lighting,
    /// Shot types, angles, lenses and composition
    Camera,
    /// Resolution and quality boosters
    Quality,
    /// Colors and palettes
    Color,
    /// Emotions and mood
    Emotion,
    /// Environments and locations
    Setting,
    /// Full lines annotated with `//`
    Comment,
}

/// Categories that own a keyword table, in the order they claim text.
pub const KEYWORD_PASS_ORDER: [Category; 8] = [
    Category::Subject,
    Category::Style,
    Category::Lighting,
    Category::Camera,
    Category::Quality,
    Category::Color,
    Category::Emotion,
    Category::Setting,
];

/// Categories that own structural patterns, in the order they claim text.
///
/// Comment patterns run before everything else and are not part of this list.
pub const PATTERN_PASS_ORDER: [Category; 4] = [
    Category::Quality,
    Category::Style,
    Category::Camera,
    Category::Lighting,
];

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 9] = [
        Category::Subject,
        Category::Style,
        Category::Lighting,
        Category::Camera,
        Category::Quality,
        Category::Color,
        Category::Emotion,
        Category::Setting,
        Category::Comment,
    ];

    /// Lowercase name used in CSS classes, JSON and tooltips
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Subject => "subject",
            Category::Style => "style",
            Category::Lighting => "lighting",
            Category::Camera => "camera",
            Category::Quality => "quality",
            Category::Color => "color",
            Category::Emotion => "emotion",
            Category::Setting => "setting",
            Category::Comment => "comment",
        }
    }

    /// Human-readable description for legends
    pub fn description(&self) -> &'static str {
        match self {
            Category::Subject => "Subjects & characters",
            Category::Style => "Styles & aesthetics",
            Category::Lighting => "Lighting & atmosphere",
            Category::Camera => "Camera & composition",
            Category::Quality => "Quality & technical",
            Category::Color => "Colors & palette",
            Category::Emotion => "Emotions & mood",
            Category::Setting => "Settings & environments",
            Category::Comment => "Comment",
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Category::Comment)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| HighlightError::UnknownCategory(s.to_string()))
    }
}
