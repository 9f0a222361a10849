//! Highlight span output record

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A category-tagged range of the highlighted text
///
/// `start` and `end` are byte offsets into the UTF-8 source, so
/// `&text[span.range()] == span.text` always holds. Use [`Span::char_range`]
/// or [`Span::utf16_range`] when an editor counts positions differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,

    /// End byte offset (exclusive)
    pub end: usize,

    /// Semantic category
    pub category: Category,

    /// The matched substring
    pub text: String,
}

impl Span {
    /// Create a span over `range` of `source`
    ///
    /// `range` must lie on char boundaries of `source`; every regex match does.
    pub fn new(source: &str, range: Range<usize>, category: Category) -> Self {
        Self {
            start: range.start,
            end: range.end,
            category,
            text: source[range].to_string(),
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Range in Unicode scalar values instead of bytes
    pub fn char_range(&self, source: &str) -> Range<usize> {
        let start = source[..self.start].chars().count();
        start..start + self.text.chars().count()
    }

    /// Range in UTF-16 code units, as JavaScript string offsets count
    pub fn utf16_range(&self, source: &str) -> Range<usize> {
        let start = source[..self.start].encode_utf16().count();
        start..start + self.text.encode_utf16().count()
    }
}
