//! Editor decorations for highlight spans
//!
//! Converts byte-offset spans into the 1-based line/column ranges, inline
//! class names and hover messages an editor widget consumes. Columns count
//! Unicode scalar values; a `\n` starts a new line.

use serde::{Deserialize, Serialize};

use crate::{category::Category, colors::category_color, span::Span};

/// 1-based editor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };
}

/// Inline decoration for one span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decoration {
    pub start: Position,

    /// Exclusive end position
    pub end: Position,

    pub category: Category,

    /// Inline class, e.g. `lighting-highlight`
    pub class_name: String,

    /// Markdown hover text, e.g. `**LIGHTING**: golden hour`
    pub hover: String,

    /// Hex color of the category
    pub color: String,
}

impl Decoration {
    fn new(span: &Span, start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            category: span.category,
            class_name: class_name(span.category),
            hover: format!(
                "**{}**: {}",
                span.category.as_str().to_uppercase(),
                span.text
            ),
            color: category_color(span.category).to_string(),
        }
    }
}

/// Inline class name for a category
pub fn class_name(category: Category) -> String {
    format!("{}-highlight", category.as_str())
}

/// Walks the source forward, translating byte offsets to positions
struct PositionCursor<'a> {
    text: &'a str,
    offset: usize,
    position: Position,
}

impl<'a> PositionCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            position: Position::START,
        }
    }

    /// Position of byte `target`. Targets must not decrease between calls.
    fn advance_to(&mut self, target: usize) -> Position {
        let target = target.min(self.text.len());
        if target > self.offset {
            for ch in self.text[self.offset..target].chars() {
                if ch == '\n' {
                    self.position.line += 1;
                    self.position.column = 1;
                } else {
                    self.position.column += 1;
                }
            }
            self.offset = target;
        }
        self.position
    }
}

/// Decorations for sorted, non-overlapping spans of `text`
///
/// One pass over the text regardless of span count.
pub fn decorate(text: &str, spans: &[Span]) -> Vec<Decoration> {
    let mut cursor = PositionCursor::new(text);
    spans
        .iter()
        .map(|span| {
            let start = cursor.advance_to(span.start);
            let end = cursor.advance_to(span.end);
            Decoration::new(span, start, end)
        })
        .collect()
}
