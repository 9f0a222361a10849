//! Prompt Highlighter - instant syntax highlighting for AI image and video prompts
//!
//! Tags substrings of a prompt with semantic categories so an editor can
//! decorate them while the user types:
//! - Static keyword dictionaries per category, compiled once into word-bounded,
//!   case-insensitive alternations
//! - Structural patterns for cues like `85mm lens` or `ultra detailed`
//! - Whole-line `//` comments that override everything on their line
//!
//! # Architecture
//!
//! - **Engine**: the pure classifier (`HighlightEngine`, `highlight`)
//! - **Tables**: the static keyword and pattern data
//! - **Adapters**: editor decorations, terminal rendering, a result cache and a
//!   debounce scheduler, none of which the engine depends on
//!
//! # Example
//!
//! ```
//! use prompt_highlighter::{highlight, Category};
//!
//! let spans = highlight("portrait of a dragon at golden hour");
//! assert_eq!(spans[0].text, "portrait");
//! assert!(spans.iter().any(|s| s.category == Category::Lighting));
//! ```

pub mod cache;
pub mod category;
pub mod claims;
pub mod colors;
pub mod config;
pub mod decorations;
pub mod engine;
pub mod error;
pub mod render;
pub mod scheduler;
pub mod span;
pub mod tables;

// Re-export commonly used types
pub use cache::{CacheStats, HighlightCache};
pub use category::{Category, KEYWORD_PASS_ORDER, PATTERN_PASS_ORDER};
pub use colors::{category_color, color_for_name, ColorScheme};
pub use config::{HighlighterConfig, OutputFormat};
pub use decorations::{decorate, Decoration, Position};
pub use engine::{highlight, HighlightEngine, HighlighterStats};
pub use error::{HighlightError, Result};
pub use scheduler::{Generation, HighlightScheduler, ScheduledHighlight};
pub use span::Span;
