//! Instant highlighting engine
//!
//! Compiles the keyword and pattern tables once, then classifies prompt text
//! in three greedy passes:
//!
//! 1. Comment lines (claimed unconditionally)
//! 2. Keyword alternations, in [`KEYWORD_PASS_ORDER`]
//! 3. Structural patterns, in [`PATTERN_PASS_ORDER`]
//!
//! A match is dropped if it overlaps anything claimed earlier in the same call,
//! so pass order is the priority order. The engine keeps no state between
//! calls and does no I/O.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::{debug, trace};

use crate::{
    category::{Category, KEYWORD_PASS_ORDER, PATTERN_PASS_ORDER},
    claims::ClaimedRanges,
    error::{HighlightError, Result},
    span::Span,
    tables::{PromptKeywords, PromptPatterns},
};

/// Characters of input echoed in the header of a [`HighlightEngine::explain`] report
pub const EXPLAIN_PREVIEW_CHARS: usize = 100;

/// Punctuation stripped from tokens before the dictionary check in reports
const EXPLAIN_STRIP_CHARS: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\'', '(', ')'];

/// Aggregate sizes of the static tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlighterStats {
    /// Keyword entries across all categories, duplicates included
    pub total_keywords: usize,

    /// Number of keyword categories
    pub category_count: usize,

    /// Structural patterns across all categories, comment included
    pub pattern_count: usize,
}

/// Compiled keyword and pattern matchers
///
/// Immutable after construction and safe to share across threads.
#[derive(Debug)]
pub struct HighlightEngine {
    comment_matchers: Vec<Regex>,
    keyword_matchers: Vec<(Category, Regex)>,
    pattern_matchers: Vec<(Category, Vec<Regex>)>,
}

static SHARED: Lazy<HighlightEngine> =
    Lazy::new(|| HighlightEngine::new().expect("Valid built-in highlight tables"));

impl HighlightEngine {
    /// Compile all tables
    pub fn new() -> Result<Self> {
        let comment_matchers = compile_patterns(Category::Comment)?;

        let keyword_matchers = KEYWORD_PASS_ORDER
            .iter()
            .map(|&category| Ok((category, compile_keywords(category)?)))
            .collect::<Result<Vec<_>>>()?;

        let pattern_matchers = PATTERN_PASS_ORDER
            .iter()
            .map(|&category| Ok((category, compile_patterns(category)?)))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Compiled {} keyword matchers and {} structural patterns",
            keyword_matchers.len(),
            comment_matchers.len()
                + pattern_matchers
                    .iter()
                    .map(|(_, patterns)| patterns.len())
                    .sum::<usize>()
        );

        Ok(Self {
            comment_matchers,
            keyword_matchers,
            pattern_matchers,
        })
    }

    /// Process-wide engine built on first use
    pub fn shared() -> &'static HighlightEngine {
        &SHARED
    }

    /// Classify `text` into sorted, non-overlapping category spans
    pub fn highlight(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut claims = ClaimedRanges::new();

        // Comments override everything
        for matcher in &self.comment_matchers {
            for caps in matcher.captures_iter(text) {
                // Group 1 is the line itself when the pattern also consumes a separator
                let Some(mat) = caps.get(1).or_else(|| caps.get(0)) else {
                    continue;
                };
                claims.claim(mat.range());
                spans.push(Span::new(text, mat.range(), Category::Comment));
            }
        }

        for (category, matcher) in &self.keyword_matchers {
            collect_unclaimed(text, matcher, *category, &mut claims, &mut spans);
        }

        for (category, matchers) in &self.pattern_matchers {
            for matcher in matchers {
                collect_unclaimed(text, matcher, *category, &mut claims, &mut spans);
            }
        }

        spans.sort_by_key(|span| span.start);
        trace!("Highlighted {} bytes into {} spans", text.len(), spans.len());
        spans
    }

    /// Sizes of the static tables
    pub fn stats(&self) -> HighlighterStats {
        HighlighterStats {
            total_keywords: KEYWORD_PASS_ORDER
                .iter()
                .map(|&category| PromptKeywords::for_category(category).len())
                .sum(),
            category_count: KEYWORD_PASS_ORDER.len(),
            pattern_count: PromptPatterns::count(),
        }
    }

    /// Human-readable diagnostic report for `text`
    ///
    /// Lists every span. When nothing matched, also reports per whitespace
    /// token whether it is an exact keyword entry.
    pub fn explain(&self, text: &str) -> String {
        self.explain_with_preview(text, EXPLAIN_PREVIEW_CHARS)
    }

    /// [`explain`](Self::explain) with a custom header preview length
    pub fn explain_with_preview(&self, text: &str, preview_chars: usize) -> String {
        let spans = self.highlight(text);
        let preview: String = text.chars().take(preview_chars).collect();
        let ellipsis = if text.chars().nth(preview_chars).is_some() {
            "..."
        } else {
            ""
        };

        let mut report = String::new();
        let _ = writeln!(report, "Highlight report for: \"{}{}\"", preview, ellipsis);
        let _ = writeln!(report);
        let _ = writeln!(report, "Found {} highlights:", spans.len());

        for (i, span) in spans.iter().enumerate() {
            let _ = writeln!(
                report,
                "{}. \"{}\" -> {} ({}-{})",
                i + 1,
                span.text,
                span.category.as_str().to_uppercase(),
                span.start,
                span.end
            );
        }

        if spans.is_empty() {
            let _ = writeln!(report, "No matches found. Checking individual words:");
            for token in text.split_whitespace() {
                let word: String = token
                    .to_lowercase()
                    .chars()
                    .filter(|c| !EXPLAIN_STRIP_CHARS.contains(c))
                    .collect();

                match PromptKeywords::lookup(&word) {
                    Some(category) => {
                        let _ = writeln!(report, "  + \"{}\" should match {}", word, category);
                    }
                    None => {
                        let _ = writeln!(report, "  - \"{}\" no match", word);
                    }
                }
            }
        }

        report
    }
}

/// Record every match of `matcher` that does not overlap an earlier claim
fn collect_unclaimed(
    text: &str,
    matcher: &Regex,
    category: Category,
    claims: &mut ClaimedRanges,
    spans: &mut Vec<Span>,
) {
    for mat in matcher.find_iter(text) {
        if mat.is_empty() {
            continue;
        }
        if claims.try_claim(mat.range()) {
            spans.push(Span::new(text, mat.range(), category));
        }
    }
}

/// Build the word-bounded alternation source for a keyword list
pub(crate) fn keyword_alternation(keywords: &[&str]) -> String {
    let escaped: Vec<String> = keywords.iter().map(|keyword| regex::escape(keyword)).collect();
    format!(r"(?i-u)\b(?:{})\b", escaped.join("|"))
}

fn compile_keywords(category: Category) -> Result<Regex> {
    let pattern = keyword_alternation(PromptKeywords::for_category(category));
    Regex::new(&pattern).map_err(|source| HighlightError::InvalidPattern {
        category,
        pattern,
        source,
    })
}

fn compile_patterns(category: Category) -> Result<Vec<Regex>> {
    PromptPatterns::for_category(category)
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| HighlightError::InvalidPattern {
                category,
                pattern: pattern.to_string(),
                source,
            })
        })
        .collect()
}

/// Highlight with the shared engine
pub fn highlight(text: &str) -> Vec<Span> {
    HighlightEngine::shared().highlight(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories_of(spans: &[Span]) -> Vec<(&str, Category)> {
        spans.iter().map(|s| (s.text.as_str(), s.category)).collect()
    }

    #[test]
    fn test_engine_creation() {
        let engine = HighlightEngine::new().unwrap();
        assert_eq!(engine.keyword_matchers.len(), 8);
        assert_eq!(engine.pattern_matchers.len(), 4);
        assert_eq!(engine.comment_matchers.len(), 1);
    }

    #[test]
    fn test_keyword_alternation_escapes() {
        let pattern = keyword_alternation(&["3D", "bird's eye view", "a.b"]);
        assert_eq!(pattern, r"(?i-u)\b(?:3D|bird's eye view|a\.b)\b");
    }

    #[test]
    fn test_empty_input() {
        assert!(highlight("").is_empty());
    }

    #[test]
    fn test_whole_line_comment() {
        let text = "a cat // this mentions cat again";
        let spans = highlight(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::Comment);
        assert_eq!(spans[0].range(), 0..text.len());
    }

    #[test]
    fn test_comment_only_claims_its_line() {
        let text = "a cat\n// note about the cat\nforest";
        let spans = highlight(text);
        assert_eq!(
            categories_of(&spans),
            vec![
                ("cat", Category::Subject),
                ("// note about the cat", Category::Comment),
                ("forest", Category::Setting),
            ]
        );
    }

    #[test]
    fn test_unicode_line_separator_ends_comment_line() {
        let text = "cat\u{2028}dog // x";
        let spans = highlight(text);
        assert_eq!(
            categories_of(&spans),
            vec![("cat", Category::Subject), ("dog // x", Category::Comment)]
        );
        assert_eq!(spans[1].start, "cat\u{2028}".len());
    }

    #[test]
    fn test_keyword_order_is_priority() {
        // "dark" is listed under subject, lighting and color
        let spans = highlight("dark");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::Subject);
    }

    #[test]
    fn test_multi_word_keyword() {
        let spans = highlight("shot at golden hour");
        let golden = spans.iter().find(|s| s.text == "golden hour").unwrap();
        assert_eq!(golden.category, Category::Lighting);
    }

    #[test]
    fn test_case_insensitive() {
        let spans = highlight("CINEMATIC Dragon");
        assert_eq!(
            categories_of(&spans),
            vec![("CINEMATIC", Category::Style), ("Dragon", Category::Subject)]
        );
    }

    #[test]
    fn test_pattern_only_match() {
        let spans = highlight("synthwave");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::Style);
        assert_eq!(spans[0].text, "synthwave");
    }

    #[test]
    fn test_stats() {
        let stats = HighlightEngine::shared().stats();
        assert_eq!(stats.category_count, 8);
        assert_eq!(stats.pattern_count, 30);
        assert_eq!(stats.total_keywords, 871);
    }

    #[test]
    fn test_stats_json_shape() {
        let stats = HighlightEngine::shared().stats();
        let json = serde_json::to_value(stats).unwrap();
        assert!(json.get("totalKeywords").is_some());
        assert!(json.get("categoryCount").is_some());
        assert!(json.get("patternCount").is_some());
    }

    #[test]
    fn test_explain_lists_spans() {
        let report = HighlightEngine::shared().explain("a cat in the forest");
        assert!(report.contains("Found 2 highlights:"));
        assert!(report.contains("1. \"cat\" -> SUBJECT (2-5)"));
        assert!(report.contains("2. \"forest\" -> SETTING (13-19)"));
        assert!(!report.contains("No matches found"));
    }

    #[test]
    fn test_explain_checks_words_when_empty() {
        let report = HighlightEngine::shared().explain("xyzxyz, (qqqqq)!");
        assert!(report.contains("Found 0 highlights:"));
        assert!(report.contains("No matches found"));
        assert!(report.contains("  - \"xyzxyz\" no match"));
        assert!(report.contains("  - \"qqqqq\" no match"));
    }

    #[test]
    fn test_explain_reports_keyword_hidden_by_punctuation() {
        // Parentheses break the word boundary, but stripping them leaves "cat"
        let report = HighlightEngine::shared().explain("c(a)t forest? zzz");
        assert!(report.contains("Found 1 highlights:"));
        assert!(!report.contains("No matches found"));

        let report = HighlightEngine::shared().explain("c(a)t");
        assert!(report.contains("Found 0 highlights:"));
        assert!(report.contains("  + \"cat\" should match subject"));
    }

    #[test]
    fn test_explain_truncates_preview_on_char_boundary() {
        let text = "é".repeat(150);
        let report = HighlightEngine::shared().explain(&text);
        let header = report.lines().next().unwrap();
        assert_eq!(header, format!("Highlight report for: \"{}...\"", "é".repeat(100)));
    }
}
