//! Integration tests for the prompt highlighter
//!
//! Exercises the engine together with its adapters through the public API.

use prompt_highlighter::{
    category_color, color_for_name, decorate, highlight, Category, HighlightCache,
    HighlightEngine, HighlightScheduler, Span, KEYWORD_PASS_ORDER, PATTERN_PASS_ORDER,
};
use std::time::{Duration, Instant};

fn summary(spans: &[Span]) -> Vec<(&str, Category)> {
    spans.iter().map(|s| (s.text.as_str(), s.category)).collect()
}

#[test]
fn test_every_category_is_reachable() {
    let text = "woman, watercolor, golden hour, close-up, 4k, vibrant, joyful, forest\n// notes";
    let spans = highlight(text);

    assert_eq!(
        summary(&spans),
        vec![
            ("woman", Category::Subject),
            ("watercolor", Category::Style),
            ("golden hour", Category::Lighting),
            ("close-up", Category::Camera),
            ("4k", Category::Quality),
            ("vibrant", Category::Color),
            ("joyful", Category::Emotion),
            ("forest", Category::Setting),
            ("// notes", Category::Comment),
        ]
    );
}

#[test]
fn test_realistic_prompt() {
    let text = "golden hour lighting, close-up shot, 4K resolution";
    let spans = highlight(text);

    assert_eq!(
        summary(&spans),
        vec![
            ("golden hour", Category::Lighting),
            ("lighting", Category::Camera),
            ("close-up", Category::Camera),
            ("4K", Category::Quality),
            ("resolution", Category::Camera),
        ]
    );
}

#[test]
fn test_comment_line_overrides_keywords() {
    let text = "portrait of a dragon\nmisty forest // swap for a desert later\nsad";
    let spans = highlight(text);

    let comment = spans
        .iter()
        .find(|s| s.category == Category::Comment)
        .expect("comment span");
    assert_eq!(comment.text, "misty forest // swap for a desert later");

    // Nothing else may start inside the commented line
    assert!(spans
        .iter()
        .filter(|s| s.category != Category::Comment)
        .all(|s| s.end <= comment.start || s.start >= comment.end));
}

#[test]
fn test_comment_only_input() {
    let spans = highlight("//");
    assert_eq!(summary(&spans), vec![("//", Category::Comment)]);
}

#[test]
fn test_crlf_comment_excludes_carriage_return() {
    let text = "a cat\r\n// keep it calm\r\nforest";
    let spans = highlight(text);

    let comment = spans
        .iter()
        .find(|s| s.category == Category::Comment)
        .expect("comment span");
    assert_eq!(comment.text, "// keep it calm");
    assert!(!comment.text.contains('\r'));
}

#[test]
fn test_no_match_input() {
    assert!(highlight("xyzxyz qqqqq").is_empty());
    assert!(highlight("   \n\t ").is_empty());
}

#[test]
fn test_word_boundaries() {
    // "man" and "cat" must not match inside longer words
    assert!(highlight("a mantle").is_empty());
    assert!(highlight("catwalk scattered").is_empty());

    let spans = highlight("a mantle for a woman");
    assert_eq!(summary(&spans), vec![("woman", Category::Subject)]);
}

#[test]
fn test_keyword_beats_overlapping_pattern() {
    // The quality pattern "ultra detailed" loses to the camera keyword "detailed"
    let spans = highlight("ultra detailed");
    assert_eq!(summary(&spans), vec![("detailed", Category::Camera)]);

    // Both words are keywords, so the "tack sharp" pattern never gets a chance
    let spans = highlight("tack sharp");
    assert_eq!(
        summary(&spans),
        vec![("tack", Category::Quality), ("sharp", Category::Camera)]
    );
}

#[test]
fn test_pattern_fills_gaps() {
    let spans = highlight("shot on a 85mm lens, ultra detailed, synthwave");
    assert!(spans
        .iter()
        .any(|s| s.text == "synthwave" && s.category == Category::Style));
}

#[test]
fn test_unicode_offsets_are_byte_offsets() {
    let text = "café 🦊 portrait";
    let spans = highlight(text);

    assert_eq!(spans.len(), 1);
    let span = &spans[0];
    assert_eq!(&text[span.range()], "portrait");
    assert_eq!(span.char_range(text), 7..15);
    assert_eq!(span.utf16_range(text), 8..16);
}

#[test]
fn test_shared_and_owned_engines_agree() {
    let owned = HighlightEngine::new().unwrap();
    let text = "cinematic portrait of an old man, rim lighting, 85mm lens, moody";
    assert_eq!(owned.highlight(text), HighlightEngine::shared().highlight(text));
}

#[test]
fn test_pass_orders() {
    assert_eq!(KEYWORD_PASS_ORDER.len(), 8);
    assert!(!KEYWORD_PASS_ORDER.contains(&Category::Comment));
    assert_eq!(
        PATTERN_PASS_ORDER,
        [
            Category::Quality,
            Category::Style,
            Category::Camera,
            Category::Lighting
        ]
    );
}

#[test]
fn test_colors() {
    assert_eq!(category_color(Category::Subject), "#3B82F6");
    assert_eq!(category_color(Category::Comment), "#6A9955");
    assert_eq!(color_for_name("setting"), "#14B8A6");
    assert_eq!(color_for_name("unknown"), "#6B7280");
}

#[test]
fn test_stats_json() {
    let stats = HighlightEngine::shared().stats();
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"totalKeywords": 871, "categoryCount": 8, "patternCount": 30})
    );
}

#[test]
fn test_explain_report() {
    let report = HighlightEngine::shared().explain("a cat in the forest");
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "Highlight report for: \"a cat in the forest\"");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "Found 2 highlights:");
    assert_eq!(lines[3], "1. \"cat\" -> SUBJECT (2-5)");
    assert_eq!(lines[4], "2. \"forest\" -> SETTING (13-19)");
}

#[test]
fn test_decorations_follow_spans() {
    let text = "a cat\n// note\nforest";
    let spans = highlight(text);
    let decorations = decorate(text, &spans);

    assert_eq!(decorations.len(), 3);
    assert_eq!(decorations[2].start.line, 3);
    assert_eq!(decorations[2].start.column, 1);
    assert_eq!(decorations[2].hover, "**SETTING**: forest");
    assert_eq!(decorations[1].class_name, "comment-highlight");
}

#[test]
fn test_cache_hit_equals_fresh_highlight() {
    let engine = HighlightEngine::shared();
    let cache = HighlightCache::new(8);
    let text = "neon city at night, cyberpunk";

    let miss = cache.get_or_highlight(engine, text);
    let hit = cache.get_or_highlight(engine, text);
    assert_eq!(*miss, *hit);
    assert_eq!(*hit, highlight(text));
}

#[test]
fn test_scheduler_never_yields_stale_generation() {
    let engine = HighlightEngine::shared();
    let t0 = Instant::now();
    let mut scheduler = HighlightScheduler::new(100);

    let mut last = None;
    for (i, snapshot) in ["f", "fo", "for", "fore", "fores", "forest"].iter().enumerate() {
        last = Some(scheduler.submit_at(*snapshot, t0 + Duration::from_millis(i as u64 * 30)));
        assert!(scheduler
            .poll_at(engine, t0 + Duration::from_millis(i as u64 * 30 + 10))
            .is_none());
    }

    let result = scheduler
        .poll_at(engine, t0 + Duration::from_millis(500))
        .unwrap();
    assert_eq!(Some(result.generation), last);
    assert!(scheduler.is_current(result.generation));
    assert_eq!(summary(&result.spans), vec![("forest", Category::Setting)]);
}
