//! Example usage of the prompt highlighter
//!
//! Walks through the library API the way an editor integration would use it:
//! one-shot highlighting, decorations, a debounced typing session, the result
//! cache and a terminal preview.

use prompt_highlighter::{
    decorate, render, ColorScheme, HighlightCache, HighlightEngine, HighlightScheduler,
    HighlighterConfig,
};
use std::time::Instant;

fn main() {
    println!("=== Prompt Highlighter Examples ===\n");

    // Defaults plus any PROMPT_HIGHLIGHTER_* overrides
    let config = match HighlighterConfig::load(None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring invalid configuration: {}", e);
            HighlighterConfig::default()
        }
    };

    example_basic_highlighting();
    example_decorations();
    example_typing_session(&config);
    example_cache(&config);
    example_terminal_preview();
}

/// Example 1: Basic highlighting
fn example_basic_highlighting() {
    println!("Example 1: Basic Highlighting");
    println!("─────────────────────────────");

    let engine = HighlightEngine::shared();
    let prompts = [
        "portrait of a dragon at golden hour",
        "cyberpunk city at night, neon reflections, 35mm lens",
        "watercolor landscape, soft pastel palette, serene",
        "ultra detailed, 8k resolution, tack sharp",
    ];

    for prompt in prompts {
        println!("Input:  {}", prompt);
        for span in engine.highlight(prompt) {
            println!("  {:>3}..{:<3} {:<9} {}", span.start, span.end, span.category, span.text);
        }
        println!();
    }
}

/// Example 2: Editor decorations
fn example_decorations() {
    println!("Example 2: Editor Decorations");
    println!("─────────────────────────────");

    let text = "a knight in a misty forest\n// consider a castle instead\nepic, cinematic";
    let decorations = decorate(text, &HighlightEngine::shared().highlight(text));

    for decoration in &decorations {
        println!(
            "  {}:{}-{}:{}  {:<20} {}",
            decoration.start.line,
            decoration.start.column,
            decoration.end.line,
            decoration.end.column,
            decoration.class_name,
            decoration.hover
        );
    }
    println!();
}

/// Example 3: Debounced highlighting while typing
fn example_typing_session(config: &HighlighterConfig) {
    println!("Example 3: Typing Session");
    println!("─────────────────────────");

    let engine = HighlightEngine::shared();
    let mut scheduler = HighlightScheduler::from_config(config);
    let start = Instant::now();
    let typed = "a fox in the snow";

    // Keystrokes arrive faster than the debounce delay, polling between them
    let keystroke = scheduler.delay() / 2;
    let mut now = start;
    for end in 1..=typed.len() {
        now += keystroke;
        scheduler.submit_at(&typed[..end], now);
        if let Some(result) = scheduler.poll_at(engine, now + keystroke / 2) {
            println!("  early result for generation {}", result.generation.value());
        }
    }

    let idle = now + scheduler.delay();
    if let Some(result) = scheduler.poll_at(engine, idle) {
        println!(
            "  generation {} (current: {}) produced {} spans",
            result.generation.value(),
            scheduler.is_current(result.generation),
            result.spans.len()
        );
    }
    println!();
}

/// Example 4: Cache management
fn example_cache(config: &HighlighterConfig) {
    println!("Example 4: Cache Management");
    println!("───────────────────────────");

    let engine = HighlightEngine::shared();
    let cache = HighlightCache::from_config(config);

    for tab in ["a cat", "a dog", "a cat", "a fox"] {
        let spans = cache.get_or_highlight(engine, tab);
        println!("  {:<6} -> {} spans", tab, spans.len());
    }

    let stats = cache.stats();
    println!(
        "  cache: {}/{} entries ({:.0}% full)",
        stats.size,
        stats.capacity,
        stats.utilization() * 100.0
    );
    println!();
}

/// Example 5: Terminal preview
fn example_terminal_preview() {
    println!("Example 5: Terminal Preview");
    println!("───────────────────────────");

    let text = "moody portrait, rim lighting, 85mm lens, muted teal palette";
    let spans = HighlightEngine::shared().highlight(text);
    println!("  {}", render::to_ansi(text, &spans, &ColorScheme::default()));

    let preview = render::spans_to_text(text, &spans, &ColorScheme::default());
    println!("  {} line(s), {} styled segments", preview.lines.len(), preview.lines[0].spans.len());
}
