//! Structural regex patterns for prompt highlighting
//!
//! These capture cues a flat keyword list cannot express: numeric lens and
//! resolution phrases, "<intensifier> detailed", "<word> lighting" and so on.
//! Every pattern carries its own flags. Structural patterns use ASCII word
//! classes (`-u`), like the keyword matchers, so they stay on the DFA fast path
//! regardless of what the surrounding text contains. Patterns are compiled once
//! by the engine; this module only holds the source strings.

use crate::category::Category;

/// Per-category structural patterns
pub struct PromptPatterns;

impl PromptPatterns {
    /// Pattern sources for a category (empty for keyword-only categories)
    pub fn for_category(category: Category) -> &'static [&'static str] {
        match category {
            Category::Quality => QUALITY,
            Category::Style => STYLE,
            Category::Camera => CAMERA,
            Category::Lighting => LIGHTING,
            Category::Comment => COMMENT,
            Category::Subject | Category::Color | Category::Emotion | Category::Setting => &[],
        }
    }

    /// Total number of patterns across all categories, comment included
    pub fn count() -> usize {
        Category::ALL
            .iter()
            .map(|&category| Self::for_category(category).len())
            .sum()
    }
}

const QUALITY: &[&str] = &[
    r"(?i-u)\b(ultra|super|hyper|extremely?|very|highly?)\s+(detailed|realistic|sharp|crisp|clear)\b",
    r"(?i-u)\b\d+k\s+(resolution|quality|detail)\b",
    r"(?i-u)\b(award\s+winning|trending\s+on|featured\s+on)\b",
    r"(?i-u)\b(professional\s+photography|expert\s+technique|high-end\s+equipment)\b",
    r"(?i-u)\b(crystal\s+clear|pristine\s+image\s+quality|stunning\s+clarity)\b",
    r"(?i-u)\b(beautiful\s+bokeh|shallow\s+depth\s+of\s+field|professional\s+lens)\b",
    r"(?i-u)\b(tack\s+sharp|perfect\s+detail|high\s+resolution)\b",
];

const STYLE: &[&str] = &[
    r"(?i-u)\b\w+\s+(style|art|painting|drawing|render)\b",
    r"(?i-u)\bin\s+the\s+style\s+of\b",
    r"(?i-u)\b\w+(punk|core|wave)\b",
    r"(?i-u)\b(portrait\s+photography|fashion\s+photography|professional\s+photography)\b",
    r"(?i-u)\b(high-end\s+style|magazine-worthy|gallery-worthy)\b",
    r"(?i-u)\b(cinematic\s+style|movie-quality|film\s+grain)\b",
    r"(?i-u)\b(vintage\s+style|retro\s+aesthetic|classic\s+photography)\b",
    r"(?i-u)\b(minimalist\s+style|elegant\s+style|artistic\s+style)\b",
];

const CAMERA: &[&str] = &[
    r"(?i-u)\b\d+mm\s+(lens|shot|focal)\b",
    r"(?i-u)\b(depth\s+of\s+field|dof)\b",
    r"(?i-u)\b\w+\s+(shot|angle|view|perspective)\b",
    r"(?i-u)\b(extreme\s+wide\s+shot|wide\s+shot|close\s+up|medium\s+shot)\b",
    r"(?i-u)\b(dutch\s+angle|tilted\s+composition|dynamic\s+framing)\b",
    r"(?i-u)\b(intimate\s+framing|creative\s+angle|artistic\s+perspective)\b",
    r"(?i-u)\b(professional\s+headshot|studio\s+lighting|sharp\s+focus)\b",
    r"(?i-u)\b(beautiful\s+composition|detailed\s+facial\s+features)\b",
];

const LIGHTING: &[&str] = &[
    r"(?i-u)\b\w+\s+(light|lighting|lit|illuminated)\b",
    r"(?i-u)\b(hour|time)\s+(light|lighting)\b",
    r"(?i-u)\b(golden\s+hour\s+lighting|blue\s+hour\s+lighting|natural\s+lighting)\b",
    r"(?i-u)\b(studio\s+lighting|cinematic\s+lighting|dramatic\s+lighting)\b",
    r"(?i-u)\b(soft\s+lighting|volumetric\s+lighting|ambient\s+lighting)\b",
    r"(?i-u)\b(professional\s+lighting|controlled\s+illumination|perfect\s+exposure)\b",
];

// Whole line containing `//`, captured in group 1. Lines end at `\n`, `\r`,
// U+2028 and U+2029; the separator before a line may sit in group 0.
const COMMENT: &[&str] = &[
    r"(?mR)(?:^|[\x{2028}\x{2029}])([^\r\n\x{2028}\x{2029}]*//[^\r\n\x{2028}\x{2029}]*)",
];
