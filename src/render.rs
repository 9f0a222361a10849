//! Terminal rendering of highlighted prompts
//!
//! Builds `ratatui` lines for TUI previews and plain ANSI strings for the CLI.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span as StyledSpan, Text},
};

use crate::{colors::ColorScheme, span::Span};

/// Styled line for a single-line `text`
///
/// Gaps between spans are left unstyled.
pub fn spans_to_line(text: &str, spans: &[Span], scheme: &ColorScheme) -> Line<'static> {
    if spans.is_empty() {
        return Line::from(text.to_string());
    }

    let mut styled = Vec::new();
    let mut last_end = 0;

    for span in spans {
        // Add any gap before this span
        if span.start > last_end {
            styled.push(StyledSpan::raw(text[last_end..span.start].to_string()));
        }
        styled.push(StyledSpan::styled(
            span.text.clone(),
            scheme.style(span.category),
        ));
        last_end = span.end;
    }

    if last_end < text.len() {
        styled.push(StyledSpan::raw(text[last_end..].to_string()));
    }

    Line::from(styled)
}

/// Styled multi-line text, one `Line` per source line
///
/// A span that runs past a line break is clipped at it.
pub fn spans_to_text(text: &str, spans: &[Span], scheme: &ColorScheme) -> Text<'static> {
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut remaining = spans;

    for raw_line in text.split('\n') {
        let line_end = line_start + raw_line.len();
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

        let count = remaining
            .iter()
            .take_while(|span| span.start < line_end)
            .count();
        let (on_line, rest) = remaining.split_at(count);
        remaining = rest;

        // Rebase spans to the line, clamping anything that would run past it
        let local: Vec<Span> = on_line
            .iter()
            .filter(|span| span.end > line_start && span.start < line_start + line.len())
            .map(|span| {
                let start = span.start.saturating_sub(line_start);
                let end = (span.end - line_start).min(line.len());
                Span::new(line, start..end, span.category)
            })
            .collect();

        lines.push(spans_to_line(line, &local, scheme));
        line_start = line_end + 1;
    }

    Text::from(lines)
}

/// Text with ANSI escape styling, for terminals
pub fn to_ansi(text: &str, spans: &[Span], scheme: &ColorScheme) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 24);
    let mut last_end = 0;

    for span in spans {
        out.push_str(&text[last_end..span.start]);
        out.push_str(&ansi_prefix(scheme.style(span.category)));
        out.push_str(&span.text);
        out.push_str("\x1b[0m");
        last_end = span.end;
    }
    out.push_str(&text[last_end..]);
    out
}

fn ansi_prefix(style: Style) -> String {
    let mut codes = Vec::new();
    if style.add_modifier.contains(Modifier::BOLD) {
        codes.push("1".to_string());
    }
    if style.add_modifier.contains(Modifier::DIM) {
        codes.push("2".to_string());
    }
    if style.add_modifier.contains(Modifier::ITALIC) {
        codes.push("3".to_string());
    }
    if let Some(Color::Rgb(r, g, b)) = style.fg {
        codes.push(format!("38;2;{};{};{}", r, g, b));
    }
    format!("\x1b[{}m", codes.join(";"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{category::Category, engine::highlight};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_line_preserves_text() {
        let text = "a cat in the misty forest";
        let line = spans_to_line(text, &highlight(text), &ColorScheme::default());
        assert_eq!(line_text(&line), text);
    }

    #[test]
    fn test_line_styles_spans_only() {
        let text = "a cat";
        let scheme = ColorScheme::default();
        let line = spans_to_line(text, &highlight(text), &scheme);

        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "a ");
        assert_eq!(line.spans[0].style, Style::default());
        assert_eq!(line.spans[1].content, "cat");
        assert_eq!(line.spans[1].style, scheme.style(Category::Subject));
    }

    #[test]
    fn test_no_spans() {
        let line = spans_to_line("zzz", &[], &ColorScheme::default());
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line_text(&line), "zzz");
    }

    #[test]
    fn test_text_splits_lines() {
        let text = "a cat\r\n// keep it calm\r\n\r\nforest";
        let rendered = spans_to_text(text, &highlight(text), &ColorScheme::default());

        let lines: Vec<String> = rendered.lines.iter().map(line_text).collect();
        assert_eq!(lines, vec!["a cat", "// keep it calm", "", "forest"]);

        let comment = &rendered.lines[1].spans[0];
        assert!(comment.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_ansi_wraps_spans() {
        let text = "a cat";
        let ansi = to_ansi(text, &highlight(text), &ColorScheme::default());
        assert_eq!(ansi, "a \x1b[1;38;2;59;130;246mcat\x1b[0m");
    }

    #[test]
    fn test_ansi_without_spans_is_identity() {
        assert_eq!(to_ansi("qqq", &[], &ColorScheme::default()), "qqq");
    }
}
