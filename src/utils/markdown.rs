//! Terminal rendering for the model's lesson text.
//!
//! Handles `#` headings, `-`/`*`/numbered lists, `**bold**`, and the
//! `[AI DRAWS: ...]` whiteboard cues the prompt asks for.

use lazy_static::lazy_static;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

lazy_static! {
    static ref NUMBERED_RE: Regex = Regex::new(r"^(\d+)[.)]\s+(.*)$").expect("numbered list pattern");
    static ref INLINE_RE: Regex =
        Regex::new(r"\*\*(.+?)\*\*|\[AI DRAWS:\s*([^\]]*)\]").expect("inline pattern");
}

pub fn whiteboard_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::ITALIC)
}

/// Descriptions of every `[AI DRAWS: ...]` cue, in order of appearance.
pub fn whiteboard_cues(content: &str) -> Vec<String> {
    INLINE_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(2))
        .map(|m| m.as_str().trim().to_string())
        .filter(|cue| !cue.is_empty())
        .collect()
}

pub fn render_lesson_text(content: &str) -> Vec<Line<'static>> {
    content.lines().map(render_line).collect()
}

fn render_line(line: &str) -> Line<'static> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Line::from("");
    }

    let heading = trimmed.trim_start_matches('#');
    if heading.len() < trimmed.len() && heading.starts_with(' ') {
        return Line::from(Span::styled(
            heading.trim().to_string(),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ));
    }

    if let Some(item) = trimmed.strip_prefix("- ").or(trimmed.strip_prefix("* ")) {
        let mut spans = vec![Span::from("  • ")];
        spans.extend(parse_inline(item));
        return Line::from(spans);
    }

    if let Some(caps) = NUMBERED_RE.captures(trimmed) {
        let mut spans = vec![Span::from(format!("  {}. ", &caps[1]))];
        spans.extend(parse_inline(&caps[2]));
        return Line::from(spans);
    }

    Line::from(parse_inline(line))
}

fn parse_inline(text: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::from(text[last..whole.start()].to_string()));
        }
        if let Some(bold) = caps.get(1) {
            spans.push(Span::styled(
                bold.as_str().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        } else if let Some(cue) = caps.get(2) {
            spans.push(Span::styled(
                format!("[draws: {}]", cue.as_str().trim()),
                whiteboard_style(),
            ));
        }
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Span::from(text[last..].to_string()));
    }
    if spans.is_empty() {
        spans.push(Span::from(text.to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_plain_text_passes_through() {
        let lines = render_lesson_text("Plants need water.\n\nThey also need sunlight.");
        assert_eq!(
            plain(&lines),
            vec!["Plants need water.", "", "They also need sunlight."]
        );
    }

    #[test]
    fn test_lists_and_headings() {
        let lines = render_lesson_text("## Warm up\n- Clap twice\n2) Count to ten");
        assert_eq!(
            plain(&lines),
            vec!["Warm up", "  • Clap twice", "  2. Count to ten"]
        );
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_hashtag_without_space_is_not_heading() {
        let lines = render_lesson_text("#1 rule: be kind");
        assert_eq!(plain(&lines), vec!["#1 rule: be kind"]);
    }

    #[test]
    fn test_whiteboard_cue_is_highlighted() {
        let lines = render_lesson_text("A shadow forms [AI DRAWS: a torch and a ball] behind objects.");
        assert_eq!(
            plain(&lines),
            vec!["A shadow forms [draws: a torch and a ball] behind objects."]
        );
        let cue = &lines[0].spans[1];
        assert_eq!(cue.style, whiteboard_style());
    }

    #[test]
    fn test_bold_spans() {
        let lines = render_lesson_text("Solids keep their **shape**.");
        assert_eq!(lines[0].spans.len(), 3);
        assert_eq!(lines[0].spans[1].content, "shape");
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_collect_whiteboard_cues() {
        let text = "[AI DRAWS: a sun] Light travels. [AI DRAWS:  a mirror ] [AI DRAWS: ]";
        assert_eq!(whiteboard_cues(text), vec!["a sun", "a mirror"]);
        assert!(whiteboard_cues("No drawings here.").is_empty());
    }
}
