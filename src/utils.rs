pub mod markdown;

pub use markdown::{render_lesson_text, whiteboard_cues};

use unicode_width::UnicodeWidthChar;

/// Shorten to at most `max_chars` characters, ending in "..." when cut.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Split `text` into visual rows of at most `width` columns, breaking on
/// newlines and at any character. Returns each row and the char index it starts at.
pub fn wrap_chars(text: &str, width: usize) -> Vec<(String, usize)> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut row_start = 0;

    for (idx, ch) in text.chars().enumerate() {
        if ch == '\n' {
            rows.push((std::mem::take(&mut current), row_start));
            current_width = 0;
            row_start = idx + 1;
            continue;
        }
        let w = ch.width().unwrap_or(0);
        if current_width + w > width && current_width > 0 {
            rows.push((std::mem::take(&mut current), row_start));
            current_width = 0;
            row_start = idx;
        }
        current.push(ch);
        current_width += w;
    }
    rows.push((current, row_start));
    rows
}

/// Row and column of a cursor sitting before char `cursor` in the wrapped text.
pub fn cursor_position(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let rows = wrap_chars(text, width);
    let row = rows
        .iter()
        .rposition(|(_, start)| *start <= cursor)
        .unwrap_or(0);
    let (content, start) = &rows[row];
    let col: usize = content
        .chars()
        .take(cursor - start)
        .map(|c| c.width().unwrap_or(0))
        .sum();
    (row, col)
}

/// Byte offset of char index `char_idx`, or the end of the string.
pub fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
