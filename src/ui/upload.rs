use crate::app::App;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::panel_block;

const SOURCES: [(&str, &str, &str); 3] = [
    ("Text Content", "Plain text or markdown files", "read as written"),
    ("PDF/Image", "PDF, PNG, JPG files", "text is extracted from the document"),
    ("Voice Notes", "MP3, WAV, M4A files", "the recording is transcribed"),
];

pub fn draw_upload(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let block = panel_block("File path", true);
    let inner = block.inner(chunks[0]);
    let width = inner.width.max(1) as usize;

    // Keep the end of a long path in view.
    let shown: String = if app.upload_path.width() >= width {
        let skip = app
            .upload_path
            .chars()
            .count()
            .saturating_sub(width.saturating_sub(1));
        app.upload_path.chars().skip(skip).collect()
    } else {
        app.upload_path.clone()
    };
    f.render_widget(Paragraph::new(shown.clone()).block(block), chunks[0]);
    let x = inner.x + shown.width().min(width.saturating_sub(1)) as u16;
    f.set_cursor_position((x, inner.y));

    let mut lines = vec![
        Line::styled(
            "Teacher's Content Upload",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    for (label, formats, handling) in SOURCES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14}", label),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(truncate_string(
                &format!("{}: {}", formats, handling),
                chunks[1].width.saturating_sub(18) as usize,
            )),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "The loaded text opens in the editor, where you can review it before generating.",
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel_block("Upload Your Own Material", false)),
        chunks[1],
    );
}
