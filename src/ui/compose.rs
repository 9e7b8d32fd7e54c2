use crate::app::{App, ComposeField};
use crate::content::{CHARACTERS, GlobalModule, NONE_SELECTOR};
use crate::utils::{cursor_position, truncate_string, wrap_chars};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use super::layout::calculate_compose_chunks;
use super::panel_block;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

fn option_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{:<10}", label), label_style),
        Span::styled(format!("< {} >", value), value_style),
    ])
}

pub fn draw_compose(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.compose;
    let layout = calculate_compose_chunks(area);

    let source = form
        .source_label
        .clone()
        .unwrap_or_else(|| "Your own material".to_string());
    f.render_widget(
        Paragraph::new(truncate_string(&source, layout.source_area.width as usize))
            .style(Style::default().fg(Color::DarkGray)),
        layout.source_area,
    );

    let editing = form.focus == ComposeField::Material;
    let block = panel_block("Lesson Material", editing);
    let inner = block.inner(layout.editor_area);
    let width = inner.width.max(1) as usize;

    let rows = wrap_chars(&form.text, width);
    let (cursor_row, cursor_col) = cursor_position(&form.text, form.cursor, width);
    let visible = inner.height.max(1) as usize;
    let scroll = cursor_row.saturating_sub(visible - 1);

    let editor = if form.text.is_empty() {
        Paragraph::new("[Type or paste the lesson content here...]")
            .style(Style::default().fg(Color::DarkGray))
    } else {
        let lines: Vec<Line> = rows.into_iter().map(|(row, _)| Line::from(row)).collect();
        Paragraph::new(Text::from(lines)).scroll((scroll as u16, 0))
    };
    f.render_widget(editor.block(block), layout.editor_area);

    if editing {
        let x = inner.x + (cursor_col as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + (cursor_row - scroll) as u16;
        f.set_cursor_position((x, y));
    }

    let selector = form.module_selector();
    let module_label = if selector == NONE_SELECTOR {
        "No global module".to_string()
    } else {
        GlobalModule::resolve(selector).label.to_string()
    };
    let character = &CHARACTERS[form.character_index % CHARACTERS.len()];

    let mut options = vec![
        option_line(
            "Class",
            format!("{} (Ages {})", form.grade, form.grade.age_group()),
            form.focus == ComposeField::Grade,
        ),
        Line::from(""),
        option_line("Module", module_label, form.focus == ComposeField::Module),
    ];
    if selector != NONE_SELECTOR {
        options.push(Line::styled(
            GlobalModule::resolve(selector).description,
            Style::default().fg(Color::DarkGray),
        ));
    }
    options.push(Line::from(""));
    options.push(option_line(
        "Character",
        character.label.to_string(),
        form.focus == ComposeField::Character,
    ));
    options.push(Line::styled(
        format!("Teaching style: {}", character.teaching_style),
        Style::default().fg(Color::DarkGray),
    ));
    options.push(Line::from(""));
    options.push(option_line(
        "Source",
        form.origin.label().to_string(),
        form.focus == ComposeField::Origin,
    ));

    f.render_widget(
        Paragraph::new(options)
            .wrap(Wrap { trim: true })
            .block(panel_block("Options", !editing)),
        layout.options_area,
    );
}

pub fn draw_generating(f: &mut Frame, area: Rect, app: &App) {
    let elapsed = app
        .generation_started
        .map(|t| t.elapsed())
        .unwrap_or_default();
    let frame = SPINNER[(elapsed.as_millis() / 250) as usize % SPINNER.len()];

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("{} Creating your AI lesson pack...", frame),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!(
            "Class {} | module {} | {}s / {}s",
            app.compose.grade,
            app.compose.module_selector(),
            elapsed.as_secs(),
            app.config.timeout.as_secs()
        )),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(panel_block("Please wait", true)),
        area,
    );
}
