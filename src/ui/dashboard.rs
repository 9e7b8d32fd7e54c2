use crate::app::{App, DASHBOARD_ITEMS};
use crate::config::API_KEY_VAR;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{List, ListItem, Paragraph, Wrap},
};

use super::panel_block;

pub fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let items: Vec<ListItem> = DASHBOARD_ITEMS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == app.dashboard_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if i == app.dashboard_index { "> " } else { "  " };
            ListItem::new(format!("{}{}", marker, label)).style(style)
        })
        .collect();

    let menu = List::new(items).block(panel_block("Where Technology, Culture & Creativity Unite", true));
    f.render_widget(menu, chunks[0]);

    let (status, color) = if app.config.api_key_present {
        ("AI: Ready".to_string(), Color::Green)
    } else {
        (format!("AI: Set {}", API_KEY_VAR), Color::Yellow)
    };
    let status_lines = vec![
        Line::styled(status, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Line::from(format!("Model: {}", app.config.model)),
        Line::from(format!("Timeout: {}s", app.config.timeout.as_secs())),
        Line::from(format!("Exports: {}", app.config.export_dir.display())),
    ];
    let status = Paragraph::new(status_lines)
        .wrap(Wrap { trim: true })
        .block(panel_block("AI Status", false));
    f.render_widget(status, chunks[1]);
}
