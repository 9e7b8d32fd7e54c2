pub mod layout;
mod compose;
mod curriculum;
mod dashboard;
mod results;
mod upload;

pub use compose::{draw_compose, draw_generating};
pub use curriculum::draw_curriculum;
pub use dashboard::draw_dashboard;
pub use layout::{calculate_compose_chunks, calculate_results_chunks, calculate_screen_chunks};
pub use results::{draw_results, lesson_lines};
pub use upload::draw_upload;

use crate::app::{App, Banner};
use crate::models::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn draw(f: &mut Frame, app: &App) {
    let layout = calculate_screen_chunks(f.area());

    let title = match app.state {
        AppState::Dashboard => "ASman Learning - AI Whiteboard Assistant for NCERT Lessons".to_string(),
        AppState::Curriculum => "Select NCERT Content".to_string(),
        AppState::Upload => "Upload Your Own Material".to_string(),
        AppState::Compose => "Customize Your AI Lesson".to_string(),
        AppState::Generating => "Generating Lesson Pack".to_string(),
        AppState::Results => match &app.results {
            Some(r) => format!("AI Lesson Pack - Class {}", r.input.grade),
            None => "AI Lesson Pack".to_string(),
        },
    };
    draw_header(f, layout.header_area, &title);

    let help: &[(&str, &str)] = match app.state {
        AppState::Dashboard => &[("↑/↓", "Navigate"), ("Enter", "Select"), ("q", "Quit")],
        AppState::Curriculum => &[
            ("↑/↓", "Navigate"),
            ("Enter/→", "Open"),
            ("←/Esc", "Back"),
        ],
        AppState::Upload => &[("Enter", "Load file"), ("Esc", "Dashboard")],
        AppState::Compose => &[
            ("Tab", "Next field"),
            ("←/→", "Change option"),
            ("Ctrl+G", "Generate"),
            ("Esc", "Dashboard"),
        ],
        AppState::Generating => &[("Esc", "Cancel")],
        AppState::Results => &[
            ("↑/↓", "Scroll"),
            ("e", "Export"),
            ("r", "Regenerate"),
            ("b", "Back"),
            ("m", "Menu"),
            ("q", "Quit"),
        ],
    };
    draw_help(f, layout.help_area, help);

    if let Some(banner) = &app.banner {
        draw_banner(f, layout.banner_area, banner);
    }

    match app.state {
        AppState::Dashboard => draw_dashboard(f, layout.body_area, app),
        AppState::Curriculum => draw_curriculum(f, layout.body_area, &app.browser),
        AppState::Upload => draw_upload(f, layout.body_area, app),
        AppState::Compose => draw_compose(f, layout.body_area, app),
        AppState::Generating => draw_generating(f, layout.body_area, app),
        AppState::Results => {
            if let Some(results) = &app.results {
                draw_results(f, layout.body_area, results);
            }
        }
    }
}

fn draw_header(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_banner(f: &mut Frame, area: Rect, banner: &Banner) {
    let (text, color) = match banner {
        Banner::Info(text) => (text.as_str(), Color::Green),
        Banner::Error(text) => (text.as_str(), Color::Red),
    };
    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn draw_help(f: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(key.to_string(), key_style),
                Span::from(format!(" {}  ", label)),
            ]
        })
        .collect();
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

pub(crate) fn panel_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
}
