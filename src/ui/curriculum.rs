use crate::app::{BrowseLevel, CurriculumBrowser};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use super::panel_block;

fn list_items<'a>(labels: impl Iterator<Item = String>, selected: Option<usize>) -> Vec<ListItem<'a>> {
    labels
        .enumerate()
        .map(|(i, label)| {
            let style = if Some(i) == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(label).style(style)
        })
        .collect()
}

/// Three columns (class, subject, topic) plus a preview of the highlighted topic.
pub fn draw_curriculum(f: &mut Frame, area: Rect, browser: &CurriculumBrowser) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(5)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(rows[0]);

    let level = browser.level;

    let grades = list_items(
        browser
            .grades
            .iter()
            .map(|g| format!("Class {} (Ages {})", g, g.age_group())),
        Some(browser.grade_index),
    );
    f.render_widget(
        List::new(grades).block(panel_block("Class", level == BrowseLevel::Grade)),
        columns[0],
    );

    let subjects = list_items(
        browser.subjects().iter().map(|s| s.name.to_string()),
        (level != BrowseLevel::Grade).then_some(browser.subject_index),
    );
    f.render_widget(
        List::new(subjects).block(panel_block("Subject", level == BrowseLevel::Subject)),
        columns[1],
    );

    let topics = list_items(
        browser.topics().iter().map(|t| t.name.to_string()),
        (level == BrowseLevel::Topic).then_some(browser.topic_index),
    );
    f.render_widget(
        List::new(topics).block(panel_block("Topic", level == BrowseLevel::Topic)),
        columns[2],
    );

    let preview = match (level, browser.topic()) {
        (BrowseLevel::Topic, Some(topic)) => topic.text.to_string(),
        _ => "Pick a class, a subject and a topic.".to_string(),
    };
    f.render_widget(
        Paragraph::new(preview)
            .wrap(Wrap { trim: true })
            .block(panel_block("Preview", false)),
        rows[1],
    );
}
