use crate::app::ResultsView;
use crate::content::GlobalModule;
use crate::models::LessonOutput;
use crate::utils::{render_lesson_text, whiteboard_cues};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::layout::calculate_results_chunks;
use super::panel_block;

fn section_title(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )
}

pub fn lesson_lines(output: &LessonOutput) -> Vec<Line<'static>> {
    let mut lines = vec![section_title("Simplified Explanation"), Line::from("")];
    lines.extend(render_lesson_text(&output.explanation));
    lines.push(Line::from(""));
    lines.push(section_title("Practical Activity"));
    lines.push(Line::from(""));
    lines.extend(render_lesson_text(&output.activity));
    lines.push(Line::from(""));
    lines.push(section_title("Questions & Answers"));
    lines.push(Line::from(""));

    for (i, pair) in output.questions.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("Q{}. ", i + 1),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(pair.q.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("A: ", Style::default().fg(Color::Green)),
            Span::from(pair.a.clone()),
        ]));
        lines.push(Line::from(""));
    }
    lines
}

pub fn draw_results(f: &mut Frame, area: Rect, results: &ResultsView) {
    let layout = calculate_results_chunks(area);
    let output = &results.output;

    let lesson = Paragraph::new(lesson_lines(output))
        .wrap(Wrap { trim: false })
        .scroll((results.scroll, 0))
        .block(panel_block("Lesson Pack", true));
    f.render_widget(lesson, layout.lesson_area);

    let module = GlobalModule::resolve(&output.module_used);
    let module_name = if module.selector == output.module_used {
        module.label.to_string()
    } else {
        output.module_used.clone()
    };

    let mut sidebar = vec![
        section_title("Global Module"),
        Line::from(module_name),
        Line::from(""),
        Line::from(format!(
            "This lesson incorporates {} learning methodologies while keeping strong Indian educational values.",
            output.module_used
        )),
        Line::from(""),
        section_title("Whiteboard Cues"),
    ];

    let mut cues = whiteboard_cues(&output.explanation);
    cues.extend(whiteboard_cues(&output.activity));
    if cues.is_empty() {
        sidebar.push(Line::styled(
            "No drawings requested",
            Style::default().fg(Color::DarkGray),
        ));
    }
    for cue in cues {
        sidebar.push(Line::from(format!("✎ {}", cue)));
    }

    if let Some(path) = &results.exported_to {
        sidebar.push(Line::from(""));
        sidebar.push(section_title("Exported"));
        sidebar.push(Line::from(path.display().to_string()));
    }

    f.render_widget(
        Paragraph::new(sidebar)
            .wrap(Wrap { trim: true })
            .block(panel_block("Details", false)),
        layout.sidebar_area,
    );
}
