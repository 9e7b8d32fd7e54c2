use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ScreenLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub banner_area: Rect,
    pub help_area: Rect,
}

pub struct ComposeLayout {
    pub source_area: Rect,
    pub editor_area: Rect,
    pub options_area: Rect,
}

pub struct ResultsLayout {
    pub lesson_area: Rect,
    pub sidebar_area: Rect,
}

pub fn calculate_screen_chunks(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        banner_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_compose_chunks(body: Rect) -> ComposeLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(body);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(columns[0]);

    ComposeLayout {
        source_area: left[0],
        editor_area: left[1],
        options_area: columns[1],
    }
}

pub fn calculate_results_chunks(body: Rect) -> ResultsLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(body);

    ResultsLayout {
        lesson_area: columns[0],
        sidebar_area: columns[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout() {
        let layout = calculate_screen_chunks(Rect::new(0, 0, 100, 40));

        // margin 1 leaves 38 rows: 3 header, 1 banner, 3 help
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.banner_area.height, 1);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.body_area.height, 38 - 7);
        assert_eq!(layout.body_area.y, 4);
    }

    #[test]
    fn test_compose_layout_splits_columns() {
        let body = Rect::new(0, 0, 100, 30);
        let layout = calculate_compose_chunks(body);

        assert_eq!(layout.source_area.height, 1);
        assert_eq!(layout.editor_area.height, 29);
        assert_eq!(layout.editor_area.width + layout.options_area.width, 100);
        assert!(layout.editor_area.width > layout.options_area.width);
    }

    #[test]
    fn test_results_layout() {
        let layout = calculate_results_chunks(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.lesson_area.width, 70);
        assert_eq!(layout.sidebar_area.width, 30);
    }
}
