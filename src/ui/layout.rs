use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct EditorLayout {
    pub header_area: Rect,
    pub input_area: Rect,
    pub help_area: Rect,
}

pub struct ResultLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_editor_chunks(area: Rect) -> EditorLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    EditorLayout {
        header_area: chunks[0],
        input_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_result_chunks(area: Rect) -> ResultLayout {
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

    ResultLayout {
        header_area: chunks[0],
        body_area: chunks[1],
        status_area: chunks[2],
        help_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_editor_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        // Margin 1 leaves 38 rows; the input box takes the rest.
        assert_eq!(layout.input_area.height, 38 - 6);
    }

    #[test]
    fn test_result_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_result_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.body_area.height, 38 - 7);
    }
}
