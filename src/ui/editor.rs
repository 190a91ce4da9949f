use ratatui::{
    layout::{Alignment, Position},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{Mode, Workspace};
use crate::ui::layout::calculate_editor_chunks;
use crate::utils::calculate_wrapped_cursor_position;

pub fn draw_editor(f: &mut Frame, ws: &Workspace) {
    let layout = calculate_editor_chunks(f.area());

    let header_text = if ws.mode == Mode::GenerateQuiz {
        format!("{} - {} questions", ws.mode.label(), ws.question_count)
    } else {
        ws.mode.label().to_string()
    };
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let input_text = Text::from(if ws.input_buffer.is_empty() {
        "[Type here...]"
    } else {
        ws.input_buffer.as_str()
    });
    let input = Paragraph::new(input_text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(ws.mode.editor_title()),
        );
    f.render_widget(input, layout.input_area);

    // Place the terminal cursor where the next character will land.
    let inner_width = layout.input_area.width.saturating_sub(2) as usize;
    if inner_width > 0 {
        let (line, col) =
            calculate_wrapped_cursor_position(&ws.input_buffer, ws.cursor_position, inner_width);
        f.set_cursor_position(Position::new(
            layout.input_area.x + 1 + col as u16,
            layout.input_area.y + 1 + line as u16,
        ));
    }

    let mut help_line = vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Generate  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Menu"),
    ];
    if ws.mode == Mode::GenerateQuiz {
        help_line.push(Span::from("  "));
        help_line.push(Span::styled(
            "Up/Down",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        help_line.push(Span::from(" Questions"));
    }

    // The help box has a single inner row; an error takes its place until
    // the next keypress clears it.
    let help_text = if let Some(error) = &ws.last_error {
        vec![Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ))]
    } else {
        vec![Line::from(help_line)]
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
