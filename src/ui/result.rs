use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{Mode, Workspace};
use crate::ui::layout::calculate_result_chunks;
use crate::utils::truncate_string;

fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_result(f: &mut Frame, ws: &Workspace) {
    let layout = calculate_result_chunks(f.area());

    let header_text = if ws.mode == Mode::GenerateQuiz && !ws.topic().is_empty() {
        format!("{} - {}", ws.mode.result_title(), truncate_string(ws.topic(), 48))
    } else {
        ws.mode.result_title().to_string()
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

    let output = ws.output.as_deref().unwrap_or("");
    let body_text = match ws.mode {
        // The quiz is shown verbatim so the user sees exactly what the
        // exports will contain; analysis and content render as markdown.
        Mode::GenerateQuiz => Text::from(output),
        Mode::Analyze | Mode::CreateContent => tui_markdown::from_str(output),
    };
    let body = Paragraph::new(body_text)
        .wrap(Wrap { trim: false })
        .scroll((ws.result_scroll_y, 0))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.body_area);

    let status_line = if let Some(error) = &ws.last_error {
        Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(status) = &ws.status_line {
        Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(Color::Green),
        ))
    } else if ws.mode == Mode::GenerateQuiz {
        if ws.quiz.is_empty() {
            Line::from(Span::styled(
                "Could not parse quiz properly for export. Try generating again.",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(format!("Parsed {} questions", ws.quiz.len()))
        }
    } else {
        Line::from("")
    };
    let status = Paragraph::new(status_line).alignment(Alignment::Center);
    f.render_widget(status, layout.status_area);

    let mut help_line = Vec::new();
    if ws.mode == Mode::GenerateQuiz && !ws.quiz.is_empty() {
        help_line.push(key_span("c"));
        help_line.push(Span::from(" CSV  "));
    }
    let pdf_available = match ws.mode {
        Mode::GenerateQuiz => !ws.quiz.is_empty(),
        Mode::Analyze | Mode::CreateContent => ws.output.is_some(),
    };
    if pdf_available {
        help_line.push(key_span("p"));
        help_line.push(Span::from(" PDF  "));
    }
    help_line.extend([
        key_span("r"),
        Span::from(" Regenerate  "),
        key_span("e"),
        Span::from(" Edit  "),
        key_span("m"),
        Span::from(" Menu  "),
        key_span("q"),
        Span::from(" Quit"),
    ]);

    let help = Paragraph::new(vec![Line::from(help_line)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
