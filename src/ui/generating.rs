use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Mode, Workspace};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

fn busy_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Analyze => "Analyzing...",
        Mode::CreateContent => "Generating content...",
        Mode::GenerateQuiz => "Generating quiz...",
    }
}

pub fn draw_generating(f: &mut Frame, ws: &Workspace) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new(ws.mode.label())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let elapsed = ws
        .generation_start
        .map(|start| start.elapsed())
        .unwrap_or_default();
    let frame = SPINNER_FRAMES[(elapsed.as_millis() / 250) as usize % SPINNER_FRAMES.len()];

    let busy = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {} {:.0}s", frame, busy_label(ws.mode), elapsed.as_secs_f32()),
            Style::default().fg(Color::Yellow),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(busy, chunks[1]);

    let help = Paragraph::new("Waiting for the model to respond")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
