use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ai::MODEL_CHOICES;
use crate::models::{Mode, Workspace};

fn mode_description(mode: Mode) -> &'static str {
    match mode {
        Mode::Analyze => "Summarize insights from a block of text",
        Mode::CreateContent => "Generate new content from a prompt",
        Mode::GenerateQuiz => "Build an exportable multiple-choice quiz",
    }
}

fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_menu(f: &mut Frame, ws: &Workspace) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Content Studio")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = Mode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let style = if i == ws.menu_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{:<16} {}", mode.label(), mode_description(*mode))).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Select a Mode"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(list, chunks[1]);

    let model_line = if ws.ai_enabled {
        Line::from(vec![
            Span::from("Model: "),
            Span::styled(
                MODEL_CHOICES[ws.model_index],
                Style::default().fg(Color::Green),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "OPENROUTER_API_KEY not set - generation disabled",
            Style::default().fg(Color::Red),
        ))
    };
    let model = Paragraph::new(model_line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(model, chunks[2]);

    let help_text = vec![Line::from(vec![
        key_span("Up/Down"),
        Span::from(" Navigate  "),
        key_span("Enter"),
        Span::from(" Select  "),
        key_span("Tab"),
        Span::from(" Model  "),
        key_span("q"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
