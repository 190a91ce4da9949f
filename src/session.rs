use crate::ai::MODEL_CHOICES;
use crate::export::{quiz_to_csv, quiz_to_pdf, text_to_pdf};
use crate::file_io::{export_path, sanitize_file_stem, save_export};
use crate::models::{AppState, Mode, Workspace};
use crossterm::event::{KeyCode, KeyEvent};

/// Menu keys. Returns true when the user asked to quit.
pub fn handle_menu_input(ws: &mut Workspace, key: KeyEvent, app_state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Up => {
            ws.menu_index = ws.menu_index.saturating_sub(1);
        }
        KeyCode::Down => {
            if ws.menu_index < Mode::ALL.len() - 1 {
                ws.menu_index += 1;
            }
        }
        KeyCode::Tab => {
            ws.model_index = (ws.model_index + 1) % MODEL_CHOICES.len();
        }
        KeyCode::Enter => {
            let selected = Mode::ALL[ws.menu_index];
            if ws.mode != selected {
                ws.input_buffer.clear();
                ws.cursor_position = 0;
            }
            ws.mode = selected;
            ws.output = None;
            ws.quiz.clear();
            ws.status_line = None;
            ws.last_error = None;
            *app_state = AppState::Editor;
        }
        KeyCode::Char('q') => return true,
        _ => {}
    }
    false
}

pub fn handle_editor_input(ws: &mut Workspace, key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::Menu;
        }
        KeyCode::Enter => {
            if ws.begin_generation() {
                *app_state = AppState::Generating;
            }
        }
        KeyCode::Up => {
            if ws.mode == Mode::GenerateQuiz {
                ws.adjust_question_count(1);
            }
        }
        KeyCode::Down => {
            if ws.mode == Mode::GenerateQuiz {
                ws.adjust_question_count(-1);
            }
        }
        KeyCode::Left => {
            ws.cursor_position = prev_char_boundary(&ws.input_buffer, ws.cursor_position);
        }
        KeyCode::Right => {
            ws.cursor_position = next_char_boundary(&ws.input_buffer, ws.cursor_position);
        }
        KeyCode::Backspace => {
            ws.last_error = None;
            if ws.cursor_position > 0 {
                let prev = prev_char_boundary(&ws.input_buffer, ws.cursor_position);
                ws.input_buffer.remove(prev);
                ws.cursor_position = prev;
            }
        }
        KeyCode::Char(c) => {
            ws.last_error = None;
            ws.input_buffer.insert(ws.cursor_position, c);
            ws.cursor_position += c.len_utf8();
        }
        _ => {}
    }
}

/// Result-screen keys: exports, scrolling, navigation. Returns true when the
/// user asked to quit.
pub fn handle_result_input(ws: &mut Workspace, key: KeyEvent, app_state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('m') => {
            ws.status_line = None;
            *app_state = AppState::Menu;
        }
        KeyCode::Char('e') => {
            ws.status_line = None;
            *app_state = AppState::Editor;
        }
        KeyCode::Char('r') => {
            if ws.begin_generation() {
                *app_state = AppState::Generating;
            }
        }
        KeyCode::Char('c') => save_quiz_csv(ws),
        KeyCode::Char('p') => save_pdf(ws),
        KeyCode::Up => {
            ws.result_scroll_y = ws.result_scroll_y.saturating_sub(1);
        }
        KeyCode::Down => {
            ws.result_scroll_y = ws.result_scroll_y.saturating_add(1);
        }
        _ => {}
    }
    false
}

fn save_quiz_csv(ws: &mut Workspace) {
    if ws.mode != Mode::GenerateQuiz || ws.quiz.is_empty() {
        return;
    }
    let stem = sanitize_file_stem(ws.topic());
    let path = export_path(&format!("{stem}_quiz.csv"));
    let result = save_export(&path, &quiz_to_csv(&ws.quiz));
    record_save(ws, result, &path);
}

fn save_pdf(ws: &mut Workspace) {
    let (bytes, file_name) = match ws.mode {
        Mode::GenerateQuiz => {
            if ws.quiz.is_empty() {
                return;
            }
            let stem = sanitize_file_stem(ws.topic());
            (
                quiz_to_pdf(&ws.quiz, ws.mode.result_title()),
                format!("{stem}_quiz.pdf"),
            )
        }
        Mode::Analyze => {
            let Some(output) = &ws.output else { return };
            (
                text_to_pdf(output, ws.mode.result_title()),
                "analysis_result.pdf".to_string(),
            )
        }
        Mode::CreateContent => {
            let Some(output) = &ws.output else { return };
            (
                text_to_pdf(output, ws.mode.result_title()),
                "generated_content.pdf".to_string(),
            )
        }
    };

    let path = export_path(&file_name);
    let result = save_export(&path, &bytes);
    record_save(ws, result, &path);
}

fn record_save(ws: &mut Workspace, result: std::io::Result<()>, path: &std::path::Path) {
    ws.status_line = Some(match result {
        Ok(()) => format!("Saved {}", path.display()),
        Err(e) => format!("Save failed: {}", e),
    });
}

fn prev_char_boundary(s: &str, from: usize) -> usize {
    let mut idx = from.min(s.len());
    while idx > 0 {
        idx -= 1;
        if s.is_char_boundary(idx) {
            break;
        }
    }
    idx
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    if from >= s.len() {
        return s.len();
    }
    let mut idx = from + 1;
    while idx < s.len() && !s.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}
