use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc;
use std::time::Duration;

use content_studio::{
    ai_worker::spawn_ai_worker,
    logger,
    models::{AppState, Workspace},
    session::{handle_editor_input, handle_menu_input, handle_result_input},
    ui::{draw_editor, draw_generating, draw_menu, draw_result},
};

fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    logger::init();

    let ai_enabled = std::env::var("OPENROUTER_API_KEY").is_ok();
    if !ai_enabled {
        logger::log("OPENROUTER_API_KEY not set, generation disabled");
    }

    let (req_tx, req_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let _worker = spawn_ai_worker(resp_tx, req_rx);

    let mut workspace = Workspace::new(ai_enabled);
    workspace.ai_tx = Some(req_tx);
    workspace.ai_rx = Some(resp_rx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut workspace);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workspace: &mut Workspace,
) -> io::Result<()> {
    let mut app_state = AppState::Menu;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(f, workspace),
            AppState::Editor => draw_editor(f, workspace),
            AppState::Generating => draw_generating(f, workspace),
            AppState::Result => draw_result(f, workspace),
        })?;

        // Short poll so the busy screen animates and worker responses drain
        // without a keypress.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            match app_state {
                AppState::Menu => {
                    if handle_menu_input(workspace, key, &mut app_state) {
                        break;
                    }
                }
                AppState::Editor => handle_editor_input(workspace, key, &mut app_state),
                // No cancellation: the request either completes or errors.
                AppState::Generating => {}
                AppState::Result => {
                    if handle_result_input(workspace, key, &mut app_state) {
                        break;
                    }
                }
            }
        }

        let mut responses = Vec::new();
        if let Some(rx) = &workspace.ai_rx {
            while let Ok(response) = rx.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            workspace.process_ai_response(response);
            if app_state == AppState::Generating {
                app_state = AppState::Result;
            }
        }
    }

    Ok(())
}
