pub mod ai;
pub mod ai_worker;
pub mod export;
pub mod file_io;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use ai::{
    system_prompt, user_prompt, ModelConfig, OpenRouterClient, DEFAULT_MODEL, MODEL_CHOICES,
};
pub use ai_worker::spawn_ai_worker;
pub use export::{quiz_to_csv, quiz_to_pdf, text_to_pdf};
pub use file_io::{export_path, sanitize_file_stem, save_export};
pub use models::{AiRequest, AiResponse, AppState, Mode, Workspace};
pub use quiz::{parse_quiz, QuizQuestion};
pub use session::{handle_editor_input, handle_menu_input, handle_result_input};
pub use ui::{draw_editor, draw_generating, draw_menu, draw_result};
pub use utils::calculate_wrapped_cursor_position;
