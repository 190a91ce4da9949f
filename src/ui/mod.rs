pub mod layout;
mod editor;
mod generating;
mod menu;
mod result;

pub use editor::draw_editor;
pub use generating::draw_generating;
pub use layout::{calculate_editor_chunks, calculate_result_chunks};
pub use menu::draw_menu;
pub use result::draw_result;
