pub mod csv;
pub mod pdf;

pub use csv::quiz_to_csv;
pub use pdf::{quiz_to_pdf, text_to_pdf};
