//! Report rendering: plain text (default) or JSON.

pub mod json;
pub mod text;

pub use json::render_json_report;
pub use text::write_text_report;
