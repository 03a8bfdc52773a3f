//! Combined Log Format parsing.

pub mod parse;
pub mod row;

pub use parse::{LineParser, MAX_LINE_BYTES};
pub use row::LogRecord;
