//! Output formatting

pub mod console;
pub mod formatter;
pub mod json;

pub use formatter::{OutputFormatter, formatter_for};
