//! Report generation
//!
//! Renders an [`crate::analysis::AnalysisResult`] either as a colored,
//! terminal-width-aware console report or as pretty-printed JSON. Fetch
//! failures render in JSON mode as an `{"error": "..."}` object.

mod console;
mod json;

pub use console::generate as generate_console;
pub use json::{generate as generate_json, generate_error as generate_json_error};
