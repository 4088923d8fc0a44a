//! Command-line surface of the tool.

pub mod analyze;
pub mod common;

pub use analyze::{AnalyzeArgs, analyze_profiles};
