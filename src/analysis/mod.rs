//! Profile and repository aggregation
//!
//! This module turns the raw records fetched by [`crate::hosting`] into an
//! [`AnalysisResult`]: a profile summary plus derived counts and sums over the
//! repository listing (star/fork/watcher totals, a language histogram, and
//! license/description/archival counts).
//!
//! The aggregation itself is a pure, single-pass function with no I/O. The
//! [`Analyzer`] wraps it with the two fetches it depends on, short-circuiting
//! on a failed profile fetch so the repository endpoint is never contacted for
//! an unknown user.

mod analyzer;
mod result;

pub use analyzer::{Analyzer, analyze};
pub use result::{AnalysisResult, ProfileSummary, RepositoryAnalysis, Statistics};
