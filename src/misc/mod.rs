//! Odds and ends shared between the library and the command-line surface.

use clap::ValueEnum;
use std::io::{IsTerminal, stdout};

/// Controls when console output uses color
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

impl ColorMode {
    /// Resolve the mode to a concrete yes/no decision.
    #[must_use]
    pub fn colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout().is_terminal(),
        }
    }
}
