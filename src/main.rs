//! A tool to analyze GitHub profiles and summarize their repositories.
//!
//! # Overview
//!
//! `gh-stats` fetches a public GitHub profile along with its repository
//! listing and produces aggregate statistics: star/fork/watcher totals, a
//! language histogram, and counts of repositories with a license, a
//! description, an assumed README, or an archived flag.
//!
//! # Installation
//!
//! ```bash
//! cargo install gh-stats
//! ```
//!
//! # Quick Start
//!
//! Analyze a single user:
//!
//! ```bash
//! gh-stats octocat
//! ```
//!
//! This displays a console report with the profile summary, repository
//! counts, totals, and a language histogram.
//!
//! # Basic Usage
//!
//! **Analyze several users in one run:**
//! ```bash
//! gh-stats octocat torvalds
//! ```
//!
//! Users are analyzed sequentially; a failure for one user is reported and
//! the remaining users are still processed. The exit code is nonzero if any
//! user failed.
//!
//! **Emit the analysis as JSON:**
//! ```bash
//! gh-stats --json octocat
//! ```
//!
//! The JSON output carries three sections: `profile` (the account subset),
//! `statistics` (totals and the language histogram), and
//! `repository_analysis` (per-repository predicate counts). A failed lookup
//! prints `{"error": "..."}` instead.
//!
//! **Control colored output:**
//! ```bash
//! gh-stats --color always octocat
//! gh-stats --color never octocat
//! ```
//!
//! # GitHub Access
//!
//! Unauthenticated requests are allowed but rate-limited aggressively by
//! GitHub. To raise the limit:
//!
//! 1. Create a personal access token at <https://github.com/settings/tokens>
//! 2. No special permissions are needed (public data only)
//! 3. Provide the token via environment variable or flag
//!
//! **Environment variable (recommended):**
//! ```bash
//! export GITHUB_TOKEN=ghp_xxxxxxxxxxxxxxxxxxxx
//! gh-stats octocat
//! ```
//!
//! **Command-line flag:**
//! ```bash
//! gh-stats --github-token ghp_xxxxxxxxxxxxxxxxxxxx octocat
//! ```
//!
//! # Notes on the Numbers
//!
//! - The repository listing covers the first 100 repositories sorted by most
//!   recent update; accounts with more repositories are summarized from that
//!   page alone.
//! - The "with README" count is a heuristic: the API exposes no direct README
//!   signal, so any repository with nonzero size is assumed to have one.
//! - Repositories without a detected primary language do not appear in the
//!   language histogram.
//!
//! # Exit Codes
//!
//! - `0`: every requested user was analyzed
//! - nonzero: at least one user could not be analyzed (unknown user,
//!   upstream API failure, or network error)
//!
//! # Troubleshooting
//!
//! ## GitHub API Rate Limiting
//!
//! Public (unauthenticated) GitHub API access is limited to 60 requests per
//! hour. A token raises that to 5000. If lookups start failing with
//! `GitHub API error: 403`, supply a token via `GITHUB_TOKEN`.
//!
//! ## Unknown Users
//!
//! `User 'name' not found` means the username does not exist on GitHub.
//! Check the spelling; organization accounts work too.

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use gh_stats::Result;

mod commands;

use crate::commands::{AnalyzeArgs, analyze_profiles};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "gh-stats", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(flatten)]
    args: AnalyzeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    analyze_profiles(&cli.args).await
}
