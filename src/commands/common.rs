//! Shared plumbing for the command-line surface: argument definitions,
//! logging setup, client construction, and report dispatch.

use clap::{Args, ValueEnum};
use gh_stats::Result;
use gh_stats::analysis::{AnalysisResult, Analyzer};
use gh_stats::hosting::{Client, FetchError};
use gh_stats::misc::ColorMode;
use gh_stats::reports::{generate_console, generate_json, generate_json_error};
use url::Url;

const DEFAULT_API_URL: &str = "https://api.github.com";

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

/// Arguments shared by every invocation
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN")]
    pub github_token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// Output the analysis as JSON instead of a console report
    #[arg(long)]
    pub json: bool,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Per-run state: the analyzer with its injected client, plus output options.
pub struct Common {
    analyzer: Analyzer,
    color: ColorMode,
    json: bool,
}

impl Common {
    /// Create a new processor with logging initialized and the API client wired up
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let base_url = args.api_url.as_str().trim_end_matches('/');
        let client = Client::new(args.github_token.as_deref(), base_url)?;

        Ok(Self {
            analyzer: Analyzer::new(client),
            color: args.color,
            json: args.json,
        })
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        if log_level == LogLevel::None {
            return;
        }

        let level = match log_level {
            LogLevel::None => return, // Already checked above, but being explicit
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug) || matches!(log_level, LogLevel::Trace))
            .init();
    }

    /// Whether output was requested as JSON
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    pub async fn analyze_profile(&self, username: &str) -> Result<AnalysisResult, FetchError> {
        self.analyzer.analyze_profile(username).await
    }

    pub fn report(&self, result: &AnalysisResult) -> Result<()> {
        let mut output = String::new();

        if self.json {
            generate_json(result, &mut output)?;
        } else {
            generate_console(result, self.color, &mut output)?;
        }

        print!("{output}");
        Ok(())
    }

    pub fn report_failure(&self, error: &FetchError) -> Result<()> {
        if self.json {
            let mut output = String::new();
            generate_json_error(error, &mut output)?;
            print!("{output}");
        } else {
            eprintln!("✗ {error}");
        }

        Ok(())
    }
}
