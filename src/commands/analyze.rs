use super::common::{Common, CommonArgs};
use clap::Parser;
use gh_stats::Result;
use ohno::bail;

const SEPARATOR_WIDTH: usize = 40;

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// GitHub usernames to analyze
    #[arg(value_name = "USERNAME", required = true)]
    pub usernames: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Analyze each requested username in turn.
///
/// Failures are reported per user and the process exits with an error once
/// every username has been attempted.
pub async fn analyze_profiles(args: &AnalyzeArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let mut failed = 0_usize;

    for (index, username) in args.usernames.iter().enumerate() {
        if index > 0 && !common.json() {
            println!();
            println!("{}", "═".repeat(SEPARATOR_WIDTH));
            println!();
        }

        match common.analyze_profile(username).await {
            Ok(result) => common.report(&result)?,
            Err(e) => {
                common.report_failure(&e)?;
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("failed to analyze {failed} profile(s)");
    }

    Ok(())
}
