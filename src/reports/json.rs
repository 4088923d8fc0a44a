use crate::Result;
use crate::analysis::AnalysisResult;
use crate::hosting::FetchError;
use core::fmt::Write;
use ohno::IntoAppError;

/// Write the analysis result as pretty-printed JSON.
pub fn generate<W: Write>(result: &AnalysisResult, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(result).into_app_err("could not serialize analysis result")?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Write a fetch failure as the boundary error object: `{"error": "<message>"}`.
pub fn generate_error<W: Write>(error: &FetchError, writer: &mut W) -> Result<()> {
    let body = serde_json::json!({ "error": error.to_string() });
    let json = serde_json::to_string_pretty(&body).into_app_err("could not serialize error object")?;
    writeln!(writer, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::hosting::{Profile, Repository};

    #[test]
    fn test_generate_round_trips_through_serde() {
        let profile = Profile {
            login: "octocat".to_owned(),
            name: None,
            bio: None,
            avatar_url: None,
            public_repos: 1,
            followers: 0,
            following: 0,
            created_at: None,
        };
        let repos = vec![Repository {
            stargazers_count: 7,
            language: Some("Rust".to_owned()),
            ..Repository::default()
        }];

        let mut out = String::new();
        generate(&analyze(&profile, &repos), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["profile"]["username"], "octocat");
        assert_eq!(value["statistics"]["total_stars"], 7);
        assert_eq!(value["statistics"]["languages"]["Rust"], 1);
    }

    #[test]
    fn test_generate_error_object() {
        let err = FetchError::NotFound {
            username: "octocat".to_owned(),
        };

        let mut out = String::new();
        generate_error(&err, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "User 'octocat' not found");
    }

    #[test]
    fn test_generate_error_object_for_upstream_failure() {
        let err = FetchError::Upstream { status: 500 };

        let mut out = String::new();
        generate_error(&err, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "GitHub API error: 500");
    }
}
