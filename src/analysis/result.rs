use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete result of analyzing one user: the profile subset, aggregate
/// statistics, and the repository-level counts. Computed fresh per call,
/// never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub profile: ProfileSummary,
    pub statistics: Statistics,
    pub repository_analysis: RepositoryAnalysis,
}

/// The subset of profile fields carried into the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub username: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Sums and the language histogram over the repository listing.
///
/// The readme and license counts also appear in [`RepositoryAnalysis`];
/// both sections carry them, matching the shape consumers already expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub total_stars: u64,
    pub total_forks: u64,
    pub total_watchers: u64,

    /// Language name to number of repositories whose primary language it is.
    /// Repositories without a detected language are not counted under any key.
    pub languages: BTreeMap<String, u64>,

    pub repos_with_readme: u64,
    pub repos_with_license: u64,
}

/// Per-repository predicate counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryAnalysis {
    pub total_repositories: u64,

    /// Heuristic: a repository with nonzero size is assumed to have a README.
    /// The API offers no direct signal, so this is an approximation.
    pub repos_with_readme: u64,

    pub repos_with_license: u64,
    pub repos_with_description: u64,
    pub archived_repos: u64,
    pub active_repos: u64,
}
