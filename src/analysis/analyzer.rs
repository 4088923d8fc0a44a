use crate::analysis::result::{AnalysisResult, ProfileSummary, RepositoryAnalysis, Statistics};
use crate::hosting::{Client, FetchError, Profile, Repository};
use std::collections::BTreeMap;

const LOG_TARGET: &str = "  analysis";

/// Analyzes GitHub profiles and repositories.
///
/// Owns the API client it fetches with; construct one per run with the
/// client injected rather than holding any process-wide state.
#[derive(Debug, Clone)]
pub struct Analyzer {
    client: Client,
}

impl Analyzer {
    /// Create a new analyzer using the given API client
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Run the complete analysis for one user.
    ///
    /// Fetches the profile first and short-circuits on failure, so the
    /// repository endpoint is never contacted for an unknown user. The two
    /// fetches are the only I/O; the aggregation itself is pure.
    pub async fn analyze_profile(&self, username: &str) -> Result<AnalysisResult, FetchError> {
        let profile = self.client.get_profile(username).await?;
        let repos = self.client.get_repositories(username).await?;

        log::debug!(target: LOG_TARGET, "Aggregating {} repositories for user '{username}'", repos.len());

        Ok(analyze(&profile, &repos))
    }
}

/// Compute the aggregate analysis for a fetched profile and repository list.
///
/// Pure function, no I/O. A single traversal of `repos` computes every count
/// and sum; an empty list yields zeros and an empty language histogram.
#[must_use]
pub fn analyze(profile: &Profile, repos: &[Repository]) -> AnalysisResult {
    let mut repos_with_readme = 0;
    let mut repos_with_license = 0;
    let mut repos_with_description = 0;
    let mut archived_repos = 0;

    let mut total_stars = 0;
    let mut total_forks = 0;
    let mut total_watchers = 0;

    let mut languages: BTreeMap<String, u64> = BTreeMap::new();

    for repo in repos {
        if repo.description.as_deref().is_some_and(|d| !d.is_empty()) {
            repos_with_description += 1;
        }

        if repo.license.is_some() {
            repos_with_license += 1;
        }

        if repo.archived {
            archived_repos += 1;
        }

        // The API provides no direct README signal; nonzero size is the
        // stand-in. Known approximation, kept on purpose.
        if repo.size > 0 {
            repos_with_readme += 1;
        }

        total_stars += repo.stargazers_count;
        total_forks += repo.forks_count;
        total_watchers += repo.watchers_count;

        if let Some(language) = repo.language.as_deref()
            && !language.is_empty()
        {
            *languages.entry(language.to_owned()).or_insert(0) += 1;
        }
    }

    let total_repositories = repos.len() as u64;

    AnalysisResult {
        profile: ProfileSummary {
            username: profile.login.clone(),
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            avatar_url: profile.avatar_url.clone(),
            public_repos: profile.public_repos,
            followers: profile.followers,
            following: profile.following,
            created_at: profile.created_at,
        },
        statistics: Statistics {
            total_stars,
            total_forks,
            total_watchers,
            languages,
            repos_with_readme,
            repos_with_license,
        },
        repository_analysis: RepositoryAnalysis {
            total_repositories,
            repos_with_readme,
            repos_with_license,
            repos_with_description,
            archived_repos,
            active_repos: total_repositories - archived_repos,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosting::License;

    fn profile(login: &str) -> Profile {
        Profile {
            login: login.to_owned(),
            name: None,
            bio: None,
            avatar_url: None,
            public_repos: 0,
            followers: 0,
            following: 0,
            created_at: None,
        }
    }

    #[test]
    fn test_empty_repository_list() {
        let result = analyze(&profile("octocat"), &[]);

        assert_eq!(result.repository_analysis.total_repositories, 0);
        assert_eq!(result.repository_analysis.active_repos, 0);
        assert_eq!(result.repository_analysis.archived_repos, 0);
        assert_eq!(result.statistics.total_stars, 0);
        assert_eq!(result.statistics.total_forks, 0);
        assert_eq!(result.statistics.total_watchers, 0);
        assert!(result.statistics.languages.is_empty());
    }

    #[test]
    fn test_active_plus_archived_equals_total() {
        let repos = vec![
            Repository {
                archived: true,
                ..Repository::default()
            },
            Repository::default(),
            Repository {
                archived: true,
                ..Repository::default()
            },
            Repository::default(),
            Repository::default(),
        ];

        let result = analyze(&profile("someone"), &repos);
        let analysis = &result.repository_analysis;

        assert_eq!(analysis.total_repositories, 5);
        assert_eq!(analysis.archived_repos, 2);
        assert_eq!(analysis.active_repos, 3);
        assert_eq!(analysis.active_repos + analysis.archived_repos, analysis.total_repositories);
    }

    #[test]
    fn test_readme_and_description_counts_diverge() {
        // Nonzero size with no description: counts toward readme only
        let repos = vec![Repository {
            size: 5,
            description: None,
            ..Repository::default()
        }];

        let result = analyze(&profile("someone"), &repos);

        assert_eq!(result.repository_analysis.repos_with_readme, 1);
        assert_eq!(result.repository_analysis.repos_with_description, 0);
    }

    #[test]
    fn test_empty_description_does_not_count() {
        let repos = vec![Repository {
            description: Some(String::new()),
            ..Repository::default()
        }];

        let result = analyze(&profile("someone"), &repos);
        assert_eq!(result.repository_analysis.repos_with_description, 0);
    }

    #[test]
    fn test_null_language_excluded_from_histogram() {
        let repos = vec![
            Repository {
                language: Some("Rust".to_owned()),
                ..Repository::default()
            },
            Repository {
                language: None,
                ..Repository::default()
            },
            Repository {
                language: Some("Rust".to_owned()),
                ..Repository::default()
            },
        ];

        let result = analyze(&profile("someone"), &repos);
        let languages = &result.statistics.languages;

        assert_eq!(languages.len(), 1);
        assert_eq!(languages.get("Rust"), Some(&2));
        assert!(languages.values().sum::<u64>() <= result.repository_analysis.total_repositories);
    }

    #[test]
    fn test_two_repo_aggregate() {
        let repos = vec![
            Repository {
                stargazers_count: 5,
                forks_count: 1,
                language: Some("Go".to_owned()),
                size: 10,
                license: Some(License::default()),
                description: Some("x".to_owned()),
                archived: false,
                ..Repository::default()
            },
            Repository {
                stargazers_count: 3,
                language: None,
                size: 0,
                archived: true,
                ..Repository::default()
            },
        ];

        let result = analyze(&profile("someone"), &repos);

        assert_eq!(result.statistics.total_stars, 8);
        assert_eq!(result.statistics.total_forks, 1);
        assert_eq!(result.statistics.languages.get("Go"), Some(&1));
        assert_eq!(result.statistics.languages.len(), 1);
        assert_eq!(result.statistics.repos_with_readme, 1);
        assert_eq!(result.statistics.repos_with_license, 1);
        assert_eq!(result.repository_analysis.archived_repos, 1);
        assert_eq!(result.repository_analysis.active_repos, 1);
    }

    #[test]
    fn test_profile_subset_carried_through() {
        let source = Profile {
            login: "octocat".to_owned(),
            name: Some("The Octocat".to_owned()),
            bio: Some("I build things".to_owned()),
            avatar_url: Some("https://example.invalid/a.png".to_owned()),
            public_repos: 8,
            followers: 100,
            following: 9,
            created_at: None,
        };

        let result = analyze(&source, &[]);

        assert_eq!(result.profile.username, "octocat");
        assert_eq!(result.profile.name.as_deref(), Some("The Octocat"));
        assert_eq!(result.profile.public_repos, 8);
        assert_eq!(result.profile.followers, 100);
        assert_eq!(result.profile.following, 9);
    }
}
