//! GitHub API client
//!
//! Minimal GitHub API client for fetching user profiles and repository
//! listings.

use crate::hosting::models::{Profile, Repository};
use core::fmt;
use core::time::Duration;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

const LOG_TARGET: &str = "   hosting";

const USER_AGENT: &str = "gh-stats";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Maximum repositories fetched per user. The listing is not paginated
/// beyond this first page.
const REPO_PAGE_SIZE: u32 = 100;

/// Repository listing sort order (most recently updated first).
const REPO_SORT_ORDER: &str = "updated";

/// Applied to every outbound request so a stalled upstream cannot hang a run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a failed fetch against the GitHub API.
#[derive(Debug)]
pub enum FetchError {
    /// The requested user does not exist upstream (HTTP 404).
    NotFound { username: String },

    /// The API returned a non-success status other than a profile 404.
    Upstream { status: u16 },

    /// The request failed before an HTTP status was available
    /// (connect error, timeout, or a malformed response body).
    Transport(ohno::AppError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { username } => write!(f, "User '{username}' not found"),
            Self::Upstream { status } => write!(f, "GitHub API error: {status}"),
            Self::Transport(e) => write!(f, "{e}"),
        }
    }
}

impl core::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e.as_ref()),
            Self::NotFound { .. } | Self::Upstream { .. } => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.into())
    }
}

/// GitHub API client with optional authentication
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a new GitHub API client with an optional access token and base URL
    pub fn new(token: Option<&str>, base_url: impl Into<String>) -> crate::Result<Self> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        if let Some(t) = token {
            let mut auth_val = HeaderValue::from_str(&format!("token {t}"))?;
            auth_val.set_sensitive(true);

            let _ = headers.insert(AUTHORIZATION, auth_val);
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Get the base URL for this client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the profile record for a user.
    ///
    /// A 404 means the username does not exist and maps to
    /// [`FetchError::NotFound`]; any other non-success status maps to
    /// [`FetchError::Upstream`].
    pub async fn get_profile(&self, username: &str) -> Result<Profile, FetchError> {
        let url = format!("{}/users/{username}", self.base_url);

        log::info!(target: LOG_TARGET, "Querying GitHub for the profile of user '{username}'");

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            log::info!(target: LOG_TARGET, "User '{username}' not found (404)");
            return Err(FetchError::NotFound {
                username: username.to_owned(),
            });
        }

        if !status.is_success() {
            log::info!(target: LOG_TARGET, "Profile fetch for '{username}' failed with status {status}");
            return Err(FetchError::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(resp.json().await?)
    }

    /// Fetch the public repository listing for a user.
    ///
    /// Requests a single page of up to [`REPO_PAGE_SIZE`] repositories sorted
    /// by most recent update. The returned list may be empty. Any non-success
    /// status maps to [`FetchError::Upstream`].
    pub async fn get_repositories(&self, username: &str) -> Result<Vec<Repository>, FetchError> {
        let url = format!("{}/users/{username}/repos", self.base_url);
        let page_size = REPO_PAGE_SIZE.to_string();

        log::info!(target: LOG_TARGET, "Querying GitHub for the repositories of user '{username}'");

        let resp = self
            .client
            .get(&url)
            .query(&[("per_page", page_size.as_str()), ("sort", REPO_SORT_ORDER)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            log::info!(target: LOG_TARGET, "Repository fetch for '{username}' failed with status {status}");
            return Err(FetchError::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(resp.json().await?)
    }
}
